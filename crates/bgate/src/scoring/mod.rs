mod rating;
mod scales;

pub use rating::Rating;

use crate::rubric::Rubric;
use crate::scenario::ScenarioRecord;
use scales::{clamp_0_100, scale_binary, scale_clarity, scale_ordinal5};
use serde::{Deserialize, Serialize};

const REASON_MISSING_INCIDENT_RESPONSE: &str = "Missing incident-response governance";
const REASON_MISSING_UPGRADE_POLICY: &str = "Missing upgrade/patch governance";
const REASON_MISSING_DISPUTE_PROCESS: &str = "Missing dispute-resolution governance";
const REASON_UNCLEAR_DECISION_RIGHTS: &str = "Unclear decision rights";

/// Sentinel used in `penalty_reasons` when no penalty applied.
pub const NO_PENALTY_REASONS: &str = "None";

/// Stateless engine applying one rubric to scenario records.
///
/// Scoring is pure arithmetic: no I/O, no shared mutable state, and the same
/// scenario always produces a bit-identical record.
pub struct ScoringEngine {
    rubric: Rubric,
}

impl ScoringEngine {
    pub fn new(rubric: Rubric) -> Self {
        Self { rubric }
    }

    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    /// Score one scenario into its sub-indices, penalties, and rating.
    pub fn score(&self, scenario: &ScenarioRecord) -> ScoreRecord {
        let trust_asymmetry = scale_ordinal5(f64::from(scenario.trust_asymmetry_level));
        let dispute_load =
            f64::from(scenario.dispute_frequency_per_month).min(10.0) / 10.0 * 100.0;

        // ARS dimensions.
        let use_case_fit = scales::use_case_fit(
            scenario.stakeholders_count,
            scenario.trust_asymmetry_level,
            scenario.dispute_frequency_per_month,
            scenario.data_sensitivity,
        );
        let org_capability = 0.55 * scale_ordinal5(f64::from(scenario.data_governance_maturity))
            + 0.45 * scale_ordinal5(f64::from(scenario.change_readiness));
        let economic_viability = scales::economic_score(
            scenario.cost_baseline,
            scenario.cost_blockchain_est,
            scenario.time_baseline,
            scenario.time_blockchain_est,
        );
        // Lower asymmetry and fewer disputes make alignment easier.
        let stakeholder_alignment =
            0.5 * (100.0 - trust_asymmetry) + 0.5 * (100.0 - dispute_load);

        let ars_dims = &self.rubric.scores.ars.dimensions;
        let ars = ars_dims.use_case_fit.weight * use_case_fit
            + ars_dims.org_capability.weight * org_capability
            + ars_dims.economic_viability.weight * economic_viability
            + ars_dims.stakeholder_alignment.weight * stakeholder_alignment;

        // GQS dimensions.
        let decision_rights = scale_clarity(scenario.decision_rights_clarity);
        let dispute_resolution = scale_binary(scenario.dispute_process_present);
        let security_compliance =
            0.6 * scale_ordinal5(f64::from(scenario.key_management_maturity))
                + 0.4 * scale_binary(scenario.incident_response_present);
        let data_governance = scale_ordinal5(f64::from(scenario.data_governance_maturity));
        let upgrade_governance = scale_binary(scenario.upgrade_policy_present);
        let observability = scale_ordinal5(f64::from(scenario.observability_level));

        let gqs_dims = &self.rubric.scores.gqs.dimensions;
        let gqs = gqs_dims.decision_rights.weight * decision_rights
            + gqs_dims.dispute_resolution.weight * dispute_resolution
            + gqs_dims.security_compliance.weight * security_compliance
            + gqs_dims.data_governance.weight * data_governance
            + gqs_dims.upgrade_governance.weight * upgrade_governance
            + gqs_dims.observability.weight * observability;

        // TSS dimensions reuse the values computed above by value.
        let operational_resilience = 0.5 * observability + 0.5 * security_compliance;
        let stakeholder_drag =
            f64::from(scenario.stakeholders_count).min(30.0) / 30.0 * 100.0 * 0.3;
        let incentive_sustainability =
            0.5 * (100.0 - trust_asymmetry) + 0.5 * (100.0 - stakeholder_drag);
        let ethics_legitimacy = 0.5 * (100.0 - dispute_load)
            + 0.5 * (100.0 - scale_ordinal5(f64::from(scenario.regulatory_pressure)));
        let ecosystem_dependence_risk =
            0.5 * (100.0 - economic_viability) + 0.5 * (100.0 - org_capability);

        let tss_dims = &self.rubric.scores.tss.dimensions;
        let tss = tss_dims.operational_resilience.weight * operational_resilience
            + tss_dims.incentive_sustainability.weight * incentive_sustainability
            + tss_dims.ethics_legitimacy.weight * ethics_legitimacy
            + tss_dims.ecosystem_dependence_risk.weight * ecosystem_dependence_risk;

        let base_index = self.rubric.scores.ars.weight * ars
            + self.rubric.scores.gqs.weight * gqs
            + self.rubric.scores.tss.weight * tss;

        // Penalty pass, fixed order: incident response, upgrade policy,
        // dispute process, decision rights.
        let penalties = &self.rubric.penalties;
        let mut penalty_points = 0.0;
        let mut reasons: Vec<&'static str> = Vec::new();

        if scenario.incident_response_present == 0 {
            penalty_points += penalties.missing_incident_response.points;
            reasons.push(REASON_MISSING_INCIDENT_RESPONSE);
        }
        if scenario.upgrade_policy_present == 0 {
            penalty_points += penalties.missing_upgrade_policy.points;
            reasons.push(REASON_MISSING_UPGRADE_POLICY);
        }
        if scenario.dispute_process_present == 0 {
            penalty_points += penalties.missing_dispute_process.points;
            reasons.push(REASON_MISSING_DISPUTE_PROCESS);
        }
        if scenario.decision_rights_clarity == 0 {
            penalty_points += penalties.unclear_decision_rights.points;
            reasons.push(REASON_UNCLEAR_DECISION_RIGHTS);
        }

        let bgate_index = clamp_0_100(base_index - penalty_points);
        let rating = Rating::from_index(bgate_index, &self.rubric.thresholds);

        ScoreRecord {
            scenario_id: scenario.scenario_id.clone(),
            ars: round2(ars),
            gqs: round2(gqs),
            tss: round2(tss),
            bgate_index: round2(bgate_index),
            penalty_points: round2(penalty_points),
            rating,
            penalty_reasons: if reasons.is_empty() {
                NO_PENALTY_REASONS.to_string()
            } else {
                reasons.join("; ")
            },
        }
    }

    /// Score a batch, one record per scenario, preserving input order.
    pub fn score_all(&self, scenarios: &[ScenarioRecord]) -> Vec<ScoreRecord> {
        scenarios.iter().map(|scenario| self.score(scenario)).collect()
    }
}

/// One benchmark output row. Sub-scores and the index are rounded to two
/// decimals; internal computation keeps full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub scenario_id: String,
    #[serde(rename = "ARS")]
    pub ars: f64,
    #[serde(rename = "GQS")]
    pub gqs: f64,
    #[serde(rename = "TSS")]
    pub tss: f64,
    pub bgate_index: f64,
    pub penalty_points: f64,
    pub rating: Rating,
    pub penalty_reasons: String,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

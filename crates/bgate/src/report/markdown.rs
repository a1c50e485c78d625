use crate::scenario::ScenarioRecord;
use crate::scoring::ScoreRecord;

/// Render one scenario and its score as an officer-friendly Markdown report.
pub fn render_markdown(scenario: &ScenarioRecord, score: &ScoreRecord) -> String {
    format!(
        "# B-GATE Report — {id}

## Plain-English Summary
This report evaluates the **adoption readiness** and **governance quality** of a blockchain deployment scenario using the B-GATE benchmark.
The output is a standardized score that helps compare different governance designs and identify risk areas.

## Key Result
- **B-GATE Index:** {index}/100
- **Rating:** {rating}
- **Penalty points:** {penalty_points}
- **Penalty reasons:** {penalty_reasons}

## Score Breakdown
- **ARS (Adoption Readiness):** {ars}/100
- **GQS (Governance Quality):** {gqs}/100
- **TSS (Trustworthiness & Sustainability):** {tss}/100

## Scenario Description (Benchmark Input)
- Domain: {domain}
- Governance model: {governance_model}
- Stakeholders: {stakeholders}
- Trust asymmetry: {trust_asymmetry} / 5
- Data sensitivity: {data_sensitivity} / 5
- Dispute frequency: {dispute_frequency} per month
- Regulatory pressure: {regulatory_pressure} / 5
- Adoption stage: {adoption_stage}

## Governance Evidence Flags (Binary)
- Incident response present: {incident_response}
- Upgrade policy present: {upgrade_policy}
- Dispute process present: {dispute_process}
- Decision rights clarity: {decision_rights} (0 unclear, 2 clear)

## Notes for Non-Technical Readers
- A high score means the scenario has **clear rules**, **accountability**, and **operational readiness**.
- Penalties occur when essential governance policies are missing (incident response, upgrades, dispute resolution, decision rights).
",
        id = score.scenario_id,
        index = score.bgate_index,
        rating = score.rating.label(),
        penalty_points = score.penalty_points,
        penalty_reasons = score.penalty_reasons,
        ars = score.ars,
        gqs = score.gqs,
        tss = score.tss,
        domain = scenario.domain.label(),
        governance_model = scenario.governance_model.label(),
        stakeholders = scenario.stakeholders_count,
        trust_asymmetry = scenario.trust_asymmetry_level,
        data_sensitivity = scenario.data_sensitivity,
        dispute_frequency = scenario.dispute_frequency_per_month,
        regulatory_pressure = scenario.regulatory_pressure,
        adoption_stage = scenario.adoption_stage.label(),
        incident_response = scenario.incident_response_present,
        upgrade_policy = scenario.upgrade_policy_present,
        dispute_process = scenario.dispute_process_present,
        decision_rights = scenario.decision_rights_clarity,
    )
}

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Weighting, penalty, and threshold configuration for a scoring run.
///
/// Loaded once and shared read-only across every scoring call. The schema is
/// fixed: every weight, penalty, and threshold field must be present in the
/// rubric file, so a missing key fails at load time rather than mid-batch.
/// Weight sums are not checked; supplying weights that sum to 1.0 per score
/// is the rubric author's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rubric {
    pub scores: Scores,
    pub penalties: Penalties,
    pub thresholds: Thresholds,
}

impl Rubric {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RubricError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| RubricError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| RubricError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Top-level weights and per-dimension weights for the three sub-scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    #[serde(rename = "ARS")]
    pub ars: ScoreSpec<ArsDimensions>,
    #[serde(rename = "GQS")]
    pub gqs: ScoreSpec<GqsDimensions>,
    #[serde(rename = "TSS")]
    pub tss: ScoreSpec<TssDimensions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSpec<D> {
    pub weight: f64,
    pub dimensions: D,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArsDimensions {
    pub use_case_fit: Dimension,
    pub org_capability: Dimension,
    pub economic_viability: Dimension,
    pub stakeholder_alignment: Dimension,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GqsDimensions {
    pub decision_rights: Dimension,
    pub dispute_resolution: Dimension,
    pub security_compliance: Dimension,
    pub data_governance: Dimension,
    pub upgrade_governance: Dimension,
    pub observability: Dimension,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TssDimensions {
    pub operational_resilience: Dimension,
    pub incentive_sustainability: Dimension,
    pub ethics_legitimacy: Dimension,
    pub ecosystem_dependence_risk: Dimension,
}

/// Point deductions applied when a governance control is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Penalties {
    pub missing_incident_response: Penalty,
    pub missing_upgrade_policy: Penalty,
    pub missing_dispute_process: Penalty,
    pub unclear_decision_rights: Penalty,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Penalty {
    pub points: f64,
}

/// Rating cutoffs on the final 0-100 index. `green` must exceed `yellow`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub green: f64,
    pub yellow: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum RubricError {
    #[error("unable to read rubric file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("rubric file {} does not match the rubric schema", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RUBRIC: &str = r#"{
        "scores": {
            "ARS": {
                "weight": 0.4,
                "dimensions": {
                    "use_case_fit": { "weight": 0.35 },
                    "org_capability": { "weight": 0.25 },
                    "economic_viability": { "weight": 0.25 },
                    "stakeholder_alignment": { "weight": 0.15 }
                }
            },
            "GQS": {
                "weight": 0.35,
                "dimensions": {
                    "decision_rights": { "weight": 0.2 },
                    "dispute_resolution": { "weight": 0.15 },
                    "security_compliance": { "weight": 0.2 },
                    "data_governance": { "weight": 0.15 },
                    "upgrade_governance": { "weight": 0.15 },
                    "observability": { "weight": 0.15 }
                }
            },
            "TSS": {
                "weight": 0.25,
                "dimensions": {
                    "operational_resilience": { "weight": 0.3 },
                    "incentive_sustainability": { "weight": 0.25 },
                    "ethics_legitimacy": { "weight": 0.25 },
                    "ecosystem_dependence_risk": { "weight": 0.2 }
                }
            }
        },
        "penalties": {
            "missing_incident_response": { "points": 10 },
            "missing_upgrade_policy": { "points": 10 },
            "missing_dispute_process": { "points": 10 },
            "unclear_decision_rights": { "points": 5 }
        },
        "thresholds": { "green": 70, "yellow": 50 }
    }"#;

    #[test]
    fn parses_complete_rubric() {
        let rubric: Rubric = serde_json::from_str(FULL_RUBRIC).expect("full rubric parses");
        assert_eq!(rubric.scores.ars.weight, 0.4);
        assert_eq!(rubric.scores.gqs.dimensions.observability.weight, 0.15);
        assert_eq!(rubric.penalties.unclear_decision_rights.points, 5.0);
        assert_eq!(rubric.thresholds.green, 70.0);
    }

    fn without_key(pointer: &str, key: &str) -> serde_json::Value {
        let mut value: serde_json::Value =
            serde_json::from_str(FULL_RUBRIC).expect("full rubric is valid JSON");
        value
            .pointer_mut(pointer)
            .and_then(serde_json::Value::as_object_mut)
            .expect("pointer resolves to an object")
            .remove(key);
        value
    }

    #[test]
    fn rejects_rubric_missing_a_dimension() {
        let value = without_key("/scores/GQS/dimensions", "observability");
        assert!(serde_json::from_value::<Rubric>(value).is_err());
    }

    #[test]
    fn rejects_rubric_missing_a_threshold() {
        let value = without_key("/thresholds", "yellow");
        let err = serde_json::from_value::<Rubric>(value).expect_err("yellow is required");
        assert!(err.to_string().contains("yellow"));
    }

    #[test]
    fn load_reports_missing_file_with_path() {
        let err = Rubric::load("does/not/exist.json").expect_err("missing file errors");
        assert!(matches!(err, RubricError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}

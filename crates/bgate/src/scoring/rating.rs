use crate::rubric::Thresholds;
use serde::{Deserialize, Serialize};

/// Risk band for non-technical readers, derived from the composite index.
///
/// Serializes as its full descriptive label so score files and reports carry
/// the same text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "GREEN (Low governance/adoption risk)")]
    Green,
    #[serde(rename = "YELLOW (Moderate governance/adoption risk)")]
    Yellow,
    #[serde(rename = "RED (High governance/adoption risk)")]
    Red,
}

impl Rating {
    /// Band the index against the rubric cutoffs. Bands partition [0, 100]
    /// whenever `green > yellow`.
    pub fn from_index(index: f64, thresholds: &Thresholds) -> Self {
        if index >= thresholds.green {
            Rating::Green
        } else if index >= thresholds.yellow {
            Rating::Yellow
        } else {
            Rating::Red
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::Green => "GREEN (Low governance/adoption risk)",
            Rating::Yellow => "YELLOW (Moderate governance/adoption risk)",
            Rating::Red => "RED (High governance/adoption risk)",
        }
    }
}

//! Evaluation result - the four-check compatibility score

use serde::{Deserialize, Serialize};

/// Result of evaluating one dataset against user requirements
///
/// Derived on demand and owned solely by the caller that requested it;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// Evaluation identifier ("eval-<dataset id>")
    pub id: String,

    /// The evaluated dataset
    pub dataset_id: String,

    /// Authors present and non-empty, publication date non-empty
    pub metadata_complete: bool,

    /// License constraint satisfied (or not applicable)
    pub license_compatible: bool,

    /// Format constraint satisfied (or not applicable)
    pub format_compatible: bool,

    /// Publication date on/after the requested start date (or not applicable)
    pub timeliness: bool,

    /// count(true checks) / 4, one of {0, 0.25, 0.5, 0.75, 1.0}
    pub overall_score: f64,

    /// Human-readable summary banded by score
    pub notes: String,

    /// When the evaluation ran (RFC 3339)
    pub evaluated_at: String,
}

impl EvaluationResult {
    /// Number of checks that passed
    pub fn passed_checks(&self) -> usize {
        [
            self.metadata_complete,
            self.license_compatible,
            self.format_compatible,
            self.timeliness,
        ]
        .iter()
        .filter(|&&b| b)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(checks: [bool; 4]) -> EvaluationResult {
        EvaluationResult {
            id: "eval-ds-001".to_string(),
            dataset_id: "ds-001".to_string(),
            metadata_complete: checks[0],
            license_compatible: checks[1],
            format_compatible: checks[2],
            timeliness: checks[3],
            overall_score: checks.iter().filter(|&&b| b).count() as f64 / 4.0,
            notes: String::new(),
            evaluated_at: "2024-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_passed_checks_counts() {
        assert_eq!(sample([true, true, true, true]).passed_checks(), 4);
        assert_eq!(sample([true, false, true, false]).passed_checks(), 2);
        assert_eq!(sample([false, false, false, false]).passed_checks(), 0);
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(sample([true, true, false, true])).unwrap();
        assert_eq!(json["datasetId"], "ds-001");
        assert_eq!(json["metadataComplete"], true);
        assert_eq!(json["overallScore"], 0.75);
    }
}

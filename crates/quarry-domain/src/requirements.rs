//! Researcher requirements - the constraints datasets are scored against
//!
//! Requirements arrive from the orchestration layer as loosely-shaped
//! JSON. They deserialize into these tagged structures at the boundary,
//! so the evaluation engine only ever sees named optional fields with
//! explicit presence checks.

use serde::{Deserialize, Serialize};

/// An optionally-bounded publication date range
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// Earliest publication date to include (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// Latest publication date to include (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl DateRange {
    /// True when neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }
}

/// User-supplied constraints for dataset evaluation
///
/// Every field is optional; an absent constraint never fails a check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetRequirements {
    /// Required data formats, matched exactly against the dataset's
    /// format list (e.g. "CSV", "JSON", "Parquet")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format_constraints: Option<Vec<String>>,

    /// Acceptable licenses, matched as case-insensitive substrings of the
    /// dataset's license text (e.g. "CC-BY", "Public Domain")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_constraints: Option<Vec<String>>,

    /// Required publication date range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
}

impl DatasetRequirements {
    /// True when no constraint at all is set
    pub fn is_empty(&self) -> bool {
        self.format_constraints.is_none()
            && self.license_constraints.is_none()
            && self.date_range.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirements_deserialize_camel_case() {
        let json = r#"{
            "formatConstraints": ["CSV"],
            "licenseConstraints": ["CC-BY"],
            "dateRange": { "startDate": "2020-01-01" }
        }"#;
        let req: DatasetRequirements = serde_json::from_str(json).unwrap();
        assert_eq!(req.format_constraints, Some(vec!["CSV".to_string()]));
        assert_eq!(req.license_constraints, Some(vec!["CC-BY".to_string()]));
        let range = req.date_range.unwrap();
        assert_eq!(range.start_date.as_deref(), Some("2020-01-01"));
        assert_eq!(range.end_date, None);
    }

    #[test]
    fn test_empty_requirements() {
        let req: DatasetRequirements = serde_json::from_str("{}").unwrap();
        assert!(req.is_empty());
    }

    #[test]
    fn test_date_range_unbounded() {
        assert!(DateRange::default().is_unbounded());
        let bounded = DateRange {
            start_date: Some("2020-01-01".to_string()),
            end_date: None,
        };
        assert!(!bounded.is_unbounded());
    }
}

//! Dataset module - the canonical discoverable unit

use serde::{Deserialize, Serialize};

/// Maximum length of the `title` and `description` display strings,
/// including the ellipsis marker when truncation applies.
pub const MAX_DISPLAY_LEN: usize = 300;

/// Source repository a dataset record was discovered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Repository {
    /// DataCite DOI registry
    DataCite,
    /// re3data registry of research data repositories
    #[serde(rename = "re3data")]
    Re3data,
}

impl Repository {
    /// Get the repository name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Repository::DataCite => "DataCite",
            Repository::Re3data => "re3data",
        }
    }

    /// Parse a repository tag from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "DataCite" => Some(Repository::DataCite),
            "re3data" => Some(Repository::Re3data),
            _ => None,
        }
    }
}

impl std::str::FromStr for Repository {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid repository: {}", s))
    }
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Optional descriptive attributes of a dataset
///
/// Every field except `publication_date` may be absent. Absent is always
/// `None`, never an empty string or empty vector, so callers can tell
/// "not provided" apart from "provided but empty".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetMetadata {
    /// Ordered author display names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,

    /// ISO date string; never absent (the normalizer guarantees a value)
    pub publication_date: String,

    /// License or rights statement text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Distribution formats (e.g. "CSV", "NetCDF")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Vec<String>>,

    /// Human-readable size ("2.3 GB")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Raw DOI string ("10.1234/zenodo.12345")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    /// Subject keywords
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,

    /// Version tag ("v2.1")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl DatasetMetadata {
    /// The DOI-resolved URL for this metadata, when a DOI is present
    pub fn doi_url(&self) -> Option<String> {
        self.doi.as_ref().map(|doi| format!("https://doi.org/{}", doi))
    }
}

/// The canonical discoverable unit
///
/// `id` and `metadata.publication_date` are always populated even when the
/// source payload is impoverished; everything else may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Stable identifier, preferably the provider's DOI
    pub id: String,

    /// Display title, at most [`MAX_DISPLAY_LEN`] characters
    pub title: String,

    /// Display description, at most [`MAX_DISPLAY_LEN`] characters
    pub description: String,

    /// Resolvable location (constructed from the DOI when absent upstream)
    pub url: String,

    /// Provenance tag
    pub repository: Repository,

    /// Embedded descriptive metadata
    pub metadata: DatasetMetadata,
}

/// Truncate a display string to `max` characters, replacing the tail with
/// an ellipsis marker when it exceeds the bound.
///
/// Operates on `char` boundaries, so multi-byte text never splits mid
/// character. Strings at or under the bound pass through unchanged.
pub fn truncate_display(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    // No room for the marker below 3 chars; hard-cut instead
    if max < 3 {
        return s.chars().take(max).collect();
    }
    let kept: String = s.chars().take(max - 3).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_round_trip() {
        assert_eq!(Repository::parse("DataCite"), Some(Repository::DataCite));
        assert_eq!(Repository::parse("re3data"), Some(Repository::Re3data));
        assert_eq!(Repository::parse("zenodo"), None);
        assert_eq!(Repository::DataCite.as_str(), "DataCite");
        assert_eq!(Repository::Re3data.to_string(), "re3data");
    }

    #[test]
    fn test_repository_serde_tags() {
        let json = serde_json::to_string(&Repository::Re3data).unwrap();
        assert_eq!(json, "\"re3data\"");
        let json = serde_json::to_string(&Repository::DataCite).unwrap();
        assert_eq!(json, "\"DataCite\"");
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_display("hello", 300), "hello");
    }

    #[test]
    fn test_truncate_long_string_has_marker() {
        let long = "x".repeat(500);
        let out = truncate_display(&long, 300);
        assert_eq!(out.chars().count(), 300);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_truncate_exact_bound_unchanged() {
        let exact = "y".repeat(300);
        assert_eq!(truncate_display(&exact, 300), exact);
    }

    #[test]
    fn test_truncate_tiny_bound_hard_cuts() {
        assert_eq!(truncate_display("hello", 2), "he");
        assert_eq!(truncate_display("hello", 0), "");
        assert_eq!(truncate_display("hello", 3), "...");
    }

    #[test]
    fn test_truncate_multibyte_safe() {
        let long = "é".repeat(400);
        let out = truncate_display(&long, 300);
        assert_eq!(out.chars().count(), 300);
    }

    #[test]
    fn test_metadata_doi_url() {
        let meta = DatasetMetadata {
            authors: None,
            publication_date: "2024-01-01".to_string(),
            license: None,
            format: None,
            size: None,
            doi: Some("10.5194/essd-2023-climate".to_string()),
            keywords: None,
            version: None,
        };
        assert_eq!(
            meta.doi_url().unwrap(),
            "https://doi.org/10.5194/essd-2023-climate"
        );
    }

    #[test]
    fn test_metadata_absent_fields_omitted_from_json() {
        let meta = DatasetMetadata {
            authors: None,
            publication_date: "2024-01-01".to_string(),
            license: None,
            format: None,
            size: None,
            doi: None,
            keywords: None,
            version: None,
        };
        let json = serde_json::to_value(&meta).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["publicationDate"], "2024-01-01");
    }

    #[test]
    fn test_dataset_wire_field_names() {
        let ds = Dataset {
            id: "ds-001".to_string(),
            title: "T".to_string(),
            description: "D".to_string(),
            url: "https://example.org".to_string(),
            repository: Repository::DataCite,
            metadata: DatasetMetadata {
                authors: Some(vec!["A. Author".to_string()]),
                publication_date: "2024-03-15".to_string(),
                license: Some("CC-BY-4.0".to_string()),
                format: None,
                size: None,
                doi: None,
                keywords: None,
                version: None,
            },
        };
        let json = serde_json::to_value(&ds).unwrap();
        assert_eq!(json["repository"], "DataCite");
        assert_eq!(json["metadata"]["publicationDate"], "2024-03-15");
        assert_eq!(json["metadata"]["license"], "CC-BY-4.0");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: truncation never exceeds the bound
        #[test]
        fn test_truncate_respects_bound(s in ".*", max in 0usize..400) {
            let out = truncate_display(&s, max);
            prop_assert!(out.chars().count() <= max);
        }

        /// Property: strings within the bound pass through unchanged
        #[test]
        fn test_truncate_identity_within_bound(s in ".{0,100}") {
            prop_assert_eq!(truncate_display(&s, 300), s);
        }
    }
}

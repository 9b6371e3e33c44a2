//! Schema-typed DataCite DOI payloads
//!
//! The DataCite REST API wraps everything in `{ "data": ... }` with the
//! bibliographic fields nested in an `attributes` bag. Every sub-field is
//! optional here: a record with nothing but an id still deserializes, and
//! the normalizer turns whatever is missing into absent fields. Unknown
//! fields are ignored.

use serde::Deserialize;

/// Search response: `{ "data": [ ... ] }`
#[derive(Debug, Clone, Deserialize)]
pub struct DoiSearchResponse {
    /// Matching DOI records
    #[serde(default)]
    pub data: Vec<DoiRecord>,
}

/// Detail response: `{ "data": { ... } }`
#[derive(Debug, Clone, Deserialize)]
pub struct DoiDetailResponse {
    /// The requested DOI record, absent when the API returns no data
    #[serde(default)]
    pub data: Option<DoiRecord>,
}

/// One DOI record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoiRecord {
    /// Provider-assigned identifier (usually the DOI itself)
    #[serde(default)]
    pub id: Option<String>,

    /// Bibliographic attributes; tolerated when absent entirely
    #[serde(default)]
    pub attributes: Option<DoiAttributes>,
}

/// The nested attributes bag of a DOI record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoiAttributes {
    /// DOI string ("10.1234/zenodo.12345")
    #[serde(default)]
    pub doi: Option<String>,

    /// DOI prefix, used with `suffix` as the last-resort identifier
    #[serde(default)]
    pub prefix: Option<String>,

    /// DOI suffix
    #[serde(default)]
    pub suffix: Option<String>,

    /// Landing page URL
    #[serde(default)]
    pub url: Option<String>,

    /// Flat title, fallback when `titles` is empty
    #[serde(default)]
    pub title: Option<String>,

    /// Title entries, first one wins
    #[serde(default)]
    pub titles: Vec<TitleEntry>,

    /// Flat abstract, fallback when `descriptions` is empty
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,

    /// Description entries, first one wins
    #[serde(default)]
    pub descriptions: Vec<DescriptionEntry>,

    /// Creator entries, mapped to author display names
    #[serde(default)]
    pub creators: Vec<Creator>,

    /// Publication year, preferred source for the publication date
    #[serde(default)]
    pub publication_year: Option<i64>,

    /// Typed date entries ("Issued", "Created", ...)
    #[serde(default)]
    pub dates: Vec<DateEntry>,

    /// Rights statements, first one supplies the license
    #[serde(default)]
    pub rights_list: Vec<RightsEntry>,

    /// Distribution formats
    #[serde(default)]
    pub formats: Vec<String>,

    /// Size descriptions, joined into one display string
    #[serde(default)]
    pub sizes: Vec<String>,

    /// Subject entries, mapped to keywords
    #[serde(default)]
    pub subjects: Vec<SubjectEntry>,

    /// Version tag
    #[serde(default)]
    pub version: Option<String>,
}

/// One entry of the titles sequence
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TitleEntry {
    /// Title text
    #[serde(default)]
    pub title: Option<String>,
}

/// One entry of the descriptions sequence
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DescriptionEntry {
    /// Description text
    #[serde(default)]
    pub description: Option<String>,
}

/// One creator entry
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    /// Preformatted display name, preferred when present
    #[serde(default)]
    pub name: Option<String>,

    /// Given name
    #[serde(default)]
    pub given_name: Option<String>,

    /// Family name
    #[serde(default)]
    pub family_name: Option<String>,
}

/// One entry of the typed dates sequence
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateEntry {
    /// Date string
    #[serde(default)]
    pub date: Option<String>,

    /// Date type tag ("Issued", "Created", "Updated", ...)
    #[serde(default)]
    pub date_type: Option<String>,
}

/// One entry of the rights sequence
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RightsEntry {
    /// Rights statement text
    #[serde(default)]
    pub rights: Option<String>,
}

/// One entry of the subjects sequence
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubjectEntry {
    /// Subject text
    #[serde(default)]
    pub subject: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record_deserializes() {
        let record: DoiRecord = serde_json::from_str("{}").unwrap();
        assert!(record.id.is_none());
        assert!(record.attributes.is_none());
    }

    #[test]
    fn test_full_attributes_deserialize() {
        let json = r#"{
            "id": "10.1234/x",
            "attributes": {
                "doi": "10.1234/x",
                "titles": [{ "title": "A Dataset" }],
                "creators": [{ "givenName": "Ada", "familyName": "Lovelace" }],
                "publicationYear": 2024,
                "dates": [{ "date": "2024-03-15", "dateType": "Issued" }],
                "rightsList": [{ "rights": "CC-BY-4.0" }],
                "formats": ["CSV"],
                "sizes": ["2.3 GB"],
                "subjects": [{ "subject": "climate" }],
                "version": "v2.1"
            }
        }"#;
        let record: DoiRecord = serde_json::from_str(json).unwrap();
        let attrs = record.attributes.unwrap();
        assert_eq!(attrs.publication_year, Some(2024));
        assert_eq!(attrs.rights_list[0].rights.as_deref(), Some("CC-BY-4.0"));
        assert_eq!(attrs.creators[0].given_name.as_deref(), Some("Ada"));
        assert_eq!(attrs.dates[0].date_type.as_deref(), Some("Issued"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{
            "id": "10.1234/x",
            "type": "dois",
            "attributes": { "state": "findable", "doi": "10.1234/x" },
            "relationships": {}
        }"#;
        let record: DoiRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.attributes.unwrap().doi.as_deref(), Some("10.1234/x"));
    }

    #[test]
    fn test_search_response_missing_data_is_empty() {
        let response: DoiSearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.data.is_empty());
    }

    #[test]
    fn test_detail_response_null_data() {
        let response: DoiDetailResponse = serde_json::from_str(r#"{ "data": null }"#).unwrap();
        assert!(response.data.is_none());
    }
}

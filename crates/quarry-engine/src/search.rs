//! Search filtering over canonical dataset records
//!
//! A dataset matches when at least one keyword appears (case-insensitive)
//! in its title, description, or metadata keywords, AND the license
//! constraint matches (datasets without a license pass, to avoid
//! over-filtering on absence), AND the publication date falls inside the
//! requested range. An empty keyword list matches nothing; that is the
//! documented policy, not an accident.

use quarry_domain::{dates, DateRange, Dataset};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Filter criteria for a catalog search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilter {
    /// Keywords to match against title, description, and metadata keywords
    pub keywords: Vec<String>,

    /// License constraint, matched as a case-insensitive substring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Publication date range, both bounds enforced when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
}

/// Filter a dataset slice, returning fresh matching records
pub fn filter_datasets(datasets: &[Dataset], filter: &SearchFilter) -> Vec<Dataset> {
    let matches: Vec<Dataset> = datasets
        .iter()
        .filter(|ds| matches_keywords(ds, &filter.keywords))
        .filter(|ds| matches_license(ds, filter.license.as_deref()))
        .filter(|ds| matches_date_range(ds, filter.date_range.as_ref()))
        .cloned()
        .collect();
    debug!(
        candidates = datasets.len(),
        matched = matches.len(),
        "catalog filter"
    );
    matches
}

fn matches_keywords(dataset: &Dataset, keywords: &[String]) -> bool {
    keywords.iter().any(|keyword| {
        let needle = keyword.to_lowercase();
        dataset.title.to_lowercase().contains(&needle)
            || dataset.description.to_lowercase().contains(&needle)
            || dataset
                .metadata
                .keywords
                .as_deref()
                .unwrap_or_default()
                .iter()
                .any(|k| k.to_lowercase().contains(&needle))
    })
}

fn matches_license(dataset: &Dataset, license: Option<&str>) -> bool {
    match (license, dataset.metadata.license.as_deref()) {
        (None, _) => true,
        // No license attribute set: pass, to avoid over-filtering on absence
        (Some(_), None) => true,
        (Some(wanted), Some(actual)) => actual.to_lowercase().contains(&wanted.to_lowercase()),
    }
}

/// Publication date inside the range; both bounds enforced when present.
/// A dataset whose date cannot be parsed fails any bounded range.
pub fn matches_date_range(dataset: &Dataset, range: Option<&DateRange>) -> bool {
    let Some(range) = range else {
        return true;
    };
    if range.is_unbounded() {
        return true;
    }

    let Some(published) = dates::parse_iso_date(&dataset.metadata.publication_date) else {
        return false;
    };

    if let Some(start) = range.start_date.as_deref() {
        match dates::parse_iso_date(start) {
            Some(start) if published >= start => {}
            _ => return false,
        }
    }
    if let Some(end) = range.end_date.as_deref() {
        match dates::parse_iso_date(end) {
            Some(end) if published <= end => {}
            _ => return false,
        }
    }
    true
}

//! Search tool - find datasets by keywords, license, and date range
//!
//! Goes to the live provider when one is configured, applying the date
//! range as a post-filter (DataCite has no date-range query). Offline, it
//! filters the injected catalog instead. An upstream failure never
//! escapes this boundary: it degrades to an empty result set with a
//! warning, so the orchestration layer always gets a well-formed reply.

use quarry_datacite::SearchOptions;
use quarry_domain::{Dataset, DateRange};
use quarry_engine::search::{filter_datasets, matches_date_range, SearchFilter};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::context::ToolContext;
use crate::error::ToolError;

fn default_page() -> u32 {
    1
}

/// Parameters for dataset search
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Research keywords to match in titles, descriptions, and metadata
    pub keywords: Vec<String>,
    /// License constraint (e.g. "CC-BY", "Public Domain")
    #[serde(default)]
    pub license_filter: Option<String>,
    /// Publication date range filter
    #[serde(default)]
    pub date_range: Option<DateRange>,
    /// Result page, 1-based
    #[serde(default = "default_page")]
    pub page: u32,
    /// Page size; the provider default applies when omitted
    #[serde(default)]
    pub size: Option<u32>,
}

/// Result of a dataset search
#[derive(Debug, Serialize)]
pub struct SearchResult {
    /// Number of datasets returned
    pub count: usize,
    /// Matching canonical dataset records
    pub datasets: Vec<Dataset>,
}

/// Handle quarry_search_datasets tool invocation
///
/// An empty keyword list returns an empty result set; that is the
/// documented policy for an unconstrained search, not an error.
pub async fn handle_search(
    context: &ToolContext,
    params: SearchParams,
) -> Result<SearchResult, ToolError> {
    if params.keywords.is_empty() {
        return Ok(SearchResult {
            count: 0,
            datasets: Vec::new(),
        });
    }

    let datasets = match context.client() {
        Some(client) => {
            let query = params.keywords.join(" ");
            let options = SearchOptions {
                page: params.page,
                size: params.size,
                license: params.license_filter.clone(),
                resource_type: None,
            };
            match client.search(&query, &options).await {
                Ok(datasets) => apply_date_range(datasets, params.date_range.as_ref()),
                Err(e) => {
                    warn!(error = %e, "dataset search failed, returning empty result");
                    Vec::new()
                }
            }
        }
        None => {
            let filter = SearchFilter {
                keywords: params.keywords,
                license: params.license_filter,
                date_range: params.date_range,
            };
            filter_datasets(context.catalog().datasets(), &filter)
        }
    };

    Ok(SearchResult {
        count: datasets.len(),
        datasets,
    })
}

fn apply_date_range(datasets: Vec<Dataset>, range: Option<&DateRange>) -> Vec<Dataset> {
    match range {
        Some(range) if !range.is_unbounded() => datasets
            .into_iter()
            .filter(|ds| matches_date_range(ds, Some(range)))
            .collect(),
        _ => datasets,
    }
}

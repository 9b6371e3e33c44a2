//! Fetch tool - resolve one DOI to a canonical dataset record

use quarry_domain::Dataset;
use quarry_engine::EngineError;
use serde::{Deserialize, Serialize};

use crate::context::ToolContext;
use crate::error::ToolError;

/// Parameters for DOI fetch
#[derive(Debug, Deserialize)]
pub struct FetchParams {
    /// DOI string or dataset id to fetch (e.g. "10.1234/zenodo.12345")
    pub doi: String,
}

/// Outcome of a DOI fetch: the normalized dataset, or an error payload
///
/// Serialized untagged, so the orchestration layer sees either a plain
/// dataset object or `{ "error": "..." }`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum FetchOutcome {
    /// The resolved dataset
    Found(Dataset),
    /// Structured failure payload
    Error {
        /// Human-readable failure description
        error: String,
    },
}

/// Handle quarry_fetch_doi tool invocation
///
/// Resolution order is catalog first, then the live provider. Failures
/// (unknown id, upstream error) come back as `{error}` payloads rather
/// than raised errors; this is a tool-style entry point.
pub async fn handle_fetch(
    context: &ToolContext,
    params: FetchParams,
) -> Result<FetchOutcome, ToolError> {
    let outcome = match context.resolve_dataset(&params.doi).await {
        Ok(Some(dataset)) => FetchOutcome::Found(dataset),
        Ok(None) => FetchOutcome::Error {
            error: EngineError::DatasetNotFound(params.doi).to_string(),
        },
        Err(e) => FetchOutcome::Error {
            error: e.to_string(),
        },
    };
    Ok(outcome)
}

//! Metadata tool - detailed metadata for one dataset id

use quarry_domain::DatasetMetadata;
use quarry_engine::EngineError;
use serde::{Deserialize, Serialize};

use crate::context::ToolContext;
use crate::error::ToolError;

/// Parameters for metadata fetch
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataParams {
    /// Dataset id (DOI or catalog id) to fetch metadata for
    pub dataset_id: String,
}

/// Outcome of a metadata fetch
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MetadataOutcome {
    /// The dataset's descriptive metadata
    Found(DatasetMetadata),
    /// Structured failure payload
    Error {
        /// Human-readable failure description
        error: String,
    },
}

/// Handle quarry_fetch_metadata tool invocation
///
/// Shares the fetch tool's resolution path but returns only the embedded
/// metadata record.
pub async fn handle_metadata(
    context: &ToolContext,
    params: MetadataParams,
) -> Result<MetadataOutcome, ToolError> {
    let outcome = match context.resolve_dataset(&params.dataset_id).await {
        Ok(Some(dataset)) => MetadataOutcome::Found(dataset.metadata),
        Ok(None) => MetadataOutcome::Error {
            error: EngineError::DatasetNotFound(params.dataset_id).to_string(),
        },
        Err(e) => MetadataOutcome::Error {
            error: e.to_string(),
        },
    };
    Ok(outcome)
}

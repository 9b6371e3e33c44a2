//! Decision tool - log an accept/reject choice for the audit trail

use quarry_domain::{DecisionAction, DecisionLog};
use quarry_engine::log_decision;
use serde::Deserialize;

use crate::context::ToolContext;
use crate::error::ToolError;

/// Parameters for decision logging
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionParams {
    /// Dataset id being decided on
    pub dataset_id: String,
    /// "accepted" or "rejected"
    pub action: DecisionAction,
    /// Reasoning for the decision
    pub reason: String,
}

/// Handle quarry_log_decision tool invocation
///
/// Pure construction; the record goes back to the caller, nothing is
/// persisted here. The action tag is already validated by
/// deserialization, so this handler cannot fail.
pub async fn handle_decision(
    _context: &ToolContext,
    params: DecisionParams,
) -> Result<DecisionLog, ToolError> {
    Ok(log_decision(&params.dataset_id, params.action, &params.reason))
}

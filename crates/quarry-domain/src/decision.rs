//! Decision log - the accept/reject audit record

use serde::{Deserialize, Serialize};

/// A user's decision on a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionAction {
    /// Dataset accepted for use
    Accepted,
    /// Dataset rejected
    Rejected,
}

impl DecisionAction {
    /// Get the action tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionAction::Accepted => "accepted",
            DecisionAction::Rejected => "rejected",
        }
    }

    /// Parse an action tag from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "accepted" => Some(DecisionAction::Accepted),
            "rejected" => Some(DecisionAction::Rejected),
            _ => None,
        }
    }
}

impl std::str::FromStr for DecisionAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid decision action: {}", s))
    }
}

/// Append-only audit record of a dataset decision
///
/// Pure data; persistence is an external collaborator's responsibility.
/// Construction with generated id/timestamp lives in the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionLog {
    /// Log identifier ("log-<dataset id>-<epoch millis>")
    pub id: String,

    /// The decided dataset
    pub dataset_id: String,

    /// Accept or reject
    pub action: DecisionAction,

    /// Free-text rationale
    pub reason: String,

    /// When the decision was logged (RFC 3339)
    pub timestamp: String,
}

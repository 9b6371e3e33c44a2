//! Decision logging - audit record construction
//!
//! Pure construction: the record is returned to the caller, never stored.
//! Persistence belongs to an external collaborator.

use quarry_domain::{dates, DecisionAction, DecisionLog};

/// Construct an audit record for an accept/reject decision
///
/// The generated id combines the dataset id with the current epoch
/// milliseconds, so repeated decisions on the same dataset stay distinct.
pub fn log_decision(dataset_id: &str, action: DecisionAction, reason: &str) -> DecisionLog {
    DecisionLog {
        id: format!("log-{}-{}", dataset_id, dates::now_millis()),
        dataset_id: dataset_id.to_string(),
        action,
        reason: reason.to_string(),
        timestamp: dates::now_iso(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_construction() {
        let log = log_decision("ds-001", DecisionAction::Accepted, "fits the study");
        assert!(log.id.starts_with("log-ds-001-"));
        assert_eq!(log.dataset_id, "ds-001");
        assert_eq!(log.action, DecisionAction::Accepted);
        assert_eq!(log.reason, "fits the study");
        assert!(!log.timestamp.is_empty());
    }

    #[test]
    fn test_rejection_logged_verbatim() {
        let log = log_decision("ds-002", DecisionAction::Rejected, "license too restrictive");
        assert_eq!(log.action, DecisionAction::Rejected);
        assert_eq!(log.reason, "license too restrictive");
    }
}

//! Evaluate tool - four-check compatibility scoring

use quarry_domain::{DatasetRequirements, EvaluationResult};
use quarry_engine::{evaluate, EngineError};
use serde::{Deserialize, Serialize};

use crate::context::ToolContext;
use crate::error::ToolError;

/// Parameters for dataset evaluation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateParams {
    /// Dataset id to evaluate
    pub dataset_id: String,
    /// Constraints the dataset is scored against
    #[serde(default)]
    pub user_requirements: DatasetRequirements,
}

/// Outcome of an evaluation
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum EvaluateOutcome {
    /// The computed evaluation
    Scored(EvaluationResult),
    /// Structured failure payload; never a partial or zeroed evaluation
    Error {
        /// Human-readable failure description
        error: String,
    },
}

/// Handle quarry_evaluate_dataset tool invocation
pub async fn handle_evaluate(
    context: &ToolContext,
    params: EvaluateParams,
) -> Result<EvaluateOutcome, ToolError> {
    let outcome = match context.resolve_dataset(&params.dataset_id).await {
        Ok(Some(dataset)) => EvaluateOutcome::Scored(evaluate(&dataset, &params.user_requirements)),
        Ok(None) => EvaluateOutcome::Error {
            error: EngineError::DatasetNotFound(params.dataset_id).to_string(),
        },
        Err(e) => EvaluateOutcome::Error {
            error: e.to_string(),
        },
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_engine::Catalog;

    fn offline() -> ToolContext {
        ToolContext::offline(Catalog::reference())
    }

    #[test]
    fn test_evaluate_params_deserialize() {
        let json = r#"{
            "datasetId": "ds-001",
            "userRequirements": {
                "formatConstraints": ["CSV"],
                "licenseConstraints": ["CC-BY"],
                "dateRange": { "startDate": "2020-01-01" }
            }
        }"#;
        let params: EvaluateParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.dataset_id, "ds-001");
        assert_eq!(
            params.user_requirements.format_constraints,
            Some(vec!["CSV".to_string()])
        );
    }

    #[test]
    fn test_requirements_default_when_omitted() {
        let params: EvaluateParams =
            serde_json::from_str(r#"{ "datasetId": "ds-001" }"#).unwrap();
        assert!(params.user_requirements.is_empty());
    }

    #[tokio::test]
    async fn test_evaluate_compatible_dataset() {
        let json = r#"{
            "datasetId": "ds-001",
            "userRequirements": {
                "formatConstraints": ["CSV"],
                "licenseConstraints": ["CC-BY"],
                "dateRange": { "startDate": "2020-01-01" }
            }
        }"#;
        let params: EvaluateParams = serde_json::from_str(json).unwrap();
        match handle_evaluate(&offline(), params).await.unwrap() {
            EvaluateOutcome::Scored(result) => {
                assert_eq!(result.overall_score, 1.0);
                assert!(result.timeliness);
            }
            EvaluateOutcome::Error { error } => panic!("unexpected error: {}", error),
        }
    }

    #[tokio::test]
    async fn test_evaluate_unknown_id_is_error_payload() {
        let params = EvaluateParams {
            dataset_id: "ds-404".to_string(),
            user_requirements: DatasetRequirements::default(),
        };
        match handle_evaluate(&offline(), params).await.unwrap() {
            EvaluateOutcome::Error { error } => {
                assert_eq!(error, "Dataset ds-404 not found");
            }
            EvaluateOutcome::Scored(_) => panic!("expected error payload"),
        }
    }
}

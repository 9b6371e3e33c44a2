//! Citation tool - render an academic citation for a dataset

use quarry_domain::{Citation, CitationFormat};
use quarry_engine::{render_citation, EngineError};
use serde::{Deserialize, Serialize};

use crate::context::ToolContext;
use crate::error::ToolError;

/// Parameters for citation generation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CiteParams {
    /// Dataset id to cite
    pub dataset_id: String,
    /// Citation format, defaults to APA
    #[serde(default)]
    pub format: CitationFormat,
}

/// Outcome of citation generation
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CiteOutcome {
    /// The rendered citation
    Rendered(Citation),
    /// Structured failure payload
    Error {
        /// Human-readable failure description
        error: String,
    },
}

/// Handle quarry_generate_citation tool invocation
pub async fn handle_cite(
    context: &ToolContext,
    params: CiteParams,
) -> Result<CiteOutcome, ToolError> {
    let outcome = match context.resolve_dataset(&params.dataset_id).await {
        Ok(Some(dataset)) => CiteOutcome::Rendered(render_citation(&dataset, params.format)),
        Ok(None) => CiteOutcome::Error {
            error: EngineError::DatasetNotFound(params.dataset_id).to_string(),
        },
        Err(e) => CiteOutcome::Error {
            error: e.to_string(),
        },
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_engine::Catalog;

    #[test]
    fn test_cite_params_default_format_is_apa() {
        let params: CiteParams = serde_json::from_str(r#"{ "datasetId": "ds-001" }"#).unwrap();
        assert_eq!(params.format, CitationFormat::Apa);

        let params: CiteParams =
            serde_json::from_str(r#"{ "datasetId": "ds-001", "format": "CSL" }"#).unwrap();
        assert_eq!(params.format, CitationFormat::Csl);
    }

    #[tokio::test]
    async fn test_cite_catalog_dataset() {
        let context = ToolContext::offline(Catalog::reference());
        let params = CiteParams {
            dataset_id: "ds-001".to_string(),
            format: CitationFormat::Apa,
        };
        match handle_cite(&context, params).await.unwrap() {
            CiteOutcome::Rendered(citation) => {
                assert!(citation.text.contains("(2024)."));
                assert_eq!(citation.format, CitationFormat::Apa);
            }
            CiteOutcome::Error { error } => panic!("unexpected error: {}", error),
        }
    }

    #[tokio::test]
    async fn test_cite_unknown_id_is_error_payload() {
        let context = ToolContext::offline(Catalog::reference());
        let params = CiteParams {
            dataset_id: "ds-404".to_string(),
            format: CitationFormat::Apa,
        };
        assert!(matches!(
            handle_cite(&context, params).await.unwrap(),
            CiteOutcome::Error { .. }
        ));
    }
}

//! Cite command implementation.

use crate::cli::CiteArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use quarry_mcp::tools::{handle_cite, CiteOutcome, CiteParams};
use quarry_mcp::ToolContext;

/// Execute the cite command.
pub async fn execute_cite(
    args: CiteArgs,
    context: &ToolContext,
    formatter: &Formatter,
) -> Result<()> {
    let params = CiteParams {
        dataset_id: args.dataset_id,
        format: args.format.into(),
    };

    match handle_cite(context, params).await? {
        CiteOutcome::Rendered(citation) => {
            println!("{}", formatter.format_citation(&citation)?);
            Ok(())
        }
        CiteOutcome::Error { error } => Err(CliError::Resolution(error)),
    }
}

//! Fetch command implementation.

use crate::cli::FetchArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use quarry_mcp::tools::{handle_fetch, FetchOutcome, FetchParams};
use quarry_mcp::ToolContext;

/// Execute the fetch command.
pub async fn execute_fetch(
    args: FetchArgs,
    context: &ToolContext,
    formatter: &Formatter,
) -> Result<()> {
    let params = FetchParams { doi: args.doi };

    match handle_fetch(context, params).await? {
        FetchOutcome::Found(dataset) => {
            println!("{}", formatter.format_dataset(&dataset)?);
            Ok(())
        }
        FetchOutcome::Error { error } => Err(CliError::Resolution(error)),
    }
}

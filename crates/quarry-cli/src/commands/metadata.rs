//! Metadata command implementation.

use crate::cli::MetadataArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use quarry_mcp::tools::{handle_metadata, MetadataOutcome, MetadataParams};
use quarry_mcp::ToolContext;

/// Execute the metadata command.
pub async fn execute_metadata(
    args: MetadataArgs,
    context: &ToolContext,
    formatter: &Formatter,
) -> Result<()> {
    let params = MetadataParams {
        dataset_id: args.dataset_id,
    };

    match handle_metadata(context, params).await? {
        MetadataOutcome::Found(metadata) => {
            println!("{}", formatter.format_metadata(&metadata)?);
            Ok(())
        }
        MetadataOutcome::Error { error } => Err(CliError::Resolution(error)),
    }
}

//! Log command implementation.

use crate::cli::LogArgs;
use crate::error::Result;
use crate::output::Formatter;
use quarry_mcp::tools::{handle_decision, DecisionParams};
use quarry_mcp::ToolContext;

/// Execute the log command.
pub async fn execute_log(
    args: LogArgs,
    context: &ToolContext,
    formatter: &Formatter,
) -> Result<()> {
    let params = DecisionParams {
        dataset_id: args.dataset_id,
        action: args.action.into(),
        reason: args.reason,
    };

    let decision = handle_decision(context, params).await?;
    println!("{}", formatter.format_decision(&decision)?);

    Ok(())
}

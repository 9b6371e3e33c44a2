//! Evaluate command implementation.

use crate::cli::EvaluateArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use quarry_mcp::tools::{handle_evaluate, EvaluateOutcome, EvaluateParams};
use quarry_mcp::ToolContext;

/// Execute the evaluate command.
pub async fn execute_evaluate(
    args: EvaluateArgs,
    context: &ToolContext,
    formatter: &Formatter,
) -> Result<()> {
    super::validate_date_flag("--from", args.from.as_deref())?;
    super::validate_date_flag("--to", args.to.as_deref())?;

    let params = EvaluateParams {
        user_requirements: args.requirements(),
        dataset_id: args.dataset_id,
    };

    match handle_evaluate(context, params).await? {
        EvaluateOutcome::Scored(evaluation) => {
            println!("{}", formatter.format_evaluation(&evaluation)?);
            Ok(())
        }
        EvaluateOutcome::Error { error } => Err(CliError::Resolution(error)),
    }
}

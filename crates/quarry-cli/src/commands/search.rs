//! Search command implementation.

use crate::cli::SearchArgs;
use crate::error::Result;
use crate::output::Formatter;
use quarry_mcp::tools::{handle_search, SearchParams};
use quarry_mcp::ToolContext;

/// Execute the search command.
pub async fn execute_search(
    args: SearchArgs,
    context: &ToolContext,
    formatter: &Formatter,
) -> Result<()> {
    super::validate_date_flag("--from", args.from.as_deref())?;
    super::validate_date_flag("--to", args.to.as_deref())?;

    let date_range = args.date_range();
    let params = SearchParams {
        keywords: args.keywords,
        license_filter: args.license,
        date_range,
        page: args.page,
        size: args.size,
    };

    let result = handle_search(context, params).await?;
    println!("{}", formatter.format_datasets(&result.datasets)?);
    if formatter.is_table() && result.count > 0 {
        println!("{}", formatter.info(&format!("{} dataset(s)", result.count)));
    }

    Ok(())
}

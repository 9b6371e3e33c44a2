//! Command implementations.
//!
//! Each command is a thin wrapper around the corresponding tool handler,
//! so CLI runs and MCP tool calls share one code path.

pub mod cite;
pub mod evaluate;
pub mod fetch;
pub mod log;
pub mod metadata;
pub mod search;

pub use self::cite::execute_cite;
pub use self::evaluate::execute_evaluate;
pub use self::fetch::execute_fetch;
pub use self::log::execute_log;
pub use self::metadata::execute_metadata;
pub use self::search::execute_search;

use crate::error::{CliError, Result};
use quarry_domain::dates;

/// Reject a date flag value that is not a parseable YYYY-MM-DD date.
fn validate_date_flag(flag: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(s) if dates::parse_iso_date(s).is_none() => Err(CliError::InvalidInput(format!(
            "{} must be a YYYY-MM-DD date, got '{}'",
            flag, s
        ))),
        _ => Ok(()),
    }
}

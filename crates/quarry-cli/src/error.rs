//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Tool layer error
    #[error("Tool error: {0}")]
    Tool(#[from] quarry_mcp::ToolError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A tool reported a resolution failure (unknown dataset, upstream error)
    #[error("{0}")]
    Resolution(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

//! Error types for MCP server operations.

use thiserror::Error;

/// MCP server error types
#[derive(Error, Debug)]
pub enum ToolError {
    /// Invalid request format or parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Tool not found
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ToolError {
    /// Convert to JSON-RPC error code
    pub fn error_code(&self) -> i32 {
        match self {
            ToolError::InvalidRequest(_) => -32600,
            ToolError::ToolNotFound(_) => -32601,
            ToolError::Json(_) => -32700,
            ToolError::Io(_) => -32000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ToolError::InvalidRequest("x".to_string()).error_code(), -32600);
        assert_eq!(ToolError::ToolNotFound("x".to_string()).error_code(), -32601);
    }
}

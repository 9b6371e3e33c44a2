//! Quarry MCP Server
//!
//! Model Context Protocol server exposing Quarry's dataset tools to an
//! LLM orchestration layer (Claude Desktop, Cline, etc.).
//!
//! Provides 6 MCP tools:
//! - `quarry_search_datasets` - Keyword/license/date search
//! - `quarry_fetch_doi` - Fetch one DOI from DataCite and normalize it
//! - `quarry_fetch_metadata` - Detailed metadata for a dataset id
//! - `quarry_evaluate_dataset` - Four-check compatibility evaluation
//! - `quarry_generate_citation` - Citation rendering (APA/CSL)
//! - `quarry_log_decision` - Accept/reject audit record
//!
//! This crate is the error-conversion boundary: tool handlers never let a
//! raw provider or engine failure escape. An upstream search failure
//! becomes an empty result set; an unknown dataset id becomes an
//! `{error}` payload.
//!
//! # Example
//!
//! ```no_run
//! use quarry_mcp::{McpServer, ToolContext};
//!
//! let context = ToolContext::from_env();
//! let mut server = McpServer::new(context).unwrap();
//! server.run().unwrap();
//! ```

#![warn(missing_docs)]

mod context;
mod error;
mod protocol;
mod server;
pub mod tools;

pub use context::ToolContext;
pub use error::ToolError;
pub use server::McpServer;

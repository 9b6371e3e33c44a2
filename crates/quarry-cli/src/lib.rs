//! Quarry CLI library.
//!
//! This library provides the core functionality for the Quarry command-line
//! interface, including argument parsing, command execution, and output
//! formatting. Commands run against the same tool handlers the MCP server
//! exposes, so the CLI and the server always agree on behavior.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
pub use output::{Formatter, OutputFormat};

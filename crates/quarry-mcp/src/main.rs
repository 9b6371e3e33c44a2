//! Quarry MCP Server - Main entry point

use quarry_mcp::{McpServer, ToolContext};
use tracing::Level;

fn main() {
    // Initialize tracing (log to stderr; stdout carries the protocol)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .init();

    // Catalog plus live DataCite client, unless QUARRY_OFFLINE=1
    let context = ToolContext::from_env();

    let mut server = match McpServer::new(context) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Failed to create MCP server: {}", e);
            std::process::exit(1);
        }
    };

    // Run server (blocks until stdin closes)
    if let Err(e) = server.run() {
        eprintln!("MCP server error: {}", e);
        std::process::exit(1);
    }
}

//! Quarry CLI - Command-line interface for dataset discovery and evaluation.

use clap::Parser;
use quarry_cli::commands;
use quarry_cli::{Cli, Command, Formatter, OutputFormat};
use quarry_engine::Catalog;
use quarry_mcp::ToolContext;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> quarry_cli::Result<()> {
    let cli = Cli::parse();

    // Surface tool-layer warnings (swallowed upstream failures) on stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing_subscriber::filter::LevelFilter::WARN)
        .init();

    let format = cli.output.map(Into::into).unwrap_or(OutputFormat::Table);
    let formatter = Formatter::new(format, !cli.no_color);

    let context = if cli.offline {
        ToolContext::offline(Catalog::reference())
    } else {
        ToolContext::from_env()
    };

    match cli.command {
        Command::Search(args) => commands::execute_search(args, &context, &formatter).await,
        Command::Fetch(args) => commands::execute_fetch(args, &context, &formatter).await,
        Command::Metadata(args) => commands::execute_metadata(args, &context, &formatter).await,
        Command::Evaluate(args) => commands::execute_evaluate(args, &context, &formatter).await,
        Command::Cite(args) => commands::execute_cite(args, &context, &formatter).await,
        Command::Log(args) => commands::execute_log(args, &context, &formatter).await,
    }
}

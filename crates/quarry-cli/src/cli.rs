//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use quarry_domain::{CitationFormat, DateRange, DatasetRequirements, DecisionAction};

/// Quarry CLI - Search, evaluate, and cite research datasets.
#[derive(Debug, Parser)]
#[command(name = "quarry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use only the bundled reference catalog, no network access
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search for datasets by keyword
    Search(SearchArgs),

    /// Fetch a dataset by DOI or catalog id
    Fetch(FetchArgs),

    /// Show the metadata record for a dataset
    Metadata(MetadataArgs),

    /// Evaluate a dataset against research requirements
    Evaluate(EvaluateArgs),

    /// Generate a citation for a dataset
    Cite(CiteArgs),

    /// Record an accept/reject decision for a dataset
    Log(LogArgs),
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Search keywords (no keywords means no results)
    pub keywords: Vec<String>,

    /// Restrict results to licenses containing this text
    #[arg(short, long)]
    pub license: Option<String>,

    /// Earliest acceptable publication date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Latest acceptable publication date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Result page to request from the upstream registry
    #[arg(short, long, default_value = "1")]
    pub page: u32,

    /// Page size to request from the upstream registry
    #[arg(short, long)]
    pub size: Option<u32>,
}

impl SearchArgs {
    /// Build the date range filter, if either bound was given.
    pub fn date_range(&self) -> Option<DateRange> {
        if self.from.is_none() && self.to.is_none() {
            return None;
        }
        Some(DateRange {
            start_date: self.from.clone(),
            end_date: self.to.clone(),
        })
    }
}

/// Arguments for the fetch command.
#[derive(Debug, Parser)]
pub struct FetchArgs {
    /// DOI (e.g. 10.5281/zenodo.12345) or catalog id (e.g. ds-001)
    pub doi: String,
}

/// Arguments for the metadata command.
#[derive(Debug, Parser)]
pub struct MetadataArgs {
    /// Dataset id or DOI
    pub dataset_id: String,
}

/// Arguments for the evaluate command.
#[derive(Debug, Parser)]
pub struct EvaluateArgs {
    /// Dataset id or DOI
    pub dataset_id: String,

    /// Required data format (repeatable)
    #[arg(short = 'F', long = "format")]
    pub formats: Vec<String>,

    /// Acceptable license (repeatable)
    #[arg(short = 'L', long = "license")]
    pub licenses: Vec<String>,

    /// Earliest acceptable publication date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Latest acceptable publication date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

impl EvaluateArgs {
    /// Build the requirements object. Flags that were not given become
    /// absent constraints, which every dataset passes.
    pub fn requirements(&self) -> DatasetRequirements {
        let date_range = if self.from.is_none() && self.to.is_none() {
            None
        } else {
            Some(DateRange {
                start_date: self.from.clone(),
                end_date: self.to.clone(),
            })
        };
        DatasetRequirements {
            format_constraints: if self.formats.is_empty() {
                None
            } else {
                Some(self.formats.clone())
            },
            license_constraints: if self.licenses.is_empty() {
                None
            } else {
                Some(self.licenses.clone())
            },
            date_range,
        }
    }
}

/// Arguments for the cite command.
#[derive(Debug, Parser)]
pub struct CiteArgs {
    /// Dataset id or DOI
    pub dataset_id: String,

    /// Citation style
    #[arg(short, long, value_enum, default_value = "apa")]
    pub format: CitationStyle,
}

/// Citation style argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CitationStyle {
    /// APA style
    Apa,
    /// CSL style
    Csl,
}

/// Arguments for the log command.
#[derive(Debug, Parser)]
pub struct LogArgs {
    /// Dataset id or DOI
    pub dataset_id: String,

    /// Decision taken
    #[arg(value_enum)]
    pub action: ActionArg,

    /// Reason for the decision
    pub reason: String,
}

/// Decision action argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ActionArg {
    /// The dataset was accepted for use
    Accepted,
    /// The dataset was rejected
    Rejected,
}

impl From<CliFormat> for crate::output::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::output::OutputFormat::Table,
            CliFormat::Json => crate::output::OutputFormat::Json,
            CliFormat::Quiet => crate::output::OutputFormat::Quiet,
        }
    }
}

impl From<CitationStyle> for CitationFormat {
    fn from(style: CitationStyle) -> Self {
        match style {
            CitationStyle::Apa => CitationFormat::Apa,
            CitationStyle::Csl => CitationFormat::Csl,
        }
    }
}

impl From<ActionArg> for DecisionAction {
    fn from(action: ActionArg) -> Self {
        match action {
            ActionArg::Accepted => DecisionAction::Accepted,
            ActionArg::Rejected => DecisionAction::Rejected,
        }
    }
}

//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use quarry_domain::{
    truncate_display, Citation, Dataset, DatasetMetadata, DecisionLog, EvaluationResult,
};
use serde_json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Width titles are clipped to in list tables.
const TITLE_COL_WIDTH: usize = 48;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tables
    Table,
    /// Pretty-printed JSON
    Json,
    /// IDs only
    Quiet,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a list of datasets.
    pub fn format_datasets(&self, datasets: &[Dataset]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(datasets)?),
            OutputFormat::Table => self.format_datasets_table(datasets),
            OutputFormat::Quiet => Ok(datasets
                .iter()
                .map(|d| d.id.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_datasets_table(&self, datasets: &[Dataset]) -> Result<String> {
        if datasets.is_empty() {
            return Ok(self.colorize("No datasets found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Title", "Repository", "License", "Published"]);

        for dataset in datasets {
            builder.push_record([
                dataset.id.as_str(),
                &truncate_display(&dataset.title, TITLE_COL_WIDTH),
                dataset.repository.as_str(),
                dataset.metadata.license.as_deref().unwrap_or("-"),
                &dataset.metadata.publication_date,
            ]);
        }

        Ok(finish_table(builder))
    }

    /// Format a single dataset in detail.
    pub fn format_dataset(&self, dataset: &Dataset) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(dataset)?),
            OutputFormat::Quiet => Ok(dataset.id.clone()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["ID", &dataset.id]);
                builder.push_record(["Title", &dataset.title]);
                builder.push_record(["Description", &dataset.description]);
                builder.push_record(["URL", &dataset.url]);
                builder.push_record(["Repository", dataset.repository.as_str()]);
                push_metadata_rows(&mut builder, &dataset.metadata);
                Ok(finish_table(builder))
            }
        }
    }

    /// Format a stand-alone metadata record.
    pub fn format_metadata(&self, metadata: &DatasetMetadata) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(metadata)?),
            OutputFormat::Quiet => Ok(metadata.doi.clone().unwrap_or_default()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                push_metadata_rows(&mut builder, metadata);
                Ok(finish_table(builder))
            }
        }
    }

    /// Format an evaluation result.
    pub fn format_evaluation(&self, evaluation: &EvaluationResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(evaluation)?),
            OutputFormat::Quiet => Ok(evaluation.id.clone()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Check", "Result"]);
                builder.push_record(["Metadata complete", check(evaluation.metadata_complete)]);
                builder.push_record(["License compatible", check(evaluation.license_compatible)]);
                builder.push_record(["Format compatible", check(evaluation.format_compatible)]);
                builder.push_record(["Timeliness", check(evaluation.timeliness)]);
                builder.push_record([
                    "Overall score",
                    &format!("{}%", (evaluation.overall_score * 100.0).round()),
                ]);
                let table = finish_table(builder);
                Ok(format!("{}\n{}", table, evaluation.notes))
            }
        }
    }

    /// Format a citation.
    pub fn format_citation(&self, citation: &Citation) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(citation)?),
            OutputFormat::Quiet => Ok(citation.id.clone()),
            OutputFormat::Table => Ok(format!(
                "{}\n{}",
                citation.text,
                self.colorize(
                    &format!("({} citation for {})", citation.format.as_str(), citation.dataset_id),
                    "cyan"
                )
            )),
        }
    }

    /// Format a decision log entry.
    pub fn format_decision(&self, decision: &DecisionLog) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(decision)?),
            OutputFormat::Quiet => Ok(decision.id.clone()),
            OutputFormat::Table => Ok(self.success(&format!(
                "Logged {} for {} ({}): {}",
                decision.action.as_str(),
                decision.dataset_id,
                decision.id,
                decision.reason
            ))),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Whether this formatter prints human-readable tables.
    pub fn is_table(&self) -> bool {
        self.format == OutputFormat::Table
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn check(passed: bool) -> &'static str {
    if passed {
        "pass"
    } else {
        "fail"
    }
}

fn push_metadata_rows(builder: &mut Builder, metadata: &DatasetMetadata) {
    if let Some(authors) = &metadata.authors {
        builder.push_record(["Authors", &authors.join(", ")]);
    }
    builder.push_record(["Published", &metadata.publication_date]);
    if let Some(license) = &metadata.license {
        builder.push_record(["License", license]);
    }
    if let Some(format) = &metadata.format {
        builder.push_record(["Formats", &format.join(", ")]);
    }
    if let Some(size) = &metadata.size {
        builder.push_record(["Size", size]);
    }
    if let Some(doi) = &metadata.doi {
        builder.push_record(["DOI", doi]);
    }
    if let Some(keywords) = &metadata.keywords {
        builder.push_record(["Keywords", &keywords.join(", ")]);
    }
    if let Some(version) = &metadata.version {
        builder.push_record(["Version", version]);
    }
}

fn finish_table(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_domain::{DatasetMetadata, Repository};

    fn create_test_dataset() -> Dataset {
        Dataset {
            id: "ds-001".to_string(),
            title: "Global Climate Observations".to_string(),
            description: "Daily temperature readings.".to_string(),
            url: "https://doi.org/10.5281/zenodo.12345".to_string(),
            repository: Repository::DataCite,
            metadata: DatasetMetadata {
                authors: Some(vec!["Chen, Wei".to_string()]),
                publication_date: "2024-03-15".to_string(),
                license: Some("CC-BY-4.0".to_string()),
                format: Some(vec!["CSV".to_string()]),
                size: None,
                doi: Some("10.5281/zenodo.12345".to_string()),
                keywords: Some(vec!["climate".to_string()]),
                version: None,
            },
        }
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_datasets(&[create_test_dataset()]).unwrap();
        assert!(output.contains("\"id\": \"ds-001\""));
        assert!(output.contains("publicationDate"));
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_datasets(&[create_test_dataset()]).unwrap();
        assert!(output.contains("Global Climate Observations"));
        assert!(output.contains("CC-BY-4.0"));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_datasets(&[create_test_dataset()]).unwrap();
        assert_eq!(output, "ds-001");
    }

    #[test]
    fn test_empty_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_datasets(&[]).unwrap();
        assert_eq!(output, "No datasets found.");
    }

    #[test]
    fn test_detail_includes_metadata() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_dataset(&create_test_dataset()).unwrap();
        assert!(output.contains("Chen, Wei"));
        assert!(output.contains("10.5281/zenodo.12345"));
    }

    #[test]
    fn test_no_color_messages() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("done"), "✓ done");
        assert_eq!(formatter.error("bad"), "✗ bad");
    }
}

//! Compatibility evaluation - four checks and a banded score
//!
//! Each check answers "does this dataset satisfy this constraint, or is
//! the constraint inapplicable?". A missing dataset attribute makes the
//! corresponding check pass rather than fail, matching the search
//! filter's treatment of absence. The overall score is the fraction of
//! passing checks, so it is always one of {0, 0.25, 0.5, 0.75, 1.0}.

use quarry_domain::{dates, Dataset, DatasetRequirements, EvaluationResult};
use tracing::debug;

use crate::{Catalog, EngineError};

/// Evaluate one dataset against user requirements
pub fn evaluate(dataset: &Dataset, requirements: &DatasetRequirements) -> EvaluationResult {
    let metadata_complete = dataset
        .metadata
        .authors
        .as_ref()
        .is_some_and(|authors| !authors.is_empty())
        && !dataset.metadata.publication_date.is_empty();

    let license_compatible = license_compatible(dataset, requirements);
    let format_compatible = format_compatible(dataset, requirements);
    let timeliness = timeliness(dataset, requirements);

    let passed = [
        metadata_complete,
        license_compatible,
        format_compatible,
        timeliness,
    ]
    .iter()
    .filter(|&&b| b)
    .count();
    let overall_score = passed as f64 / 4.0;

    debug!(
        dataset = %dataset.id,
        score = overall_score,
        "evaluation complete"
    );

    EvaluationResult {
        id: format!("eval-{}", dataset.id),
        dataset_id: dataset.id.clone(),
        metadata_complete,
        license_compatible,
        format_compatible,
        timeliness,
        overall_score,
        notes: notes_for_score(overall_score),
        evaluated_at: dates::now_iso(),
    }
}

/// Resolve a dataset id in the catalog and evaluate it
///
/// # Errors
///
/// [`EngineError::DatasetNotFound`] when the id is not in the catalog.
/// Never returns a partial or zeroed evaluation for an unknown id.
pub fn evaluate_by_id(
    catalog: &Catalog,
    dataset_id: &str,
    requirements: &DatasetRequirements,
) -> Result<EvaluationResult, EngineError> {
    let dataset = catalog
        .get(dataset_id)
        .ok_or_else(|| EngineError::DatasetNotFound(dataset_id.to_string()))?;
    Ok(evaluate(dataset, requirements))
}

/// True when no license constraints are given, the dataset carries no
/// license, or any constraint is a case-insensitive substring of it.
fn license_compatible(dataset: &Dataset, requirements: &DatasetRequirements) -> bool {
    let constraints = match requirements.license_constraints.as_deref() {
        None | Some([]) => return true,
        Some(constraints) => constraints,
    };
    let Some(license) = dataset.metadata.license.as_deref() else {
        return true;
    };
    let license = license.to_lowercase();
    constraints
        .iter()
        .any(|c| license.contains(&c.to_lowercase()))
}

/// True when no format constraints are given, the dataset has no format
/// list, or any constraint exactly matches an entry in it.
fn format_compatible(dataset: &Dataset, requirements: &DatasetRequirements) -> bool {
    let constraints = match requirements.format_constraints.as_deref() {
        None | Some([]) => return true,
        Some(constraints) => constraints,
    };
    let Some(formats) = dataset.metadata.format.as_deref() else {
        return true;
    };
    constraints.iter().any(|c| formats.contains(c))
}

/// True when no date range is given or the publication date falls on or
/// after the range start. The end date is deliberately not enforced here;
/// see the search filter for the two-sided variant.
fn timeliness(dataset: &Dataset, requirements: &DatasetRequirements) -> bool {
    let start = requirements
        .date_range
        .as_ref()
        .and_then(|range| range.start_date.as_deref());
    let Some(start) = start else {
        return true;
    };
    match (
        dates::parse_iso_date(&dataset.metadata.publication_date),
        dates::parse_iso_date(start),
    ) {
        (Some(published), Some(start)) => published >= start,
        _ => false,
    }
}

/// Deterministic notes banded by score
fn notes_for_score(score: f64) -> String {
    let band = if score >= 0.8 {
        "Highly recommended for your research."
    } else if score >= 0.6 {
        "Good match with some limitations."
    } else {
        "May not fully meet your requirements."
    };
    format!(
        "Dataset evaluation completed. Score: {}%. {}",
        (score * 100.0).round() as u32,
        band
    )
}

//! Citation rendering
//!
//! One literal template: authors, year, title, repository, DOI-resolved
//! URL. Both citation formats currently render this same template.

use quarry_domain::{dates, Citation, CitationFormat, Dataset};

use crate::{Catalog, EngineError};

/// Render a citation for a dataset
///
/// Template: `<authors> (<year>). <title>. <repository>. <url>`, with
/// "Unknown Author" standing in for missing authors and "n.d." for an
/// unparseable publication date. The URL prefers the DOI-resolved form.
// TODO: real CSL rendering; the CSL tag currently reuses the APA template.
pub fn render_citation(dataset: &Dataset, format: CitationFormat) -> Citation {
    let authors = match dataset.metadata.authors.as_deref() {
        Some(authors) if !authors.is_empty() => authors.join(", "),
        _ => "Unknown Author".to_string(),
    };
    let year = dates::year_of(&dataset.metadata.publication_date)
        .map(|y| y.to_string())
        .unwrap_or_else(|| "n.d.".to_string());
    let url = dataset
        .metadata
        .doi_url()
        .unwrap_or_else(|| dataset.url.clone());

    let text = format!(
        "{} ({}). {}. {}. {}",
        authors, year, dataset.title, dataset.repository, url
    );

    Citation {
        id: format!("cite-{}", dataset.id),
        dataset_id: dataset.id.clone(),
        format,
        text,
        generated_at: dates::now_iso(),
    }
}

/// Resolve a dataset id in the catalog and render its citation
///
/// # Errors
///
/// [`EngineError::DatasetNotFound`] when the id is not in the catalog.
pub fn cite_by_id(
    catalog: &Catalog,
    dataset_id: &str,
    format: CitationFormat,
) -> Result<Citation, EngineError> {
    let dataset = catalog
        .get(dataset_id)
        .ok_or_else(|| EngineError::DatasetNotFound(dataset_id.to_string()))?;
    Ok(render_citation(dataset, format))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::reference()
    }

    #[test]
    fn test_citation_template() {
        let citation = cite_by_id(&catalog(), "ds-001", CitationFormat::Apa).unwrap();
        assert_eq!(
            citation.text,
            "Dr. Sarah Johnson, Dr. Michael Chen, Dr. Elena Rodriguez (2024). \
             Global Climate Change Indicators Dataset. DataCite. \
             https://doi.org/10.5194/essd-2023-climate"
        );
        assert_eq!(citation.id, "cite-ds-001");
        assert_eq!(citation.dataset_id, "ds-001");
    }

    #[test]
    fn test_missing_authors_render_placeholder() {
        let mut dataset = catalog().get("ds-001").unwrap().clone();
        dataset.metadata.authors = None;
        let citation = render_citation(&dataset, CitationFormat::Apa);
        assert!(citation.text.starts_with("Unknown Author (2024)."));
    }

    #[test]
    fn test_missing_doi_uses_raw_url() {
        // ds-002 carries no DOI
        let citation = cite_by_id(&catalog(), "ds-002", CitationFormat::Apa).unwrap();
        assert!(citation
            .text
            .ends_with("https://genomics.example.org/variants/v3"));
    }

    #[test]
    fn test_csl_renders_same_template_as_apa() {
        let apa = cite_by_id(&catalog(), "ds-003", CitationFormat::Apa).unwrap();
        let csl = cite_by_id(&catalog(), "ds-003", CitationFormat::Csl).unwrap();
        assert_eq!(apa.text, csl.text);
        assert_eq!(csl.format, CitationFormat::Csl);
    }

    #[test]
    fn test_unknown_dataset_is_not_found() {
        let result = cite_by_id(&catalog(), "nope", CitationFormat::Apa);
        assert!(matches!(result, Err(EngineError::DatasetNotFound(_))));
    }

    #[test]
    fn test_unparseable_date_renders_nd() {
        let mut dataset = catalog().get("ds-001").unwrap().clone();
        dataset.metadata.publication_date = "sometime".to_string();
        let citation = render_citation(&dataset, CitationFormat::Apa);
        assert!(citation.text.contains("(n.d.)."));
    }
}

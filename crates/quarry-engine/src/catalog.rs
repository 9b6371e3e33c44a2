//! Catalog - the injected read-only dataset collection
//!
//! Replaces a hidden process-wide dataset list with an explicitly
//! constructed collection the caller passes into search and evaluation.
//! The reference collection ships four curated sample datasets for the
//! offline/fallback path.

use quarry_domain::{Dataset, DatasetMetadata, Repository};

/// A read-only collection of datasets resolvable by id
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    datasets: Vec<Dataset>,
}

impl Catalog {
    /// Create a catalog from an explicit dataset list
    pub fn new(datasets: Vec<Dataset>) -> Self {
        Self { datasets }
    }

    /// An empty catalog
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in reference collection (four curated sample datasets)
    pub fn reference() -> Self {
        Self::new(reference_datasets())
    }

    /// Look up a dataset by id
    pub fn get(&self, id: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|ds| ds.id == id)
    }

    /// All datasets in the catalog
    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    /// Number of datasets
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    /// True when the catalog holds no datasets
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// The curated sample datasets backing the offline path
pub fn reference_datasets() -> Vec<Dataset> {
    vec![
        Dataset {
            id: "ds-001".to_string(),
            title: "Global Climate Change Indicators Dataset".to_string(),
            description: "Comprehensive dataset containing temperature, precipitation, \
                          and atmospheric CO2 measurements from 1880-2023."
                .to_string(),
            url: "https://doi.org/10.5194/essd-2023-climate".to_string(),
            repository: Repository::DataCite,
            metadata: DatasetMetadata {
                authors: Some(strings(&[
                    "Dr. Sarah Johnson",
                    "Dr. Michael Chen",
                    "Dr. Elena Rodriguez",
                ])),
                publication_date: "2024-03-15".to_string(),
                license: Some("CC-BY-4.0".to_string()),
                format: Some(strings(&["CSV", "NetCDF", "JSON"])),
                size: Some("2.3 GB".to_string()),
                doi: Some("10.5194/essd-2023-climate".to_string()),
                keywords: Some(strings(&[
                    "climate change",
                    "temperature",
                    "precipitation",
                    "atmospheric CO2",
                ])),
                version: Some("v2.1".to_string()),
            },
        },
        Dataset {
            id: "ds-007".to_string(),
            title: "North America Climate Change Indicators Dataset".to_string(),
            description: "Comprehensive dataset containing temperature, precipitation, \
                          and atmospheric CO2 measurements from 1990-2023."
                .to_string(),
            url: "https://doi.org/10.5194/essd-1999-climate".to_string(),
            repository: Repository::Re3data,
            metadata: DatasetMetadata {
                authors: Some(strings(&["Dr. Elena Rodriguez"])),
                publication_date: "2024-03-15".to_string(),
                license: Some("CC-BY-4.0".to_string()),
                format: Some(strings(&["CSV", "JSON"])),
                size: Some("3 GB".to_string()),
                doi: Some("10.5194/essd-1999-climate".to_string()),
                keywords: Some(strings(&["climate change", "atmospheric CO2"])),
                version: Some("v7.1".to_string()),
            },
        },
        Dataset {
            id: "ds-002".to_string(),
            title: "Human Genomic Variants Database".to_string(),
            description: "Large-scale collection of human genetic variants with associated \
                          phenotypic data from population studies."
                .to_string(),
            url: "https://genomics.example.org/variants/v3".to_string(),
            repository: Repository::Re3data,
            metadata: DatasetMetadata {
                authors: Some(strings(&["Genomics Consortium"])),
                publication_date: "2024-01-22".to_string(),
                license: Some("Open Data Commons".to_string()),
                format: Some(strings(&["VCF", "TSV", "Parquet"])),
                size: Some("8.7 TB".to_string()),
                doi: None,
                keywords: Some(strings(&[
                    "genomics",
                    "variants",
                    "population genetics",
                    "phenotypes",
                ])),
                version: Some("v3.0".to_string()),
            },
        },
        Dataset {
            id: "ds-003".to_string(),
            title: "Urban Air Quality Monitoring Data".to_string(),
            description: "Real-time air quality measurements from sensors across 50 major \
                          cities worldwide, 2020-2024."
                .to_string(),
            url: "https://urbandata.gov/air-quality".to_string(),
            repository: Repository::DataCite,
            metadata: DatasetMetadata {
                authors: Some(strings(&["Urban Environmental Monitoring Initiative"])),
                publication_date: "2024-02-10".to_string(),
                license: Some("Public Domain".to_string()),
                format: Some(strings(&["CSV", "JSON", "XML"])),
                size: Some("450 MB".to_string()),
                doi: Some("10.5067/urban-air-quality-2024".to_string()),
                keywords: Some(strings(&[
                    "air quality",
                    "urban environment",
                    "sensors",
                    "pollution",
                ])),
                version: Some("v1.2".to_string()),
            },
        },
    ]
}

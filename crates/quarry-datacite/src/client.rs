//! DataCite REST API client
//!
//! Async HTTP client over the `/dois` search and detail endpoints. Search
//! pagination uses DataCite's bracketed keys (`page[number]`, `page[size]`);
//! the detail path percent-encodes the DOI, slashes included.
//!
//! # Examples
//!
//! ```no_run
//! use quarry_datacite::{DataCiteClient, DataCiteConfig, SearchOptions};
//!
//! # async fn run() -> Result<(), quarry_datacite::DataCiteError> {
//! let client = DataCiteClient::new(DataCiteConfig::default())?;
//! let datasets = client.search("climate", &SearchOptions::default()).await?;
//! # Ok(())
//! # }
//! ```

use quarry_domain::Dataset;
use reqwest::header::ACCEPT;
use reqwest::Url;
use tracing::debug;

use crate::config::DataCiteConfig;
use crate::normalize::normalize_record;
use crate::payload::{DoiDetailResponse, DoiSearchResponse};
use crate::DataCiteError;

/// Media type DataCite serves its JSON:API payloads as
const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// Options for a DOI search request
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Page number (1-based)
    pub page: u32,
    /// Page size; the configured default applies when `None`
    pub size: Option<u32>,
    /// License filter passed through to the provider
    pub license: Option<String>,
    /// Resource type filter (e.g. "dataset")
    pub resource_type: Option<String>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            page: 1,
            size: None,
            license: None,
            resource_type: None,
        }
    }
}

/// Async client for the DataCite REST API
pub struct DataCiteClient {
    config: DataCiteConfig,
    client: reqwest::Client,
}

impl DataCiteClient {
    /// Create a client from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns [`DataCiteError::InvalidConfig`] when the configuration
    /// fails validation.
    pub fn new(config: DataCiteConfig) -> Result<Self, DataCiteError> {
        config.validate().map_err(DataCiteError::InvalidConfig)?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| DataCiteError::Communication(format!("Failed to build client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Create a client configured from the environment
    pub fn from_env() -> Result<Self, DataCiteError> {
        Self::new(DataCiteConfig::from_env())
    }

    /// Search DOIs and normalize each hit to a [`Dataset`]
    ///
    /// # Errors
    ///
    /// - [`DataCiteError::Upstream`] on a non-2xx response
    /// - [`DataCiteError::Communication`] on transport failure
    /// - [`DataCiteError::InvalidResponse`] when the body is not the
    ///   expected JSON shape
    pub async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<Dataset>, DataCiteError> {
        let url = self.search_url(query, options)?;
        debug!(url = %url, "DataCite search");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, JSON_API_MEDIA_TYPE)
            .send()
            .await
            .map_err(|e| DataCiteError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        debug!(status = %status, "DataCite search response");
        if !status.is_success() {
            return Err(upstream_error(status));
        }

        let body: DoiSearchResponse = response
            .json()
            .await
            .map_err(|e| DataCiteError::InvalidResponse(format!("Failed to parse search response: {}", e)))?;

        Ok(body.data.iter().map(normalize_record).collect())
    }

    /// Fetch one DOI and normalize it
    ///
    /// Returns `Ok(None)` when the API responds successfully but carries
    /// no record.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`search`](Self::search). A 404 surfaces as
    /// [`DataCiteError::Upstream`] with status 404.
    pub async fn get_doi(&self, id: &str) -> Result<Option<Dataset>, DataCiteError> {
        let url = self.detail_url(id)?;
        debug!(url = %url, "DataCite detail fetch");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, JSON_API_MEDIA_TYPE)
            .send()
            .await
            .map_err(|e| DataCiteError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        debug!(status = %status, doi = id, "DataCite detail response");
        if !status.is_success() {
            return Err(upstream_error(status));
        }

        let body: DoiDetailResponse = response
            .json()
            .await
            .map_err(|e| DataCiteError::InvalidResponse(format!("Failed to parse detail response: {}", e)))?;

        Ok(body.data.as_ref().map(normalize_record))
    }

    /// Build the `/dois` search URL with bracketed pagination params
    fn search_url(&self, query: &str, options: &SearchOptions) -> Result<Url, DataCiteError> {
        let size = options.size.unwrap_or(self.config.page_size);

        let mut params: Vec<(&str, String)> = Vec::new();
        if !query.is_empty() {
            params.push(("query", query.to_string()));
        }
        params.push(("page[number]", options.page.to_string()));
        params.push(("page[size]", size.to_string()));
        if let Some(license) = &options.license {
            params.push(("license", license.clone()));
        }
        if let Some(resource_type) = &options.resource_type {
            params.push(("resource-type", resource_type.clone()));
        }

        Url::parse_with_params(&format!("{}/dois", self.config.base_url), &params)
            .map_err(|e| DataCiteError::InvalidConfig(format!("Bad search URL: {}", e)))
    }

    /// Build the `/dois/{id}` detail URL, percent-encoding the id
    fn detail_url(&self, id: &str) -> Result<Url, DataCiteError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| DataCiteError::InvalidConfig(format!("Bad base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| DataCiteError::InvalidConfig("base_url cannot be a base".to_string()))?
            .push("dois")
            .push(id);
        Ok(url)
    }
}

fn upstream_error(status: reqwest::StatusCode) -> DataCiteError {
    DataCiteError::Upstream {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> DataCiteClient {
        DataCiteClient::new(DataCiteConfig::default()).unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = DataCiteConfig::default();
        config.page_size = 0;
        assert!(matches!(
            DataCiteClient::new(config),
            Err(DataCiteError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_search_url_has_bracketed_pagination() {
        let url = client()
            .search_url("climate change", &SearchOptions::default())
            .unwrap();
        let q = url.query().unwrap();
        assert!(q.contains("query=climate+change") || q.contains("query=climate%20change"));
        assert!(q.contains("page%5Bnumber%5D=1"));
        assert!(q.contains("page%5Bsize%5D=10"));
    }

    #[test]
    fn test_search_url_optional_filters() {
        let options = SearchOptions {
            page: 3,
            size: Some(25),
            license: Some("cc-by-4.0".to_string()),
            resource_type: Some("dataset".to_string()),
        };
        let url = client().search_url("soil", &options).unwrap();
        let q = url.query().unwrap();
        assert!(q.contains("page%5Bnumber%5D=3"));
        assert!(q.contains("page%5Bsize%5D=25"));
        assert!(q.contains("license=cc-by-4.0"));
        assert!(q.contains("resource-type=dataset"));
    }

    #[test]
    fn test_search_url_empty_query_omitted() {
        let url = client().search_url("", &SearchOptions::default()).unwrap();
        assert!(!url.query().unwrap().contains("query="));
    }

    #[test]
    fn test_detail_url_encodes_doi_slash() {
        let url = client().detail_url("10.1234/zenodo.12345").unwrap();
        assert_eq!(url.path(), "/dois/10.1234%2Fzenodo.12345");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_communication_error() {
        let mut config = DataCiteConfig::default();
        config.base_url = "http://127.0.0.1:1".to_string();
        config.timeout_secs = 1;
        let client = DataCiteClient::new(config).unwrap();

        let result = client.search("test", &SearchOptions::default()).await;
        assert!(matches!(result, Err(DataCiteError::Communication(_))));
    }

    // Integration tests (requires network access to api.datacite.org)
    #[tokio::test]
    #[ignore] // Only run when the live API is reachable
    async fn test_live_search_integration() {
        let client = DataCiteClient::from_env().unwrap();
        let options = SearchOptions {
            size: Some(2),
            ..SearchOptions::default()
        };
        let datasets = client.search("climate", &options).await.unwrap();
        for ds in &datasets {
            assert!(!ds.id.is_empty());
            assert!(!ds.metadata.publication_date.is_empty());
        }
    }
}

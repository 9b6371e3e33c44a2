//! Tool context - the collaborators every tool handler works against
//!
//! Holds the injected read-only catalog and, unless running offline, the
//! live DataCite client. No tool mutates the context; every invocation
//! constructs fresh result records.

use quarry_datacite::{DataCiteClient, DataCiteError};
use quarry_domain::Dataset;
use quarry_engine::Catalog;
use tracing::warn;

/// Environment variable that disables the live provider
pub const OFFLINE_ENV: &str = "QUARRY_OFFLINE";

/// Shared collaborators for tool handlers
pub struct ToolContext {
    catalog: Catalog,
    client: Option<DataCiteClient>,
}

impl ToolContext {
    /// Create a context with an explicit catalog and optional live client
    pub fn new(catalog: Catalog, client: Option<DataCiteClient>) -> Self {
        Self { catalog, client }
    }

    /// Catalog-only context; searches and lookups never touch the network
    pub fn offline(catalog: Catalog) -> Self {
        Self::new(catalog, None)
    }

    /// Build a context from the environment
    ///
    /// Uses the reference catalog. The live client is configured from
    /// `DATACITE_BASE_URL` unless `QUARRY_OFFLINE=1` is set; a client
    /// that fails to build degrades to offline with a warning.
    pub fn from_env() -> Self {
        let catalog = Catalog::reference();
        if std::env::var(OFFLINE_ENV).as_deref() == Ok("1") {
            return Self::offline(catalog);
        }
        match DataCiteClient::from_env() {
            Ok(client) => Self::new(catalog, Some(client)),
            Err(e) => {
                warn!(error = %e, "DataCite client unavailable, running offline");
                Self::offline(catalog)
            }
        }
    }

    /// The injected dataset collection
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The live provider client, when configured
    pub fn client(&self) -> Option<&DataCiteClient> {
        self.client.as_ref()
    }

    /// Resolve a dataset id: catalog first, then the live provider
    ///
    /// `Ok(None)` means the id is unknown everywhere it could be looked
    /// up; callers turn that into a NotFound-style payload.
    pub async fn resolve_dataset(&self, id: &str) -> Result<Option<Dataset>, DataCiteError> {
        if let Some(dataset) = self.catalog.get(id) {
            return Ok(Some(dataset.clone()));
        }
        match &self.client {
            Some(client) => client.get_doi(id).await,
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_resolution_hits_catalog() {
        let context = ToolContext::offline(Catalog::reference());
        let dataset = context.resolve_dataset("ds-001").await.unwrap().unwrap();
        assert_eq!(dataset.id, "ds-001");
    }

    #[tokio::test]
    async fn test_offline_unknown_id_is_none() {
        let context = ToolContext::offline(Catalog::reference());
        assert!(context.resolve_dataset("10.1234/nope").await.unwrap().is_none());
    }
}

//! Quarry DataCite Provider Layer
//!
//! Client and normalizer for the DataCite REST API.
//!
//! # Architecture
//!
//! Raw DOI payloads deserialize into the schema-typed structures in
//! [`payload`]; the [`normalize`] module maps those into canonical
//! [`quarry_domain::Dataset`] records with a defined fallback rule for
//! every optional field. [`DataCiteClient`] ties the two together over
//! HTTP.
//!
//! Missing optional attributes are never errors: they degrade to absent
//! fields. Only a body that is not even the expected JSON shape, or a
//! non-2xx response, produces a [`DataCiteError`].
//!
//! # Examples
//!
//! ```
//! use quarry_datacite::normalize_record;
//! use quarry_datacite::payload::DoiRecord;
//!
//! let record: DoiRecord = serde_json::from_str(
//!     r#"{ "id": "10.1234/example", "attributes": { "publicationYear": 2024 } }"#
//! ).unwrap();
//! let dataset = normalize_record(&record);
//! assert_eq!(dataset.id, "10.1234/example");
//! assert_eq!(dataset.metadata.publication_date, "2024-01-01");
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod normalize;
pub mod payload;

use thiserror::Error;

pub use client::{DataCiteClient, SearchOptions};
pub use config::DataCiteConfig;
pub use normalize::normalize_record;

/// Errors that can occur talking to the DataCite API
#[derive(Error, Debug)]
pub enum DataCiteError {
    /// Non-2xx HTTP response from the provider
    #[error("DataCite request failed: {status} {status_text}")]
    Upstream {
        /// HTTP status code
        status: u16,
        /// HTTP status text ("Not Found", "Bad Gateway", ...)
        status_text: String,
    },

    /// Transport-level failure (connection refused, timeout, DNS)
    #[error("Communication error: {0}")]
    Communication(String),

    /// Response body was not the expected JSON shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

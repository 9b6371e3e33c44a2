//! Quarry Evaluation Engine
//!
//! Pure logic over canonical [`quarry_domain`] records: keyword/license/
//! date filtering of a dataset collection, the four-check compatibility
//! evaluation, citation rendering, and decision-log construction.
//!
//! The engine never talks to the network. Datasets come in as an
//! explicitly constructed, read-only [`Catalog`] injected by the caller;
//! the built-in [`Catalog::reference`] collection backs the offline path.
//!
//! Library-level functions raise [`EngineError`] on truly exceptional
//! conditions (an unknown dataset id); the tool boundary in `quarry-mcp`
//! converts those to structured payloads.

#![warn(missing_docs)]

pub mod catalog;
pub mod cite;
pub mod decision;
pub mod evaluate;
pub mod search;

use thiserror::Error;

pub use catalog::Catalog;
pub use cite::{cite_by_id, render_citation};
pub use decision::log_decision;
pub use evaluate::{evaluate, evaluate_by_id};
pub use search::{filter_datasets, SearchFilter};

/// Errors raised by the evaluation engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// Referenced dataset id does not exist in the resolvable collection
    #[error("Dataset {0} not found")]
    DatasetNotFound(String),
}

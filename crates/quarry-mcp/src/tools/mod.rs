//! MCP tool implementations

mod cite;
mod decision;
mod evaluate;
mod fetch;
mod metadata;
mod search;

pub use cite::{handle_cite, CiteOutcome, CiteParams};
pub use decision::{handle_decision, DecisionParams};
pub use evaluate::{handle_evaluate, EvaluateOutcome, EvaluateParams};
pub use fetch::{handle_fetch, FetchOutcome, FetchParams};
pub use metadata::{handle_metadata, MetadataOutcome, MetadataParams};
pub use search::{handle_search, SearchParams, SearchResult};

//! Quarry Domain Layer
//!
//! This crate contains the canonical record types shared by every other
//! layer of Quarry. The records double as the wire format returned to the
//! orchestration layer, so everything here derives serde with the
//! camelCase field names callers expect.
//!
//! ## Key Concepts
//!
//! - **Dataset**: the canonical discoverable unit, normalized from a
//!   provider-specific payload
//! - **DatasetMetadata**: optional descriptive attributes; every field may
//!   be absent except `publicationDate`
//! - **DatasetRequirements**: a researcher's constraints (formats,
//!   licenses, date range) with explicit presence checks
//! - **EvaluationResult**: the four-check compatibility score
//! - **Citation / DecisionLog**: derived artifacts owned by the caller
//!
//! ## Architecture
//!
//! Pure data and small helpers only. Network access, normalization from
//! provider payloads, and scoring live in other crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod citation;
pub mod dataset;
pub mod dates;
pub mod decision;
pub mod evaluation;
pub mod requirements;

// Re-exports for convenience
pub use citation::{Citation, CitationFormat};
pub use dataset::{truncate_display, Dataset, DatasetMetadata, Repository, MAX_DISPLAY_LEN};
pub use decision::{DecisionAction, DecisionLog};
pub use evaluation::EvaluationResult;
pub use requirements::{DateRange, DatasetRequirements};

//! Core types for seedmix: merging player YAML files into one weighted seed.
//!
//! Each source file holds one or more slot documents. A slot names a game
//! (or a mapping of games) and carries the option block for each. The merge
//! builds a [`CombinedDocument`] whose `game` table picks between every
//! contributed game using the source weights, and whose generated triggers
//! restore each slot's own name once its game is picked.
//!
//! Front-ends drive a [`MergeSession`], which holds the sources and weights
//! and performs the merge on request.

/// The merged output document.
pub mod combined;
/// Session configuration and defaults.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// The merge algorithm.
pub mod merge;
/// Ordered sources and weights edited by a front-end.
pub mod session;
/// Slot documents and their game contributions.
pub mod slot;
/// Source files and multi-document parsing.
pub mod source;
/// Carried-over and generated trigger rules.
pub mod trigger;
/// Weight parsing.
pub mod weight;

/// Re-export the combined document.
pub use combined::CombinedDocument;
/// Re-export configuration.
pub use config::MergeConfig;
/// Re-export error types.
pub use error::{ErrorCategory, MergeError, MergeResult, SlotIssue};
/// Re-export the merge entry points.
pub use merge::{merge, merge_documents};
/// Re-export session types.
pub use session::{AddReport, MergeSession};
/// Re-export slot types.
pub use slot::{Slot, SlotGames};
/// Re-export the source document.
pub use source::SourceDocument;
/// Re-export trigger types.
pub use trigger::{AutoTrigger, Trigger};
/// Re-export weight parsing.
pub use weight::{WeightError, parse_weight};

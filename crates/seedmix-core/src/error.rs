use std::path::PathBuf;

use crate::weight::WeightError;

/// Alias for `Result<T, MergeError>`.
pub type MergeResult<T> = Result<T, MergeError>;

/// Broad classes of failure, as reported to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A source could not be loaded as YAML.
    Parse,
    /// A parsed document is missing or misuses a required key.
    Structural,
    /// The request itself is invalid (name, sources, weights).
    Validation,
    /// The combined document could not be written.
    Write,
}

/// Why a single YAML document could not be used as a slot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotIssue {
    /// The document is a scalar or sequence rather than a mapping.
    #[error("document is not a mapping")]
    NotAMapping,

    /// The document has no `game` key.
    #[error("missing `game` field")]
    MissingGame,

    /// `game` is neither a string nor a mapping.
    #[error("`game` must be a string or a mapping of game names")]
    InvalidGame,

    /// A key of the `game` mapping is not a string.
    #[error("game names must be strings")]
    NonStringGameName,

    /// The slot names a game but carries no option block for it.
    #[error("game \"{0}\" has no option block")]
    MissingOptions(String),

    /// A game is named after one of the combined document's own keys.
    #[error("game name \"{0}\" collides with a reserved top-level key")]
    ReservedGameName(String),

    /// `name` is a sequence or mapping rather than a scalar.
    #[error("`name` must be a scalar")]
    InvalidName,

    /// `triggers` is present but not a sequence.
    #[error("`triggers` must be a sequence")]
    InvalidTriggers,
}

/// Errors that can occur while preparing, merging or saving a combined document.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// A source file could not be read.
    #[error("failed to load {}: {source}", path.display())]
    Read {
        /// The source that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A source file is not valid YAML.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// The source that failed.
        path: PathBuf,
        /// The underlying YAML error.
        source: serde_yml::Error,
    },

    /// A document inside a source is not a usable slot.
    #[error("{}: document {}: {issue}", path.display(), document + 1)]
    Structural {
        /// The source that failed.
        path: PathBuf,
        /// Zero-based index of the offending document within the file.
        document: usize,
        /// What is wrong with it.
        issue: SlotIssue,
    },

    /// A source file contains no slot documents at all.
    #[error("{}: no slot documents found", .0.display())]
    EmptySource(PathBuf),

    /// The output name is empty or whitespace.
    #[error("output name cannot be empty")]
    EmptyName,

    /// A merge was requested with no sources.
    #[error("no sources selected")]
    NoSources,

    /// A user-entered weight was rejected.
    #[error("invalid weight for {}: \"{input}\" ({reason})", path.display())]
    InvalidWeight {
        /// The source whose weight was being set.
        path: PathBuf,
        /// The rejected text.
        input: String,
        /// Why it was rejected.
        reason: WeightError,
    },

    /// A weight was set for a path that is not in the session.
    #[error("unknown source: {}", .0.display())]
    UnknownSource(PathBuf),

    /// The combined document could not be rendered as YAML.
    #[error("failed to render YAML: {0}")]
    Serialize(#[source] serde_yml::Error),

    /// The destination could not be written.
    #[error("failed to save {}: {source}", path.display())]
    Write {
        /// The destination path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl MergeError {
    /// The broad category this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Read { .. } | Self::Parse { .. } => ErrorCategory::Parse,
            Self::Structural { .. } | Self::EmptySource(_) => ErrorCategory::Structural,
            Self::EmptyName
            | Self::NoSources
            | Self::InvalidWeight { .. }
            | Self::UnknownSource(_) => ErrorCategory::Validation,
            Self::Serialize(_) | Self::Write { .. } => ErrorCategory::Write,
        }
    }
}

//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatstatsError`] enum that covers every
//! failure the pipeline can report. Failures are contained at the smallest
//! scope that can absorb them:
//!
//! - A document with no message markers fails the whole parse
//!   ([`ChatstatsError::NoMarkers`]); callers treat it as an empty table.
//! - A single unparsable timestamp never becomes an error value. The entry
//!   is kept with its calendar fields unset.
//! - A statistic that fails internally is reported as
//!   [`Outcome::Failed`](crate::stats::Outcome::Failed) and does not affect
//!   the other statistics.
//! - A missing stop-word list only fails the two word statistics
//!   ([`ChatstatsError::StopWordsUnavailable`]).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::ChatTable;
///
/// fn load(text: &str) -> Result<ChatTable> {
///     ChatTable::parse(text)
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred while reading an export or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input contains no `date, time - ` message markers at all.
    ///
    /// This usually means the file is not a chat export, or was exported
    /// with a locale whose date layout is not supported.
    #[error("Failed to parse chat export: no recognizable message markers")]
    NoMarkers,

    /// The stop-word list could not be loaded.
    ///
    /// Only the word-frequency and word-cloud statistics depend on it.
    #[error("Stop words unavailable{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    StopWordsUnavailable {
        /// The file that was requested, if any
        path: Option<PathBuf>,
        /// Why it could not be used
        #[source]
        source: io::Error,
    },

    /// A statistic failed internally.
    ///
    /// Produced by the engine's isolation wrapper when a computation
    /// returns an error or panics.
    #[error("Statistic '{statistic}' failed: {message}")]
    Internal {
        /// Name of the statistic that failed
        statistic: &'static str,
        /// Description of the failure
        message: String,
    },

    /// The selector names an author that does not exist in the table.
    #[error("Unknown author '{0}'")]
    UnknownAuthor(String),

    /// An output format was requested that is unknown or not compiled in.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What the format was for
        format: &'static str,
        /// Description of the problem
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChatstatsError {
    /// Creates a stop-word error for a missing or unreadable file.
    pub fn stop_words(path: Option<PathBuf>, source: io::Error) -> Self {
        ChatstatsError::StopWordsUnavailable { path, source }
    }

    /// Creates a stop-word error for an engine built without a list.
    pub fn stop_words_missing() -> Self {
        ChatstatsError::StopWordsUnavailable {
            path: None,
            source: io::Error::new(io::ErrorKind::NotFound, "no stop-word list configured"),
        }
    }

    /// Creates an internal failure for the named statistic.
    pub fn internal(statistic: &'static str, message: impl Into<String>) -> Self {
        ChatstatsError::Internal {
            statistic,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if the document had no message markers.
    pub fn is_no_markers(&self) -> bool {
        matches!(self, ChatstatsError::NoMarkers)
    }

    /// Returns `true` if this is a missing stop-word resource.
    pub fn is_resource(&self) -> bool {
        matches!(self, ChatstatsError::StopWordsUnavailable { .. })
    }

    /// Returns `true` if a statistic failed internally.
    pub fn is_internal(&self) -> bool {
        matches!(self, ChatstatsError::Internal { .. })
    }
}

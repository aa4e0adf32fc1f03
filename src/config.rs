//! Configuration for parsing and analysis.
//!
//! [`AnalysisConfig`] collects the literals the pipeline depends on: the
//! timestamp layout, the sentinel author given to notification lines, the
//! media placeholder body and the top-N cut-offs. It carries no CLI
//! framework dependencies and can be deserialized from any serde format.
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::new()
//!     .with_top_words(10)
//!     .with_stop_words_path("stop_hinglish.txt");
//!
//! assert_eq!(config.top_words, 10);
//! assert_eq!(config.system_author, "group_notification");
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Author assigned to lines without a `name: ` prefix.
pub const SYSTEM_AUTHOR: &str = "group_notification";

/// Selector label meaning "every author".
pub const OVERALL: &str = "Overall";

/// Body the exporter writes in place of attachments.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// chrono layout of the timestamp captured by the segmenter.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%y, %H:%M";

/// Configuration for building a table and computing statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// chrono format used to parse `date, time` strings (default: `%d/%m/%y, %H:%M`)
    pub timestamp_format: String,

    /// Author given to notification lines (default: `group_notification`)
    pub system_author: String,

    /// Selector label for the whole table (default: `Overall`)
    pub overall_label: String,

    /// Body text of an omitted attachment (default: `<Media omitted>`)
    pub media_placeholder: String,

    /// Number of authors in the busy-users ranking (default: 5)
    pub top_users: usize,

    /// Number of words in the common-words ranking (default: 20)
    pub top_words: usize,

    /// Whitespace-separated stop-word file (default: none)
    pub stop_words_path: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            timestamp_format: TIMESTAMP_FORMAT.to_string(),
            system_author: SYSTEM_AUTHOR.to_string(),
            overall_label: OVERALL.to_string(),
            media_placeholder: MEDIA_PLACEHOLDER.to_string(),
            top_users: 5,
            top_words: 20,
            stop_words_path: None,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chrono format used for timestamps.
    #[must_use]
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Sets the author assigned to notification lines.
    #[must_use]
    pub fn with_system_author(mut self, author: impl Into<String>) -> Self {
        self.system_author = author.into();
        self
    }

    /// Sets the media placeholder body.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Sets how many authors the busy-users ranking keeps.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Sets how many words the common-words ranking keeps.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the stop-word file to load.
    #[must_use]
    pub fn with_stop_words_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stop_words_path = Some(path.into());
        self
    }

    /// Returns `true` if `body` is the media placeholder, ignoring surrounding whitespace.
    pub fn is_media(&self, body: &str) -> bool {
        body.trim() == self.media_placeholder
    }

    /// Returns `true` if `author` is the notification sentinel.
    pub fn is_system(&self, author: &str) -> bool {
        author == self.system_author
    }
}

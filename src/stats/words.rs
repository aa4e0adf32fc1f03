//! Word frequency and word-cloud input.
//!
//! Both statistics share one tokenization contract:
//! - notification rows and media placeholders are skipped,
//! - bodies are lowercased and split on whitespace,
//! - tokens found in the [`StopWords`] list are dropped.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::config::AnalysisConfig;
use crate::entry::Entry;
use crate::error::{ChatstatsError, Result};
use crate::stats::frequency::FrequencyTable;
use crate::table::TableView;

/// Words excluded from word statistics.
///
/// Loaded once and shared by every call. Words are kept exactly as written
/// in the source; tokens are compared after lowercasing.
///
/// # Example
///
/// ```
/// use chatstats::stats::StopWords;
///
/// let stop = StopWords::from_text("the a  an\nis");
/// assert!(stop.contains("the"));
/// assert_eq!(stop.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Builds the list from whitespace-separated text.
    pub fn from_text(text: &str) -> Self {
        text.split_whitespace().collect()
    }

    /// Loads the list from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::StopWordsUnavailable`] if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| ChatstatsError::stop_words(Some(path.to_path_buf()), e))?;
        let words = Self::from_text(&text);
        log::debug!("Loaded {} stop words from {}", words.len(), path.display());
        Ok(words)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Returns the entries that take part in word statistics.
pub fn word_entries<'v, 'a>(
    view: &'v TableView<'a>,
    config: &'v AnalysisConfig,
) -> impl Iterator<Item = &'a Entry> + 'v {
    view.iter()
        .filter(|e| !config.is_system(e.author()) && !config.is_media(e.body()))
}

/// Lowercased tokens of `body` that are not stop words.
pub fn surviving_tokens(body: &str, stop_words: &StopWords) -> Vec<String> {
    body.to_lowercase()
        .split_whitespace()
        .filter(|token| !stop_words.contains(token))
        .map(str::to_string)
        .collect()
}

/// Most frequent surviving tokens, at most `config.top_words` of them.
pub fn most_common_words(
    view: &TableView<'_>,
    config: &AnalysisConfig,
    stop_words: &StopWords,
) -> FrequencyTable {
    let tokens = word_entries(view, config).flat_map(|e| surviving_tokens(e.body(), stop_words));
    FrequencyTable::count(tokens).top(config.top_words)
}

/// Text handed to a word-cloud layout: every surviving token, space-joined.
///
/// Messages left with no tokens are dropped.
pub fn wordcloud_text(view: &TableView<'_>, config: &AnalysisConfig, stop_words: &StopWords) -> String {
    word_entries(view, config)
        .map(|e| surviving_tokens(e.body(), stop_words).join(" "))
        .filter(|message| !message.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

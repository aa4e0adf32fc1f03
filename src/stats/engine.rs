//! The statistics engine.
//!
//! [`StatsEngine`] owns everything a statistic needs besides the table: the
//! [`AnalysisConfig`], the stop-word list, the URL finder and the emoji
//! catalog. Each operation takes a [`Selector`] and a [`ChatTable`], selects
//! the view, and returns an [`Outcome`]:
//!
//! - an empty selection gives [`Outcome::Empty`],
//! - an error or panic inside one statistic gives [`Outcome::Failed`] and is
//!   logged, leaving every other statistic untouched.
//!
//! # Example
//!
//! ```
//! use chatstats::prelude::*;
//!
//! # fn main() -> chatstats::Result<()> {
//! let table = ChatTable::parse(
//!     "1/1/24, 09:00 - Alice: hello world\n\
//!      1/1/24, 09:05 - Bob: <Media omitted>\n\
//!      1/1/24, 09:10 - Alice: hi",
//! )?;
//!
//! let engine = StatsEngine::builder()
//!     .with_stop_words(StopWords::from_text("the a"))
//!     .build();
//!
//! let summary = engine.fetch_stats(&Selector::Overall, &table).into_value();
//! assert_eq!((summary.messages, summary.words, summary.media, summary.links), (3, 3, 1, 0));
//!
//! let busy = engine.most_busy_users(&Selector::Overall, &table).into_value();
//! assert_eq!(busy.top.first(), Some(("Alice", 2)));
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;

use crate::config::AnalysisConfig;
use crate::core::filter::Selector;
use crate::error::{ChatstatsError, Result};
use crate::stats::activity::{self, Heatmap};
use crate::stats::emoji::{self, EmojiCatalog, UnicodeEmojiCatalog};
use crate::stats::frequency::FrequencyTable;
use crate::stats::links::{LinkifyUrlFinder, UrlFinder};
use crate::stats::outcome::{Outcome, isolate};
use crate::stats::summary::{self, MessageSummary};
use crate::stats::timeline::{self, DailyPoint, MonthlyPoint};
use crate::stats::users::{self, BusyUsers};
use crate::stats::words::{self, StopWords};
use crate::table::{ChatTable, TableView};

/// Computes statistics over a selection of a [`ChatTable`].
pub struct StatsEngine {
    config: AnalysisConfig,
    stop_words: Option<StopWords>,
    urls: Box<dyn UrlFinder>,
    emojis: Box<dyn EmojiCatalog>,
}

impl StatsEngine {
    /// Returns a builder with the default config, no stop words, the
    /// `linkify` URL finder and the Unicode emoji catalog.
    pub fn builder() -> StatsEngineBuilder {
        StatsEngineBuilder::default()
    }

    /// Builds an engine from `config`, loading its stop-word list if one is set.
    ///
    /// A list that cannot be read is logged; the two word statistics then
    /// report [`ChatstatsError::StopWordsUnavailable`].
    pub fn from_config(config: AnalysisConfig) -> Self {
        let stop_words = config.stop_words_path.as_deref().and_then(|path| {
            StopWords::load(path)
                .inspect_err(|e| log::warn!("{e}"))
                .ok()
        });

        StatsEngineBuilder {
            config,
            stop_words,
            ..StatsEngineBuilder::default()
        }
        .build()
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Returns the stop-word list, if one was provided.
    pub fn stop_words(&self) -> Option<&StopWords> {
        self.stop_words.as_ref()
    }

    /// Message, word, media and link counts.
    pub fn fetch_stats(&self, selector: &Selector, table: &ChatTable) -> Outcome<MessageSummary> {
        self.run("fetch_stats", selector, table, |view| {
            Ok(summary::summarize(view, &self.config, self.urls.as_ref()))
        })
    }

    /// Top authors and every author's share of messages.
    pub fn most_busy_users(&self, selector: &Selector, table: &ChatTable) -> Outcome<BusyUsers> {
        self.run("most_busy_users", selector, table, |view| {
            Ok(users::most_busy_users(view, self.config.top_users))
        })
    }

    /// Messages per month, oldest first.
    pub fn monthly_timeline(&self, selector: &Selector, table: &ChatTable) -> Outcome<Vec<MonthlyPoint>> {
        self.run("monthly_timeline", selector, table, |view| {
            Ok(timeline::monthly_timeline(view))
        })
    }

    /// Messages per day, oldest first.
    pub fn daily_timeline(&self, selector: &Selector, table: &ChatTable) -> Outcome<Vec<DailyPoint>> {
        self.run("daily_timeline", selector, table, |view| {
            Ok(timeline::daily_timeline(view))
        })
    }

    /// Messages per weekday name.
    pub fn week_activity_map(&self, selector: &Selector, table: &ChatTable) -> Outcome<FrequencyTable> {
        self.run("week_activity_map", selector, table, |view| {
            Ok(activity::week_activity_map(view))
        })
    }

    /// Messages per month name.
    pub fn month_activity_map(&self, selector: &Selector, table: &ChatTable) -> Outcome<FrequencyTable> {
        self.run("month_activity_map", selector, table, |view| {
            Ok(activity::month_activity_map(view))
        })
    }

    /// Weekday x hour-bucket counts.
    pub fn activity_heatmap(&self, selector: &Selector, table: &ChatTable) -> Outcome<Heatmap> {
        self.run("activity_heatmap", selector, table, |view| {
            Ok(activity::activity_heatmap(view))
        })
    }

    /// Most frequent words outside the stop-word list.
    ///
    /// Fails with [`ChatstatsError::StopWordsUnavailable`] when the engine has
    /// no stop-word list, whatever the selection.
    pub fn most_common_words(&self, selector: &Selector, table: &ChatTable) -> Outcome<FrequencyTable> {
        let stop_words = match self.require_stop_words("most_common_words") {
            Ok(stop_words) => stop_words,
            Err(e) => return Outcome::Failed(e),
        };
        self.run("most_common_words", selector, table, |view| {
            Ok(words::most_common_words(view, &self.config, stop_words))
        })
    }

    /// Word-cloud input text.
    ///
    /// Same tokens as [`most_common_words`](Self::most_common_words) without
    /// the top-N cut. [`Outcome::Empty`] when no token survives.
    pub fn wordcloud_text(&self, selector: &Selector, table: &ChatTable) -> Outcome<String> {
        let stop_words = match self.require_stop_words("wordcloud_text") {
            Ok(stop_words) => stop_words,
            Err(e) => return Outcome::Failed(e),
        };
        match self.run("wordcloud_text", selector, table, |view| {
            Ok(words::wordcloud_text(view, &self.config, stop_words))
        }) {
            Outcome::Ready(text) if text.is_empty() => Outcome::Empty,
            outcome => outcome,
        }
    }

    /// Emoji frequency, busiest first.
    pub fn emoji_helper(&self, selector: &Selector, table: &ChatTable) -> Outcome<FrequencyTable> {
        self.run("emoji_helper", selector, table, |view| {
            Ok(emoji::emoji_frequency(view, &self.config, self.emojis.as_ref()))
        })
    }

    fn require_stop_words(&self, statistic: &'static str) -> Result<&StopWords> {
        self.stop_words.as_ref().ok_or_else(|| {
            let err = ChatstatsError::stop_words_missing();
            log::warn!("{statistic}: {err}");
            err
        })
    }

    fn run<'t, T>(
        &self,
        statistic: &'static str,
        selector: &Selector,
        table: &'t ChatTable,
        f: impl FnOnce(&TableView<'t>) -> Result<T>,
    ) -> Outcome<T> {
        let view = table.select(selector);
        if view.is_empty() {
            log::debug!("{statistic}: no entries for {selector}");
            return Outcome::Empty;
        }
        isolate(statistic, || f(&view))
    }
}

impl Default for StatsEngine {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for StatsEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatsEngine")
            .field("config", &self.config)
            .field("stop_words", &self.stop_words.as_ref().map(StopWords::len))
            .finish_non_exhaustive()
    }
}

/// Builder for [`StatsEngine`].
pub struct StatsEngineBuilder {
    config: AnalysisConfig,
    stop_words: Option<StopWords>,
    urls: Box<dyn UrlFinder>,
    emojis: Box<dyn EmojiCatalog>,
}

impl Default for StatsEngineBuilder {
    fn default() -> Self {
        Self {
            config: AnalysisConfig::default(),
            stop_words: None,
            urls: Box::new(LinkifyUrlFinder::new()),
            emojis: Box::new(UnicodeEmojiCatalog),
        }
    }
}

impl StatsEngineBuilder {
    #[must_use]
    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = Some(stop_words);
        self
    }

    /// Loads the stop-word list from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::StopWordsUnavailable`] if the file cannot be read.
    pub fn load_stop_words(self, path: impl AsRef<Path>) -> Result<Self> {
        Ok(self.with_stop_words(StopWords::load(path)?))
    }

    /// Replaces the URL finder.
    #[must_use]
    pub fn with_url_finder(mut self, urls: impl UrlFinder + 'static) -> Self {
        self.urls = Box::new(urls);
        self
    }

    /// Replaces the emoji catalog.
    #[must_use]
    pub fn with_emoji_catalog(mut self, emojis: impl EmojiCatalog + 'static) -> Self {
        self.emojis = Box::new(emojis);
        self
    }

    pub fn build(self) -> StatsEngine {
        StatsEngine {
            config: self.config,
            stop_words: self.stop_words,
            urls: self.urls,
            emojis: self.emojis,
        }
    }
}

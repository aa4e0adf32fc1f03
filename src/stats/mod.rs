//! Statistics over a parsed chat.
//!
//! The [`StatsEngine`] is the entry point. The free functions in the
//! submodules take an already selected [`TableView`](crate::table::TableView)
//! and can be used directly when fault isolation is not wanted.
//!
//! - [`summary`] - message, word, media and link counts
//! - [`users`] - busiest authors and message shares
//! - [`timeline`] - monthly and daily counts
//! - [`activity`] - weekday and month maps, weekday x hour heatmap
//! - [`words`] - stop words, common words, word-cloud text
//! - [`emoji`] - emoji scanning and frequency
//! - [`links`] - URL recognition

pub mod activity;
pub mod emoji;
pub mod engine;
pub mod frequency;
pub mod links;
pub mod outcome;
pub mod summary;
pub mod timeline;
pub mod users;
pub mod words;

pub use activity::Heatmap;
pub use emoji::{EmojiCatalog, EmojiSet, UnicodeEmojiCatalog, scan_emojis};
pub use engine::{StatsEngine, StatsEngineBuilder};
pub use frequency::FrequencyTable;
pub use links::{LinkifyUrlFinder, UrlFinder};
pub use outcome::Outcome;
pub use summary::MessageSummary;
pub use timeline::{DailyPoint, MonthlyPoint};
pub use users::{BusyUsers, UserShare};
pub use words::StopWords;

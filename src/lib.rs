//! # Chatstats
//!
//! A Rust library for turning a WhatsApp chat export into a typed table of
//! messages and computing descriptive statistics over it.
//!
//! ## Overview
//!
//! The pipeline has three stages:
//! - **Segmenting** - every `D/M/YY, HH:MM - ` marker starts a message; a
//!   body runs until the next marker, newlines included
//! - **Building** - each segment becomes an [`Entry`] with author, trimmed
//!   body, timestamp and derived calendar fields
//! - **Statistics** - the [`StatsEngine`](stats::StatsEngine) aggregates a
//!   [`Selector`] of the [`ChatTable`] into counts, frequency tables,
//!   timelines and a weekday x hour heatmap
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let table = ChatTable::parse(
//!         "1/1/24, 09:00 - Alice: hello world\n\
//!          1/1/24, 09:05 - Bob: <Media omitted>\n\
//!          1/1/24, 09:10 - Alice: hi",
//!     )?;
//!     assert_eq!(table.len(), 3);
//!
//!     let engine = StatsEngine::builder()
//!         .with_stop_words(StopWords::from_text("the a an"))
//!         .build();
//!
//!     let report = Report::build(&engine, &Selector::Overall, &table);
//!     let summary = report.summary.into_value();
//!     assert_eq!(summary.words, 3);
//!     assert_eq!(summary.media, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Failure handling
//!
//! - A document without any message marker fails with
//!   [`ChatstatsError::NoMarkers`]; [`ChatTable::parse_lenient`] turns that
//!   into an empty table.
//! - An unparsable timestamp keeps the entry with no calendar fields.
//! - Every statistic returns an [`Outcome`](stats::Outcome), so an empty
//!   selection and a failed computation stay distinguishable.
//!
//! ## Module Structure
//!
//! - [`parsing`] - segmenter and record builder
//! - [`table`] - [`ChatTable`] and its borrowed [`TableView`](table::TableView)
//! - [`entry`] - [`Entry`] and its derived [`Calendar`](entry::Calendar)
//! - [`core`] - selection ([`core::filter`]) and writers ([`core::output`])
//! - [`stats`] - the statistics engine
//! - [`report`] - every statistic for one selection
//! - [`format`] - text and JSON rendering
//! - [`config`] - [`AnalysisConfig`](config::AnalysisConfig) and defaults
//! - [`error`] - [`ChatstatsError`] and [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod entry;
pub mod error;
pub mod format;
pub mod parsing;
pub mod report;
pub mod stats;
pub mod table;

// Re-export the main types at the crate root for convenience
pub use crate::core::filter::Selector;
pub use entry::Entry;
pub use error::{ChatstatsError, Result};
pub use table::ChatTable;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{ChatTable, Entry, Selector};

    pub use crate::error::{ChatstatsError, Result};

    pub use crate::config::AnalysisConfig;

    pub use crate::core::filter::{apply_selector, author_choices};

    pub use crate::stats::{FrequencyTable, Outcome, StatsEngine, StopWords};

    pub use crate::report::Report;

    pub use crate::format::OutputFormat;

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};
}

//! Output format writers.
//!
//! - [`write_json`] / [`to_json`] - a [`Report`](crate::report::Report) as JSON - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - the parsed table as CSV, semicolon delimited - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::core::output::{to_json, write_csv};
//! use chatstats::prelude::*;
//!
//! let text = std::fs::read_to_string("chat.txt")?;
//! let table = ChatTable::parse(&text)?;
//!
//! write_csv(&table, "chat.csv")?;
//!
//! let engine = StatsEngine::default();
//! let report = Report::build(&engine, &Selector::Overall, &table);
//! println!("{}", to_json(&report)?);
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};

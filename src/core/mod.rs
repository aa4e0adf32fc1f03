//! Selection and output.
//!
//! This module contains:
//! - [`filter`] - Picking one author or every entry
//! - [`output`] - Format writers (JSON report, CSV table)

pub mod filter;
pub mod output;

pub use filter::{Selector, apply_selector, author_choices};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};

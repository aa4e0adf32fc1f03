//! Parsing of WhatsApp text exports.
//!
//! - [`segmenter`] - finds message markers and yields raw segments
//! - [`builder`] - turns segments into typed [`Entry`](crate::Entry) rows

pub mod builder;
pub mod segmenter;

pub use builder::{build_entry, parse_timestamp, split_author};
pub use segmenter::{MARKER_PATTERN, RawSegment, Segmenter, Segments};

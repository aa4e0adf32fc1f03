//! Turns raw segments into [`Entry`] rows.
//!
//! For each segment the builder:
//! 1. parses the `date, time` string with the configured chrono format
//!    (a failure keeps the row with no timestamp),
//! 2. splits `name: body` at the first colon followed by whitespace
//!    (no such colon means a notification, attributed to the system sentinel),
//! 3. trims the body and derives the calendar fields.
//!
//! The split is a heuristic: a notification whose text happens to contain
//! `word: ` is attributed to `word`. Exports carry no other delimiter, so
//! this ambiguity is kept.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::config::AnalysisConfig;
use crate::entry::Entry;
use crate::parsing::segmenter::RawSegment;

/// Shortest prefix ending in a colon and whitespace.
static AUTHOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(.+?):\s").expect("author pattern is a valid regex"));

/// Parses a `date, time` string with `format`.
///
/// Returns `None` on any mismatch, including four-digit years under the
/// default two-digit-year format.
pub fn parse_timestamp(raw: &str, format: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, format).ok()
}

/// Splits a segment body into `(author, body)`.
///
/// Returns `None` when the text has no `name: ` prefix.
///
/// ```
/// use chatstats::parsing::split_author;
///
/// assert_eq!(split_author("Alice: hi: there"), Some(("Alice", "hi: there")));
/// assert_eq!(split_author("Bob added Carol"), None);
/// ```
pub fn split_author(text: &str) -> Option<(&str, &str)> {
    let caps = AUTHOR_REGEX.captures(text)?;
    let name = caps.get(1)?;
    let delimiter = caps.get(0)?;
    Some((name.as_str(), &text[delimiter.end()..]))
}

/// Builds one entry from a raw segment.
pub fn build_entry(segment: &RawSegment<'_>, config: &AnalysisConfig) -> Entry {
    let raw_ts = segment.timestamp();
    let timestamp = parse_timestamp(&raw_ts, &config.timestamp_format);
    if timestamp.is_none() {
        log::debug!("Unparsable timestamp '{}', keeping entry without date", raw_ts);
    }

    let text = segment.body.trim();
    match split_author(text) {
        Some((author, body)) => Entry::new(author, body.trim(), timestamp),
        None => Entry::new(config.system_author.as_str(), text, timestamp),
    }
}

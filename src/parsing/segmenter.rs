//! Splits an export into one raw segment per message marker.
//!
//! A marker is `D{1,2}/D{1,2}/D{2,4}, H{1,2}:MM - `. Everything between two
//! markers (or after the last one) is the body of the earlier message and
//! may span several lines. Text before the first marker is dropped.
//!
//! Supported layout:
//! - `15/01/24, 10:30 - Sender: Message`
//! - `15/01/24, 10:31 - Sender added Other` (notification, no `name: `)

use std::iter::Peekable;
use std::sync::LazyLock;

use regex::{CaptureMatches, Regex};

use crate::error::{ChatstatsError, Result};

/// Regex matching a message-start marker. Group 1 is the date, group 2 the time.
pub const MARKER_PATTERN: &str = r"(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2})\s-\s";

static MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MARKER_PATTERN).expect("marker pattern is a valid regex"));

/// Span of text belonging to one marker.
///
/// Nothing is trimmed or validated here: the date and time are the exact
/// captured digits and the body is the verbatim text up to the next marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSegment<'t> {
    /// Full marker text, including the trailing `" - "`.
    pub marker: &'t str,
    /// Captured date, e.g. `15/01/24`.
    pub date: &'t str,
    /// Captured time, e.g. `10:30`.
    pub time: &'t str,
    /// Text between this marker and the next one.
    pub body: &'t str,
}

impl RawSegment<'_> {
    /// Returns the `date, time` string handed to the timestamp parser.
    pub fn timestamp(&self) -> String {
        format!("{}, {}", self.date, self.time)
    }
}

/// Finds message markers in chat exports.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::Segmenter;
///
/// let text = "1/1/24, 09:00 - Alice: hello\nworld\n1/1/24, 09:05 - Bob: hi";
/// let segments: Vec<_> = Segmenter::new().segment(text)?.collect();
///
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].body, "Alice: hello\nworld\n");
/// assert_eq!(segments[1].timestamp(), "1/1/24, 09:05");
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Segmenter {
    regex: &'static Regex,
}

impl Segmenter {
    /// Creates a segmenter using the shared marker regex.
    pub fn new() -> Self {
        Self {
            regex: &MARKER_REGEX,
        }
    }

    /// Returns a lazy iterator over the segments of `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::NoMarkers`] if `text` contains no marker.
    pub fn segment<'t>(&self, text: &'t str) -> Result<Segments<'static, 't>> {
        if !self.regex.is_match(text) {
            return Err(ChatstatsError::NoMarkers);
        }

        Ok(Segments {
            text,
            captures: self.regex.captures_iter(text).peekable(),
        })
    }

    /// Counts markers in `text` without building segments.
    pub fn count_markers(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy sequence of [`RawSegment`]s, one per marker.
pub struct Segments<'r, 't> {
    text: &'t str,
    captures: Peekable<CaptureMatches<'r, 't>>,
}

impl<'t> Iterator for Segments<'_, 't> {
    type Item = RawSegment<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.captures.next()?;
        let marker = caps.get(0)?;

        // Body runs until the next marker starts
        let end = self
            .captures
            .peek()
            .and_then(|next| next.get(0))
            .map_or(self.text.len(), |m| m.start());

        Some(RawSegment {
            marker: marker.as_str(),
            date: caps.get(1)?.as_str(),
            time: caps.get(2)?.as_str(),
            body: &self.text[marker.end()..end],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<RawSegment<'_>> {
        Segmenter::new().segment(text).unwrap().collect()
    }

    #[test]
    fn test_single_marker() {
        let segs = collect("15/01/24, 10:30 - Alice: Hello");
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].date, "15/01/24");
        assert_eq!(segs[0].time, "10:30");
        assert_eq!(segs[0].marker, "15/01/24, 10:30 - ");
        assert_eq!(segs[0].body, "Alice: Hello");
    }

    #[test]
    fn test_multiline_body_is_kept() {
        let segs = collect("1/1/24, 9:00 - Alice: line one\nline two\n\n1/1/24, 9:01 - Bob: x");
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].body, "Alice: line one\nline two\n\n");
        assert_eq!(segs[1].body, "Bob: x");
    }

    #[test]
    fn test_preamble_is_discarded() {
        let segs = collect("Chat export header\n1/1/24, 9:00 - Alice: hi");
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].body, "Alice: hi");
    }

    #[test]
    fn test_adjacent_markers_yield_empty_body() {
        let segs = collect("1/1/24, 9:00 - 1/1/24, 9:01 - Bob: x");
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].body, "");
        assert_eq!(segs[1].body, "Bob: x");
    }

    #[test]
    fn test_no_markers_is_error() {
        let err = Segmenter::new().segment("just some text").err().unwrap();
        assert!(err.is_no_markers());
        assert!(Segmenter::new().segment("").is_err());
    }

    #[test]
    fn test_four_digit_year_is_captured_verbatim() {
        let segs = collect("15/01/2024, 10:30 - Alice: Hello");
        assert_eq!(segs[0].date, "15/01/2024");
        assert_eq!(segs[0].timestamp(), "15/01/2024, 10:30");
    }

    #[test]
    fn test_bracketed_layout_is_not_a_marker() {
        assert_eq!(
            Segmenter::new().count_markers("[15/01/24, 10:30:45] Alice: Hello"),
            0
        );
    }

    #[test]
    fn test_count_markers_matches_segments() {
        let text = "1/1/24, 9:00 - a: 1\n1/1/24, 9:01 - b: 2\n1/1/24, 9:02 - c: 3";
        assert_eq!(Segmenter::new().count_markers(text), 3);
        assert_eq!(collect(text).len(), 3);
    }
}

//! Emoji recognition in message bodies.
//!
//! Scanning is longest-match: at every position the scanner tries the
//! longest candidate the catalog could know first, so a ZWJ family or a
//! flag counts as one emoji instead of several pieces.

use std::collections::HashSet;

use crate::config::AnalysisConfig;
use crate::stats::frequency::FrequencyTable;
use crate::table::TableView;

/// A set of known emoji sequences.
pub trait EmojiCatalog {
    /// Returns `true` if `candidate` is exactly one known emoji.
    fn contains(&self, candidate: &str) -> bool;

    /// Longest known sequence, in chars.
    fn max_sequence_len(&self) -> usize;
}

/// [`EmojiCatalog`] backed by the Unicode emoji list of the `emojis` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeEmojiCatalog;

// Kiss with two skin tones is the longest fully-qualified sequence
const UNICODE_MAX_SEQUENCE: usize = 10;

impl EmojiCatalog for UnicodeEmojiCatalog {
    fn contains(&self, candidate: &str) -> bool {
        let Some(first) = candidate.chars().next() else {
            return false;
        };
        // Only keycap bases start an emoji inside ASCII
        if first.is_ascii() && !matches!(first, '#' | '*' | '0'..='9') {
            return false;
        }
        emojis::get(candidate).is_some()
    }

    fn max_sequence_len(&self) -> usize {
        UNICODE_MAX_SEQUENCE
    }
}

/// [`EmojiCatalog`] over an explicit set of sequences.
///
/// ```
/// use chatstats::stats::{EmojiSet, scan_emojis};
///
/// let set: EmojiSet = ["🙂", "👍", "👍🏽"].into_iter().collect();
/// assert_eq!(scan_emojis("ok 👍🏽🙂", &set), vec!["👍🏽", "🙂"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmojiSet {
    sequences: HashSet<String>,
    max_len: usize,
}

impl EmojiSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, sequence: impl Into<String>) {
        let sequence = sequence.into();
        self.max_len = self.max_len.max(sequence.chars().count());
        self.sequences.insert(sequence);
    }
}

impl<S: Into<String>> FromIterator<S> for EmojiSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = EmojiSet::new();
        for sequence in iter {
            set.insert(sequence);
        }
        set
    }
}

impl EmojiCatalog for EmojiSet {
    fn contains(&self, candidate: &str) -> bool {
        self.sequences.contains(candidate)
    }

    fn max_sequence_len(&self) -> usize {
        self.max_len
    }
}

/// Returns every emoji in `text`, left to right.
pub fn scan_emojis<'t>(text: &'t str, catalog: &dyn EmojiCatalog) -> Vec<&'t str> {
    // Byte offset of every char boundary, including the end
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let chars = bounds.len() - 1;
    let max_len = catalog.max_sequence_len();

    let mut found = Vec::new();
    let mut pos = 0;
    while pos < chars {
        let longest = max_len.min(chars - pos);
        let hit = (1..=longest)
            .rev()
            .map(|len| (len, &text[bounds[pos]..bounds[pos + len]]))
            .find(|(_, candidate)| catalog.contains(candidate));

        match hit {
            Some((len, emoji)) => {
                found.push(emoji);
                pos += len;
            }
            None => pos += 1,
        }
    }
    found
}

/// Counts every emoji sent in `view`, busiest first.
///
/// Notification rows are skipped.
pub fn emoji_frequency(
    view: &TableView<'_>,
    config: &AnalysisConfig,
    catalog: &dyn EmojiCatalog,
) -> FrequencyTable {
    FrequencyTable::count(
        view.iter()
            .filter(|e| !config.is_system(e.author()))
            .flat_map(|e| scan_emojis(e.body(), catalog)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChatTable;
    use crate::entry::Entry;

    #[test]
    fn test_unicode_catalog_basic() {
        let found = scan_emojis("haha 😂😂 nice 👍", &UnicodeEmojiCatalog);
        assert_eq!(found, vec!["😂", "😂", "👍"]);
    }

    #[test]
    fn test_unicode_catalog_plain_text() {
        assert!(scan_emojis("no emoji here, just text: 123", &UnicodeEmojiCatalog).is_empty());
        assert!(scan_emojis("", &UnicodeEmojiCatalog).is_empty());
    }

    #[test]
    fn test_longest_match_wins() {
        let set: EmojiSet = ["👨", "👩", "👧", "👨\u{200D}👩\u{200D}👧"].into_iter().collect();
        let found = scan_emojis("family: 👨\u{200D}👩\u{200D}👧!", &set);
        assert_eq!(found, vec!["👨\u{200D}👩\u{200D}👧"]);
    }

    #[test]
    fn test_partial_sequence_falls_back() {
        let set: EmojiSet = ["👨", "👩", "👨\u{200D}👩\u{200D}👧"].into_iter().collect();
        // The girl is missing, so the pieces are matched separately
        let found = scan_emojis("👨\u{200D}👩", &set);
        assert_eq!(found, vec!["👨", "👩"]);
    }

    #[test]
    fn test_empty_set_finds_nothing() {
        assert!(scan_emojis("😂", &EmojiSet::new()).is_empty());
    }

    #[test]
    fn test_max_len_tracks_longest() {
        let set: EmojiSet = ["a", "abc"].into_iter().collect();
        assert_eq!(set.max_sequence_len(), 3);
    }

    #[test]
    fn test_emoji_frequency_skips_notifications() {
        let table = ChatTable::from_entries(vec![
            Entry::new("Alice", "😂 lol 😂", None),
            Entry::new("group_notification", "😂😂😂", None),
            Entry::new("Bob", "👍😂", None),
        ]);
        let set: EmojiSet = ["😂", "👍"].into_iter().collect();
        let freq = emoji_frequency(&table.view(), &AnalysisConfig::default(), &set);
        assert_eq!(freq.entries(), &[("😂".to_string(), 3), ("👍".to_string(), 1)]);
    }
}

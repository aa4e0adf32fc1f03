//! The in-memory table of parsed entries.
//!
//! A [`ChatTable`] owns every [`Entry`] of one export, in the order the
//! messages appear in the text. It is built once and never mutated; the
//! filter layer hands out [`TableView`]s that borrow from it.
//!
//! # Example
//!
//! ```rust
//! use chatstats::{ChatTable, Selector};
//!
//! let text = "1/1/24, 09:00 - Alice: hello world\n\
//!             1/1/24, 09:05 - Bob: <Media omitted>\n\
//!             1/1/24, 09:10 - Alice: hi";
//! let table = ChatTable::parse(text)?;
//!
//! assert_eq!(table.len(), 3);
//! assert_eq!(table.select(&Selector::author("Alice")).len(), 2);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::collections::HashSet;

use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::core::filter::{Selector, apply_selector};
use crate::entry::Entry;
use crate::error::Result;
use crate::parsing::{Segmenter, build_entry};

/// Ordered collection of entries parsed from one export.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatTable {
    entries: Vec<Entry>,
}

impl ChatTable {
    /// Parses `text` with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::NoMarkers`](crate::ChatstatsError::NoMarkers)
    /// if the text contains no message markers.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, &AnalysisConfig::default())
    }

    /// Parses `text` with a custom configuration.
    pub fn parse_with(text: &str, config: &AnalysisConfig) -> Result<Self> {
        let segments = Segmenter::new().segment(text)?;
        let entries: Vec<Entry> = segments.map(|seg| build_entry(&seg, config)).collect();

        let undated = entries.iter().filter(|e| e.timestamp().is_none()).count();
        log::info!(
            "Parsed {} entries ({} without a valid timestamp)",
            entries.len(),
            undated
        );

        Ok(Self { entries })
    }

    /// Parses `text`, falling back to an empty table when no marker is found.
    ///
    /// The failure is logged as a warning, which is what the presentation
    /// layer surfaces to the user.
    pub fn parse_lenient(text: &str, config: &AnalysisConfig) -> Self {
        match Self::parse_with(text, config) {
            Ok(table) => table,
            Err(e) => {
                log::warn!("{e}; continuing with an empty table");
                Self::default()
            }
        }
    }

    /// Wraps already-built entries.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all entries in source order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterates over entries in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Returns distinct authors in order of first appearance.
    pub fn authors(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(Entry::author)
            .filter(|author| seen.insert(*author))
            .collect()
    }

    /// Returns a view with every entry.
    pub fn view(&self) -> TableView<'_> {
        TableView {
            entries: self.entries.iter().collect(),
        }
    }

    /// Returns the view selected by `selector`. See [`apply_selector`].
    pub fn select(&self, selector: &Selector) -> TableView<'_> {
        apply_selector(self, selector)
    }
}

impl<'a> IntoIterator for &'a ChatTable {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Read-only subset of a [`ChatTable`], in source order.
#[derive(Debug, Clone, Default)]
pub struct TableView<'a> {
    entries: Vec<&'a Entry>,
}

impl<'a> TableView<'a> {
    pub(crate) fn from_refs(entries: Vec<&'a Entry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the selected entries.
    pub fn iter(&self) -> impl Iterator<Item = &'a Entry> + '_ {
        self.entries.iter().copied()
    }

    pub fn entries(&self) -> &[&'a Entry] {
        &self.entries
    }
}

//! Select the entries of one author, or all of them.
//!
//! This module provides [`Selector`] for naming the subset and
//! [`apply_selector`] for producing a [`TableView`] from a [`ChatTable`].
//!
//! # Examples
//!
//! ```
//! use chatstats::core::filter::{Selector, apply_selector, author_choices};
//! use chatstats::config::AnalysisConfig;
//! use chatstats::ChatTable;
//!
//! # fn main() -> chatstats::Result<()> {
//! let table = ChatTable::parse(
//!     "1/1/24, 09:00 - Bob: hi\n1/1/24, 09:01 - Bob added Carol\n1/1/24, 09:02 - Alice: yo",
//! )?;
//!
//! let only_bob = apply_selector(&table, &Selector::author("Bob"));
//! assert_eq!(only_bob.len(), 1);
//!
//! let choices = author_choices(&table, &AnalysisConfig::default());
//! assert_eq!(choices, vec!["Overall", "Alice", "Bob"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Author matching is exact (case-sensitive)
//! - The source table is never modified
//! - An author absent from the table selects an empty view

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, OVERALL};
use crate::table::{ChatTable, TableView};

/// Which entries a statistic looks at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selector {
    /// Every entry, notifications included.
    #[default]
    Overall,
    /// Entries whose author equals the name exactly.
    Author(String),
}

impl Selector {
    /// Creates a selector for one author.
    ///
    /// The label `Overall` is not special here; use [`Selector::from_label`]
    /// to parse user input.
    pub fn author(name: impl Into<String>) -> Self {
        Selector::Author(name.into())
    }

    /// Parses a label, mapping `overall_label` to [`Selector::Overall`].
    pub fn from_label(label: &str, overall_label: &str) -> Self {
        if label == overall_label {
            Selector::Overall
        } else {
            Selector::Author(label.to_string())
        }
    }

    /// Returns `true` for [`Selector::Overall`].
    pub fn is_overall(&self) -> bool {
        matches!(self, Selector::Overall)
    }

    /// Returns `true` if `author` belongs to this selection.
    pub fn matches(&self, author: &str) -> bool {
        match self {
            Selector::Overall => true,
            Selector::Author(name) => name == author,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Overall => f.write_str(OVERALL),
            Selector::Author(name) => f.write_str(name),
        }
    }
}

impl FromStr for Selector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Selector::from_label(s, OVERALL))
    }
}

impl From<String> for Selector {
    fn from(s: String) -> Self {
        Selector::from_label(&s, OVERALL)
    }
}

impl From<Selector> for String {
    fn from(selector: Selector) -> Self {
        selector.to_string()
    }
}

/// Returns the entries of `table` that `selector` names, in source order.
///
/// [`Selector::Overall`] yields every entry.
pub fn apply_selector<'a>(table: &'a ChatTable, selector: &Selector) -> TableView<'a> {
    if selector.is_overall() {
        return table.view();
    }

    TableView::from_refs(
        table
            .iter()
            .filter(|entry| selector.matches(entry.author()))
            .collect(),
    )
}

/// Returns the labels a user can pick from.
///
/// Distinct authors without the system sentinel, sorted ascending, with the
/// overall label first.
pub fn author_choices(table: &ChatTable, config: &AnalysisConfig) -> Vec<String> {
    let mut authors: Vec<&str> = table
        .authors()
        .into_iter()
        .filter(|author| !config.is_system(author))
        .collect();
    authors.sort_unstable();

    std::iter::once(config.overall_label.clone())
        .chain(authors.into_iter().map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;

    fn table() -> ChatTable {
        ChatTable::from_entries(vec![
            Entry::new("Alice", "Hello", None),
            Entry::new("Bob", "Hi", None),
            Entry::new("group_notification", "Bob added Carol", None),
            Entry::new("alice", "lowercase", None),
            Entry::new("Alice", "Bye", None),
        ])
    }

    #[test]
    fn test_overall_keeps_everything() {
        let table = table();
        let view = apply_selector(&table, &Selector::Overall);
        assert_eq!(view.len(), 5);
    }

    #[test]
    fn test_author_exact_match() {
        let table = table();
        let view = apply_selector(&table, &Selector::author("Alice"));
        let bodies: Vec<_> = view.iter().map(Entry::body).collect();
        assert_eq!(bodies, vec!["Hello", "Bye"]);
    }

    #[test]
    fn test_unknown_author_is_empty() {
        let table = table();
        assert!(apply_selector(&table, &Selector::author("Mallory")).is_empty());
    }

    #[test]
    fn test_source_table_untouched() {
        let table = table();
        let before = table.clone();
        let _ = apply_selector(&table, &Selector::author("Bob"));
        assert_eq!(table, before);
    }

    #[test]
    fn test_author_choices() {
        let choices = author_choices(&table(), &AnalysisConfig::default());
        assert_eq!(choices, vec!["Overall", "Alice", "Bob", "alice"]);
    }

    #[test]
    fn test_author_choices_empty_table() {
        let choices = author_choices(&ChatTable::default(), &AnalysisConfig::default());
        assert_eq!(choices, vec!["Overall"]);
    }

    #[test]
    fn test_selector_from_str() {
        assert_eq!("Overall".parse::<Selector>().unwrap(), Selector::Overall);
        assert_eq!(
            "Alice".parse::<Selector>().unwrap(),
            Selector::author("Alice")
        );
        assert_eq!(Selector::Overall.to_string(), "Overall");
    }

    #[test]
    fn test_selector_serde() {
        let json = serde_json::to_string(&Selector::author("Bob")).unwrap();
        assert_eq!(json, "\"Bob\"");
        let parsed: Selector = serde_json::from_str("\"Overall\"").unwrap();
        assert_eq!(parsed, Selector::Overall);
    }
}

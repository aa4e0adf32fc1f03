//! Ordered label/count tables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Label counts sorted by descending count.
///
/// Labels with equal counts keep the order in which they were first seen,
/// so results are deterministic for a given input.
///
/// # Example
///
/// ```
/// use chatstats::stats::FrequencyTable;
///
/// let table = FrequencyTable::count(["b", "a", "b", "c", "a", "b"]);
/// assert_eq!(table.entries(), &[
///     ("b".to_string(), 3),
///     ("a".to_string(), 2),
///     ("c".to_string(), 1),
/// ]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    /// Counts occurrences of each item.
    pub fn count<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<(String, usize)> = Vec::new();

        for item in items {
            let key = item.as_ref();
            match index.get(key) {
                Some(&i) => entries[i].1 += 1,
                None => {
                    index.insert(key.to_string(), entries.len());
                    entries.push((key.to_string(), 1));
                }
            }
        }

        // Stable: ties stay in first-seen order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    /// Keeps the first `n` rows.
    #[must_use]
    pub fn top(mut self, n: usize) -> Self {
        self.entries.truncate(n);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the `(label, count)` rows.
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(label, count)| (label.as_str(), *count))
    }

    /// Returns the count for `label`, or 0.
    pub fn get(&self, label: &str) -> usize {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map_or(0, |(_, c)| *c)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Returns the highest-count row.
    pub fn first(&self) -> Option<(&str, usize)> {
        self.iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_sorts_descending() {
        let table = FrequencyTable::count(["x", "y", "y"]);
        assert_eq!(table.first(), Some(("y", 2)));
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let table = FrequencyTable::count(["c", "a", "b", "a", "b", "c"]);
        let labels: Vec<_> = table.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_top_truncates() {
        let table = FrequencyTable::count(["a", "b", "c", "d"]).top(2);
        assert_eq!(table.len(), 2);
        assert_eq!(FrequencyTable::count(["a"]).top(5).len(), 1);
    }

    #[test]
    fn test_get_missing_is_zero() {
        let table = FrequencyTable::count(["a"]);
        assert_eq!(table.get("a"), 1);
        assert_eq!(table.get("zzz"), 0);
    }

    #[test]
    fn test_empty() {
        let table = FrequencyTable::count(Vec::<String>::new());
        assert!(table.is_empty());
        assert_eq!(table.first(), None);
    }

    #[test]
    fn test_serializes_as_pairs() {
        let table = FrequencyTable::count(["a", "a", "b"]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"[["a",2],["b",1]]"#);
    }
}

//! Who talks the most.

use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::stats::frequency::FrequencyTable;
use crate::table::TableView;

/// Share of all messages sent by one author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserShare {
    pub name: String,
    /// Percentage in `0.0..=100.0`, unrounded.
    pub percent: f64,
}

/// Busiest authors of a selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusyUsers {
    /// Top authors by message count.
    pub top: FrequencyTable,
    /// Every author with their share, descending.
    pub shares: Vec<UserShare>,
}

/// Ranks authors in `view`; `top_n` bounds [`BusyUsers::top`].
///
/// Every author is counted, the notification sentinel included.
pub fn most_busy_users(view: &TableView<'_>, top_n: usize) -> BusyUsers {
    let counts = FrequencyTable::count(view.iter().map(Entry::author));
    let total = counts.total();

    let shares = counts
        .iter()
        .map(|(name, count)| UserShare {
            name: name.to_string(),
            percent: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            },
        })
        .collect();

    BusyUsers {
        top: counts.top(top_n),
        shares,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChatTable;

    fn table(authors: &[&str]) -> ChatTable {
        ChatTable::from_entries(authors.iter().map(|a| Entry::new(*a, "x", None)).collect())
    }

    #[test]
    fn test_most_busy_users() {
        let table = table(&["Alice", "Bob", "Alice"]);
        let busy = most_busy_users(&table.view(), 5);

        assert_eq!(busy.top.first(), Some(("Alice", 2)));
        assert_eq!(busy.shares[0].name, "Alice");
        assert!((busy.shares[0].percent - 66.666).abs() < 0.01);
        assert!((busy.shares[1].percent - 33.333).abs() < 0.01);
    }

    #[test]
    fn test_top_is_bounded_but_shares_are_not() {
        let table = table(&["a", "b", "c", "d", "e", "f", "g"]);
        let busy = most_busy_users(&table.view(), 5);
        assert_eq!(busy.top.len(), 5);
        assert_eq!(busy.shares.len(), 7);
        let total: f64 = busy.shares.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_view() {
        let table = ChatTable::default();
        let busy = most_busy_users(&table.view(), 5);
        assert_eq!(busy, BusyUsers::default());
    }
}

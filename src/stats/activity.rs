//! Weekday, month and hour-of-week activity.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::entry::{period_label, weekday_name};
use crate::stats::frequency::FrequencyTable;
use crate::table::TableView;

/// Messages per weekday name, busiest first.
pub fn week_activity_map(view: &TableView<'_>) -> FrequencyTable {
    FrequencyTable::count(
        view.iter()
            .filter_map(|e| e.calendar())
            .map(|cal| cal.day_name.as_str()),
    )
}

/// Messages per month name, busiest first.
pub fn month_activity_map(view: &TableView<'_>) -> FrequencyTable {
    FrequencyTable::count(
        view.iter()
            .filter_map(|e| e.calendar())
            .map(|cal| cal.month_name.as_str()),
    )
}

/// Weekday x hour-bucket message counts.
///
/// Only weekdays and buckets that occur in the data get a row or column;
/// rows run Monday to Sunday and columns by hour. Combinations with no
/// message hold 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heatmap {
    /// Row labels, e.g. `Monday`.
    pub days: Vec<String>,
    /// Column labels, e.g. `14-15`.
    pub periods: Vec<String>,
    /// `counts[row][column]`.
    pub counts: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Returns the count at (`day`, `period`), or 0 if either label is absent.
    pub fn get(&self, day: &str, period: &str) -> usize {
        let row = self.days.iter().position(|d| d == day);
        let col = self.periods.iter().position(|p| p == period);
        match (row, col) {
            (Some(r), Some(c)) => self.counts[r][c],
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Sum of every cell.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

/// Pivots message counts by weekday and hour bucket.
pub fn activity_heatmap(view: &TableView<'_>) -> Heatmap {
    // Keyed by (days from Monday, hour) for ordering
    let mut cells: BTreeMap<(u32, u32), usize> = BTreeMap::new();
    for cal in view.iter().filter_map(|e| e.calendar()) {
        let day = cal.date.weekday().num_days_from_monday();
        *cells.entry((day, cal.hour)).or_default() += 1;
    }

    let mut day_keys: Vec<u32> = cells.keys().map(|(d, _)| *d).collect();
    day_keys.dedup();
    let mut hour_keys: Vec<u32> = cells.keys().map(|(_, h)| *h).collect();
    hour_keys.sort_unstable();
    hour_keys.dedup();

    let counts = day_keys
        .iter()
        .map(|d| {
            hour_keys
                .iter()
                .map(|h| cells.get(&(*d, *h)).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    Heatmap {
        days: day_keys
            .iter()
            .filter_map(|d| u8::try_from(*d).ok())
            .filter_map(|d| chrono::Weekday::try_from(d).ok())
            .map(|w| weekday_name(w).to_string())
            .collect(),
        periods: hour_keys.iter().map(|h| period_label(*h)).collect(),
        counts,
    }
}

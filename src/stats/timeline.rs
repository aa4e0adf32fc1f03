//! Message counts over time.
//!
//! Rows without a parsed timestamp have nothing to group by and are left
//! out of both timelines.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entry::month_name;
use crate::table::TableView;

/// Messages sent in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    /// `MonthName-Year`, e.g. `January-2024`.
    pub label: String,
    pub count: usize,
}

/// Messages sent on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub count: usize,
}

/// Counts per month, oldest first.
pub fn monthly_timeline(view: &TableView<'_>) -> Vec<MonthlyPoint> {
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for cal in view.iter().filter_map(|e| e.calendar()) {
        *months.entry((cal.year, cal.month)).or_default() += 1;
    }

    months
        .into_iter()
        .map(|((year, month), count)| {
            let name = month_name(month);
            MonthlyPoint {
                year,
                month,
                month_name: name.to_string(),
                label: format!("{name}-{year}"),
                count,
            }
        })
        .collect()
}

/// Counts per day, oldest first.
pub fn daily_timeline(view: &TableView<'_>) -> Vec<DailyPoint> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for cal in view.iter().filter_map(|e| e.calendar()) {
        *days.entry(cal.date).or_default() += 1;
    }

    days.into_iter()
        .map(|(date, count)| DailyPoint { date, count })
        .collect()
}

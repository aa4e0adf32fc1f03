//! Typed rows of a parsed chat export.
//!
//! An [`Entry`] is one message: who sent it, what it said, and when. The
//! calendar fields every statistic groups by (year, month, weekday, hour
//! bucket, ...) are derived once at construction and stored in a
//! [`Calendar`], so a row whose timestamp failed to parse simply has no
//! calendar instead of a set of individually-null columns.
//!
//! # Example
//!
//! ```
//! use chatstats::Entry;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(23, 15, 0)
//!     .unwrap();
//! let entry = Entry::new("Alice", "hello", Some(ts));
//!
//! let cal = entry.calendar().unwrap();
//! assert_eq!(cal.day_name, "Monday");
//! assert_eq!(cal.period, "23-0");
//! ```

use chrono::{Datelike, Month, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Calendar fields derived from a message timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Calendar {
    /// Calendar date with the time dropped.
    pub date: NaiveDate,
    pub year: i32,
    /// Month number, 1-12.
    pub month: u32,
    /// English month name, e.g. `January`.
    pub month_name: String,
    /// Day of the month, 1-31.
    pub day: u32,
    /// English weekday name, e.g. `Monday`.
    pub day_name: String,
    /// Hour, 0-23.
    pub hour: u32,
    pub minute: u32,
    /// Hour bucket label, `"{hour}-{(hour + 1) % 24}"`.
    pub period: String,
}

impl Calendar {
    /// Derives every calendar field from `ts`.
    pub fn from_timestamp(ts: NaiveDateTime) -> Self {
        let hour = ts.hour();
        Self {
            date: ts.date(),
            year: ts.year(),
            month: ts.month(),
            month_name: month_name(ts.month()).to_string(),
            day: ts.day(),
            day_name: weekday_name(ts.weekday()).to_string(),
            hour,
            minute: ts.minute(),
            period: period_label(hour),
        }
    }

    /// Label used by the monthly timeline, e.g. `January-2024`.
    pub fn month_label(&self) -> String {
        format!("{}-{}", self.month_name, self.year)
    }
}

/// One message of a chat export.
///
/// Author and body are always present. The timestamp is `None` when the
/// raw date string could not be parsed, and then so is the calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    author: String,
    body: String,
    timestamp: Option<NaiveDateTime>,
    calendar: Option<Calendar>,
}

impl Entry {
    /// Creates an entry and derives its calendar from `timestamp`.
    pub fn new(
        author: impl Into<String>,
        body: impl Into<String>,
        timestamp: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
            calendar: timestamp.map(Calendar::from_timestamp),
            timestamp,
        }
    }

    /// Returns the author name, or the system sentinel for notifications.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the trimmed message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the parsed timestamp, if any.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }

    /// Returns the derived calendar fields, if the timestamp parsed.
    pub fn calendar(&self) -> Option<&Calendar> {
        self.calendar.as_ref()
    }

    /// Returns the number of whitespace-delimited tokens in the body.
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }
}

/// Formats the hour bucket that starts at `hour`, wrapping at midnight.
///
/// ```
/// use chatstats::entry::period_label;
///
/// assert_eq!(period_label(0), "0-1");
/// assert_eq!(period_label(23), "23-0");
/// ```
pub fn period_label(hour: u32) -> String {
    format!("{}-{}", hour, (hour + 1) % 24)
}

/// English name of a weekday.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// English name of a month number; empty for numbers outside 1-12.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or("", |m| m.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_entry_new_derives_calendar() {
        let entry = Entry::new("Alice", "hello world", Some(ts(2024, 3, 15, 14, 5)));
        let cal = entry.calendar().unwrap();

        assert_eq!(cal.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(cal.year, 2024);
        assert_eq!(cal.month, 3);
        assert_eq!(cal.month_name, "March");
        assert_eq!(cal.day, 15);
        assert_eq!(cal.day_name, "Friday");
        assert_eq!(cal.hour, 14);
        assert_eq!(cal.minute, 5);
        assert_eq!(cal.period, "14-15");
        assert_eq!(cal.month_label(), "March-2024");
    }

    #[test]
    fn test_entry_without_timestamp_has_no_calendar() {
        let entry = Entry::new("Alice", "hi", None);
        assert!(entry.timestamp().is_none());
        assert!(entry.calendar().is_none());
        assert_eq!(entry.author(), "Alice");
        assert_eq!(entry.body(), "hi");
    }

    #[test]
    fn test_period_label_wraps() {
        assert_eq!(period_label(0), "0-1");
        assert_eq!(period_label(9), "9-10");
        assert_eq!(period_label(23), "23-0");
    }

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(Entry::new("A", "hello   world\nagain", None).word_count(), 3);
        assert_eq!(Entry::new("A", "", None).word_count(), 0);
    }
}

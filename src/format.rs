//! Report output formats.
//!
//! These types carry no CLI dependency, so the rendering is usable from
//! library code as well.
//!
//! # Example
//!
//! ```rust
//! use chatstats::format::{OutputFormat, render};
//! use chatstats::prelude::*;
//!
//! # fn main() -> chatstats::Result<()> {
//! let table = ChatTable::parse("1/1/24, 09:00 - Alice: hello")?;
//! let report = Report::build(&StatsEngine::default(), &Selector::Overall, &table);
//!
//! let text = render(&report, OutputFormat::Text)?;
//! assert!(text.contains("Messages"));
//! # Ok(())
//! # }
//! ```

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::error::ChatstatsError;
use crate::report::Report;
use crate::stats::{FrequencyTable, Outcome};

/// How a [`Report`] is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Human-readable sections
    #[default]
    Text,

    /// Pretty-printed JSON with a status per statistic
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// ```rust
    /// use chatstats::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Text.extension(), "txt");
    /// assert_eq!(OutputFormat::Json.extension(), "json");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json"]
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::InvalidFormat`] for an unknown extension.
    pub fn from_path(path: &str) -> Result<Self, ChatstatsError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();
        ext.parse::<Self>().map_err(|message| ChatstatsError::InvalidFormat {
            format: "output",
            message,
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Renders a report in the given format.
///
/// # Errors
///
/// Returns an error if JSON is requested without the `json-output` feature,
/// or if serialization fails.
pub fn render(report: &Report, format: OutputFormat) -> Result<String, ChatstatsError> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(report),
        #[allow(unreachable_patterns)]
        _ => Err(ChatstatsError::InvalidFormat {
            format: "output",
            message: format!("Output format {format} requires the 'json-output' feature to be enabled"),
        }),
    }
}

/// Renders a report as plain text sections.
///
/// Statistics with no rows print `no data`; failed ones print the error.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &Report) -> fmt::Result {
    writeln!(out, "== Statistics for {} ==", report.selection)?;

    section(out, "Summary", &report.summary, |out, s| {
        writeln!(out, "  Messages: {}", s.messages)?;
        writeln!(out, "  Words:    {}", s.words)?;
        writeln!(out, "  Media:    {}", s.media)?;
        writeln!(out, "  Links:    {}", s.links)
    })?;

    section(out, "Monthly timeline", &report.monthly_timeline, |out, points| {
        points
            .iter()
            .try_for_each(|p| writeln!(out, "  {:<20} {}", p.label, p.count))
    })?;

    section(out, "Daily timeline", &report.daily_timeline, |out, points| {
        points
            .iter()
            .try_for_each(|p| writeln!(out, "  {} {}", p.date, p.count))
    })?;

    section(out, "Most busy day", &report.week_activity, write_frequency)?;
    section(out, "Most busy month", &report.month_activity, write_frequency)?;

    section(out, "Weekly activity map", &report.heatmap, |out, heatmap| {
        write!(out, "  {:<10}", "")?;
        for period in &heatmap.periods {
            write!(out, " {period:>5}")?;
        }
        writeln!(out)?;
        for (day, row) in heatmap.days.iter().zip(&heatmap.counts) {
            write!(out, "  {day:<10}")?;
            for count in row {
                write!(out, " {count:>5}")?;
            }
            writeln!(out)?;
        }
        Ok(())
    })?;

    if let Some(busy) = &report.busy_users {
        section(out, "Most busy users", busy, |out, busy| {
            for share in &busy.shares {
                writeln!(out, "  {:<20} {:>6.2}%", share.name, share.percent)?;
            }
            Ok(())
        })?;
    }

    section(out, "Word cloud", &report.wordcloud, |out, text| {
        writeln!(out, "  {text}")
    })?;
    section(out, "Most common words", &report.common_words, write_frequency)?;
    section(out, "Emoji analysis", &report.emojis, write_frequency)
}

fn section<T>(
    out: &mut String,
    title: &str,
    outcome: &Outcome<T>,
    body: impl FnOnce(&mut String, &T) -> fmt::Result,
) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    match outcome {
        Outcome::Ready(value) => body(out, value),
        Outcome::Empty => writeln!(out, "  no data"),
        Outcome::Failed(e) => writeln!(out, "  unavailable: {e}"),
    }
}

fn write_frequency(out: &mut String, table: &FrequencyTable) -> fmt::Result {
    table
        .iter()
        .try_for_each(|(label, count)| writeln!(out, "  {label:<20} {count}"))
}

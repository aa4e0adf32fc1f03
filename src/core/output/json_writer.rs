//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::report::Report;

/// Writes a report to a JSON file.
///
/// # Format
/// Every statistic is an object tagged with its status:
/// ```json
/// {
///   "selection": "Overall",
///   "summary": {"status": "ready", "data": {"messages": 3, "words": 3, "media": 1, "links": 0}},
///   "common_words": {"status": "failed", "error": "..."},
///   ...
/// }
/// ```
pub fn write_json(report: &Report, output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a report to a pretty-printed JSON string.
///
/// Same format as [`write_json`].
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

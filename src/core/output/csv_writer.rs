//! CSV output writer.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::entry::Entry;
use crate::error::Result;
use crate::table::ChatTable;

const HEADER: [&str; 12] = [
    "Timestamp", "Author", "Message", "Date", "Year", "Month", "Month_num", "Day", "Day_name",
    "Hour", "Minute", "Period",
];

/// Writes the parsed table to a CSV file.
///
/// # Format
/// - Delimiter: `;`
/// - One row per entry, in source order
/// - Calendar columns are empty for entries whose timestamp did not parse
/// - Encoding: UTF-8
pub fn write_csv(table: &ChatTable, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(table, file)
}

/// Converts the parsed table to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(table: &ChatTable) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(table, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

fn write_records(table: &ChatTable, out: impl Write) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(HEADER)?;
    for entry in table {
        writer.write_record(build_record(entry))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_record(entry: &Entry) -> Vec<String> {
    let mut record = vec![
        entry
            .timestamp()
            .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default(),
        entry.author().to_string(),
        entry.body().to_string(),
    ];

    match entry.calendar() {
        Some(cal) => record.extend([
            cal.date.to_string(),
            cal.year.to_string(),
            cal.month_name.clone(),
            cal.month.to_string(),
            cal.day.to_string(),
            cal.day_name.clone(),
            cal.hour.to_string(),
            cal.minute.to_string(),
            cal.period.clone(),
        ]),
        None => record.resize(HEADER.len(), String::new()),
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const CHAT: &str = "\
1/1/24, 23:15 - Alice: Hello; there
1/1/2024, 09:00 - Bob: undated";

    #[test]
    fn test_to_csv_rows() {
        let table = ChatTable::parse(CHAT).unwrap();
        let csv = to_csv(&table).unwrap();
        let mut lines = csv.lines();

        assert!(lines.next().unwrap().starts_with("Timestamp;Author;Message;Date"));
        assert_eq!(
            lines.next().unwrap(),
            "2024-01-01 23:15:00;Alice;\"Hello; there\";2024-01-01;2024;January;1;1;Monday;23;15;23-0"
        );
        assert_eq!(lines.next().unwrap(), ";Bob;undated;;;;;;;;;");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_write_csv_file() {
        let table = ChatTable::parse(CHAT).unwrap();
        let temp_file = NamedTempFile::new().unwrap();

        write_csv(&table, temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(content, to_csv(&table).unwrap());
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let csv = to_csv(&ChatTable::default()).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}

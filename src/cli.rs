//! Command-line interface definition using clap.
//!
//! [`Args`] describes the `chatstats` binary. The report format itself is
//! [`OutputFormat`](crate::format::OutputFormat), which derives
//! [`clap::ValueEnum`] when the `cli` feature is on.

use std::path::PathBuf;

use clap::Parser;

use crate::format::OutputFormat;

/// Stop-word file picked up from the working directory when `--stop-words`
/// is not given.
pub const DEFAULT_STOP_WORDS: &str = "stop_hinglish.txt";

/// Number of characters shown by `--preview`.
pub const PREVIEW_CHARS: usize = 1000;

/// Analyze a WhatsApp chat export: message counts, timelines, activity
/// maps, common words and emojis.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats chat.txt
    chatstats chat.txt --user Alice
    chatstats chat.txt --format json -o report.json
    chatstats chat.txt --list-users
    chatstats chat.txt --export-table chat.csv")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Analyze one author instead of everyone ("Overall")
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Stop-word list, whitespace separated [default: stop_hinglish.txt if present]
    #[arg(long, value_name = "PATH")]
    pub stop_words: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write the parsed table as CSV
    #[arg(long, value_name = "PATH")]
    pub export_table: Option<PathBuf>,

    /// Print the authors that can be selected and exit
    #[arg(long)]
    pub list_users: bool,

    /// Print the beginning of the raw export before the report
    #[arg(long)]
    pub preview: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Returns the stop-word file to load, if any.
    ///
    /// An explicit `--stop-words` always wins; otherwise
    /// [`DEFAULT_STOP_WORDS`] is used when it exists.
    pub fn stop_words_path(&self) -> Option<PathBuf> {
        self.stop_words.clone().or_else(|| {
            let default = PathBuf::from(DEFAULT_STOP_WORDS);
            default.is_file().then_some(default)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let args = Args::try_parse_from(["chatstats", "chat.txt"]).unwrap();
        assert_eq!(args.input, PathBuf::from("chat.txt"));
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.user.is_none());
        assert!(!args.list_users);
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "chatstats",
            "chat.txt",
            "--user",
            "Alice",
            "--stop-words",
            "stop.txt",
            "--format",
            "json",
            "-o",
            "report.json",
            "--export-table",
            "table.csv",
            "--preview",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.user.as_deref(), Some("Alice"));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.output, Some(PathBuf::from("report.json")));
        assert_eq!(args.export_table, Some(PathBuf::from("table.csv")));
        assert_eq!(args.stop_words_path(), Some(PathBuf::from("stop.txt")));
        assert!(args.preview);
        assert!(args.verbose);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Args::try_parse_from(["chatstats", "chat.txt", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_input_required() {
        assert!(Args::try_parse_from(["chatstats"]).is_err());
    }
}

//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::fs;
use std::process;

use clap::Parser as ClapParser;
use env_logger::Env;

use chatstats::cli::{Args, PREVIEW_CHARS};
use chatstats::config::AnalysisConfig;
use chatstats::core::filter::{Selector, author_choices};
use chatstats::format::render;
use chatstats::report::Report;
use chatstats::stats::StatsEngine;
use chatstats::{ChatTable, ChatstatsError};

fn main() {
    let args = <Args as ClapParser>::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatstatsError> {
    let text = fs::read_to_string(&args.input)?;

    if args.preview {
        println!("{}", text.chars().take(PREVIEW_CHARS).collect::<String>());
        println!();
    }

    let mut config = AnalysisConfig::default();
    if let Some(path) = args.stop_words_path() {
        config = config.with_stop_words_path(path);
    }

    let table = match ChatTable::parse_with(&text, &config) {
        Ok(table) => table,
        Err(e) if e.is_no_markers() => {
            eprintln!("Warning: {e}");
            ChatTable::default()
        }
        Err(e) => return Err(e),
    };

    if args.list_users {
        for choice in author_choices(&table, &config) {
            println!("{choice}");
        }
        return Ok(());
    }

    if let Some(path) = &args.export_table {
        export_table(&table, path)?;
        log::info!("Table written to {}", path.display());
    }

    let selector = args
        .user
        .as_deref()
        .map(|label| Selector::from_label(label, &config.overall_label))
        .unwrap_or_default();

    if let Selector::Author(name) = &selector {
        if !table.is_empty() && !table.authors().contains(&name.as_str()) {
            return Err(ChatstatsError::UnknownAuthor(name.clone()));
        }
    }

    let engine = StatsEngine::from_config(config);
    let report = Report::build(&engine, &selector, &table);
    let rendered = render(&report, args.format)?;

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            log::info!("Report written to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

#[cfg(feature = "csv-output")]
fn export_table(table: &ChatTable, path: &std::path::Path) -> Result<(), ChatstatsError> {
    chatstats::core::output::write_csv(table, path)
}

#[cfg(not(feature = "csv-output"))]
fn export_table(_table: &ChatTable, _path: &std::path::Path) -> Result<(), ChatstatsError> {
    Err(ChatstatsError::InvalidFormat {
        format: "table",
        message: "CSV export requires the 'csv-output' feature to be enabled".to_string(),
    })
}

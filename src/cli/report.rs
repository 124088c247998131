//! Console output.
//!
//! Progress and summaries go to stdout, warnings and errors to stderr. Every
//! printer has a `_to` variant taking a writer, used by tests.

use std::io::{self, Write};

use colored::Colorize;

use super::run::CommandResult;
use crate::config::CONFIG_FILE_NAME;
use crate::core::{Extraction, PipelineObserver, PipelineOutput, Warning, reporter::OutputPaths};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the outcome of a finished command.
pub fn print(result: &CommandResult) {
    match result {
        CommandResult::Extract(output) => {
            print_summary_to(output, &mut io::stdout().lock());
        }
        CommandResult::Init { path } => {
            let _ = writeln!(
                io::stdout().lock(),
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", path.display()).green()
            );
        }
    }
}

pub fn print_start() {
    let _ = writeln!(io::stdout().lock(), "Starting translation extraction...");
}

/// Streams pipeline progress to stdout and warnings to stderr as they occur.
pub struct Console;

impl PipelineObserver for Console {
    fn on_file(&mut self, path: &str) {
        print_progress_to(path, &mut io::stdout().lock());
    }

    fn on_warning(&mut self, warning: &Warning) {
        print_warning_to(warning, &mut io::stderr().lock());
    }
}

pub fn print_progress_to<W: Write>(path: &str, writer: &mut W) {
    let _ = writeln!(writer, "  {} {}", "Processed:".dimmed(), path);
}

pub fn print_config_origin(from_file: bool) {
    let origin = if from_file {
        format!("Using config file {}", CONFIG_FILE_NAME)
    } else {
        "No config file found, using defaults".to_string()
    };
    let _ = writeln!(io::stderr().lock(), "{} {}", "info:".bold().cyan(), origin);
}

pub fn print_warning_to<W: Write>(warning: &Warning, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning);
}

/// Print the run summary: counters, missing keys and output files.
pub fn print_summary_to<W: Write>(output: &PipelineOutput, writer: &mut W) {
    let extraction = &output.extraction;
    let stats = &extraction.stats;

    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", "Translation Extraction Summary".bold());
    let _ = writeln!(writer, "==============================");
    let _ = writeln!(writer, "Files processed:          {}", stats.files_processed);
    let _ = writeln!(
        writer,
        "Files with translations:  {}",
        stats.files_with_translations
    );
    let _ = writeln!(writer, "Total translation calls:  {}", stats.total_occurrences);
    let _ = writeln!(writer, "Unique translation keys:  {}", extraction.unique_keys());
    let _ = writeln!(writer, "Missing translations:     {}", extraction.missing_count());

    print_missing_to(extraction, writer);
    print_output_paths_to(&output.paths, writer);

    let _ = writeln!(
        writer,
        "\n{} {}",
        SUCCESS_MARK.green(),
        "Translation extraction completed".green()
    );
}

fn print_missing_to<W: Write>(extraction: &Extraction, writer: &mut W) {
    if extraction.missing.is_empty() {
        return;
    }

    let _ = writeln!(writer, "\n{}", "Missing Translations:".bold().yellow());
    for (key, locales) in &extraction.missing {
        let _ = writeln!(
            writer,
            "  {} {} - Missing in: {}",
            FAILURE_MARK.red(),
            key,
            locales.join(", ")
        );
    }
}

fn print_output_paths_to<W: Write>(paths: &OutputPaths, writer: &mut W) {
    let dir = paths
        .keys
        .parent()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let _ = writeln!(writer, "\nOutput files generated in: {}", dir);
    for path in [&paths.keys, &paths.missing, &paths.report] {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let _ = writeln!(writer, "  - {}", name);
    }
}

/// Print a top-level error that aborted the run.
pub fn print_error(err: &anyhow::Error) {
    let _ = writeln!(
        io::stderr().lock(),
        "{} {:#}",
        "Error:".bold().red(),
        err
    );
}

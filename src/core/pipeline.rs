//! Sequential extraction pipeline.
//!
//! Runs the four stages in order on a single [`Extraction`]:
//! 1. **Scan**: collect candidate files under the source root
//! 2. **Extract**: match translation calls in each file
//! 3. **Compare**: resolve every key against the locale tables
//! 4. **Report**: write the keys, missing and narrative documents
//!
//! Per-file and per-locale problems become warnings. Only a missing source
//! root, an invalid call pattern or an output write failure is an error.

use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};

use super::{
    Extraction, Warning, WarningKind,
    comparator::check_missing_translations,
    extractor::{CallPattern, Extractor},
    locale::{LocaleTable, load_locale},
    reporter::{OutputPaths, write_outputs},
    scanner::{ScanFilter, scan_files},
};
use crate::config::Config;

/// Everything a finished run produced.
#[derive(Debug)]
pub struct PipelineOutput {
    pub extraction: Extraction,
    pub paths: OutputPaths,
}

/// Receives progress while the pipeline runs.
///
/// Warnings are delivered as soon as the stage that raised them finishes, so
/// they are seen even when a later stage fails.
pub trait PipelineObserver {
    /// A file contained at least one translation call.
    fn on_file(&mut self, _path: &str) {}

    fn on_warning(&mut self, _warning: &Warning) {}
}

impl PipelineObserver for () {}

/// Run the full pipeline.
pub fn run_pipeline(
    config: &Config,
    generated_at: DateTime<Utc>,
    observer: &mut impl PipelineObserver,
) -> Result<PipelineOutput> {
    let mut extraction = Extraction::new();
    let mut reported = 0;
    let source_root = Path::new(&config.source_root);

    // Scan
    let scan = scan_files(source_root, &ScanFilter::from_config(config))?;
    for (path, error) in scan.skipped {
        extraction.warn(WarningKind::Walk, path, error);
    }
    flush_warnings(&extraction, &mut reported, observer);

    // Extract
    let pattern = CallPattern::new(&config.translation_function)?;
    let extractor = Extractor::new(&pattern, source_root);
    for file in &scan.files {
        if let Some(display) = extractor.process_file(&mut extraction, file) {
            observer.on_file(&display);
        }
        flush_warnings(&extraction, &mut reported, observer);
    }

    // Compare
    let tables = load_locale_tables(&mut extraction, config);
    flush_warnings(&extraction, &mut reported, observer);
    check_missing_translations(&mut extraction, &tables);

    // Report
    let paths = write_outputs(&extraction, config, generated_at)?;

    Ok(PipelineOutput { extraction, paths })
}

fn flush_warnings(
    extraction: &Extraction,
    reported: &mut usize,
    observer: &mut impl PipelineObserver,
) {
    for warning in &extraction.warnings[*reported..] {
        observer.on_warning(warning);
    }
    *reported = extraction.warnings.len();
}

/// Load the primary and secondary tables, in that order.
pub fn load_locale_tables(extraction: &mut Extraction, config: &Config) -> Vec<LocaleTable> {
    config
        .locales()
        .into_iter()
        .map(|locale| load_locale(extraction, &config.locale_path(locale), locale))
        .collect()
}

//! Core extraction engine.
//!
//! The engine is a single sequential batch pipeline. Each stage consumes the
//! full output of the previous one:
//!
//! 1. `scanner`: walks the source tree and yields candidate files
//! 2. `extractor`: applies the call pattern to each file and collects keys
//! 3. `comparator`: resolves every key against the locale tables
//! 4. `reporter`: persists the keys, missing and narrative documents
//!
//! A single [`Extraction`] value owns all accumulated state for one run and is
//! passed by exclusive reference through the stages.

pub mod comparator;
pub mod extractor;
pub mod locale;
pub mod pipeline;
pub mod reporter;
pub mod scanner;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

pub use pipeline::{PipelineObserver, PipelineOutput, run_pipeline};

/// Counters accumulated while extracting. Read-only once extraction ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Files successfully read.
    pub files_processed: usize,
    /// Files containing at least one translation call.
    pub files_with_translations: usize,
    /// Translation call occurrences, not deduplicated.
    pub total_occurrences: usize,
}

/// A non-fatal problem encountered during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub kind: WarningKind,
    pub path: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A directory entry could not be accessed while walking.
    Walk,
    /// A source file could not be read.
    SourceRead,
    /// A locale file does not exist.
    LocaleMissing,
    /// A locale file exists but could not be read or parsed.
    LocaleInvalid,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WarningKind::Walk => write!(f, "Cannot access path {}: {}", self.path, self.message),
            WarningKind::SourceRead => {
                write!(f, "Could not process {}: {}", self.path, self.message)
            }
            WarningKind::LocaleMissing => write!(
                f,
                "Locale file {} not found, treating all keys as missing",
                self.path
            ),
            WarningKind::LocaleInvalid => write!(
                f,
                "Could not load locale file {}: {}",
                self.path, self.message
            ),
        }
    }
}

/// Mutable state of one extraction run.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Deduplicated keys, sorted for deterministic output.
    pub keys: BTreeSet<String>,
    /// Key to the locales lacking a value for it, in configured locale order.
    pub missing: BTreeMap<String, Vec<String>>,
    pub stats: RunStats,
    pub warnings: Vec<Warning>,
}

impl Extraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unique_keys(&self) -> usize {
        self.keys.len()
    }

    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    pub(crate) fn warn(
        &mut self,
        kind: WarningKind,
        path: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.warnings.push(Warning {
            kind,
            path: path.into(),
            message: message.into(),
        });
    }
}

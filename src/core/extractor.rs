//! Textual extraction of translation keys.
//!
//! Keys are found with a regular expression, not by parsing the host
//! language. Calls inside comments or unrelated functions ending in the same
//! name are matched too, and calls whose argument is a variable, a
//! concatenation or an interpolated template are missed. Callers rely on that
//! behavior, so it must stay textual.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use regex::Regex;

use super::{Extraction, WarningKind};

/// The recognized call shape: `name(` + quoted literal + `)`.
///
/// The literal may use `'`, `"` or `` ` `` and must be non-empty. It runs to
/// the next occurrence of its own quote character.
#[derive(Debug, Clone)]
pub struct CallPattern {
    regex: Regex,
}

impl CallPattern {
    pub fn new(function: &str) -> Result<Self> {
        let pattern = format!(
            r#"{}\((?:'([^']+)'|"([^"]+)"|`([^`]+)`)\)"#,
            regex::escape(function)
        );
        let regex = Regex::new(&pattern)
            .with_context(|| format!("Invalid translation function name: \"{}\"", function))?;
        Ok(Self { regex })
    }

    /// Every non-overlapping key occurrence in `content`, in source order.
    pub fn find_keys<'a>(&self, content: &'a str) -> Vec<&'a str> {
        self.regex
            .captures_iter(content)
            .filter_map(|caps| {
                caps.get(1)
                    .or_else(|| caps.get(2))
                    .or_else(|| caps.get(3))
                    .map(|m| m.as_str())
            })
            .collect()
    }
}

/// Reads source files and accumulates their keys into an [`Extraction`].
pub struct Extractor<'a> {
    pattern: &'a CallPattern,
    source_root: PathBuf,
}

impl<'a> Extractor<'a> {
    pub fn new(pattern: &'a CallPattern, source_root: impl Into<PathBuf>) -> Self {
        Self {
            pattern,
            source_root: source_root.into(),
        }
    }

    /// Extract keys from one file.
    ///
    /// Returns the file's display path when it contained at least one key.
    /// Read failures become warnings on `extraction` and contribute nothing.
    pub fn process_file(&self, extraction: &mut Extraction, path: &Path) -> Option<String> {
        let display = self.display_path(path);

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                extraction.warn(WarningKind::SourceRead, display, e.to_string());
                return None;
            }
        };
        extraction.stats.files_processed += 1;

        let keys = self.pattern.find_keys(&content);
        if keys.is_empty() {
            return None;
        }

        extraction.stats.total_occurrences += keys.len();
        extraction.stats.files_with_translations += 1;
        for key in keys {
            extraction.keys.insert(key.to_string());
        }

        Some(display)
    }

    /// Path relative to the source root, falling back to the full path.
    fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.source_root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}

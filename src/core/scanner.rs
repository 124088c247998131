use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;

/// Result of scanning the source tree.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Candidate files in traversal order.
    pub files: Vec<PathBuf>,
    /// Entries that could not be accessed, as `(path, error)`.
    pub skipped: Vec<(String, String)>,
}

/// Directory and extension filters applied while walking.
pub struct ScanFilter {
    exclude_dirs: Vec<String>,
    extensions: Vec<String>,
    ignores: Vec<Pattern>,
}

impl ScanFilter {
    pub fn new(exclude_dirs: &[String], extensions: &[String], ignores: &[String]) -> Self {
        Self {
            exclude_dirs: exclude_dirs.to_vec(),
            // Accept both "js" and ".js" in configuration
            extensions: extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect(),
            // Invalid patterns are rejected by Config::validate
            ignores: ignores.iter().filter_map(|p| Pattern::new(p).ok()).collect(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.exclude_dirs,
            &config.include_extensions,
            &config.ignores,
        )
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.exclude_dirs.iter().any(|d| d == name))
    }

    fn is_ignored(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.ignores.iter().any(|p| p.matches(&path_str))
    }

    pub fn is_scannable_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext))
    }
}

/// Walk `root` depth-first and collect every file passing `filter`.
///
/// Excluded directory names are pruned at any depth, so nothing below them is
/// visited. Unreadable entries are recorded in `skipped` and the walk
/// continues. A missing root is an error.
pub fn scan_files(root: &Path, filter: &ScanFilter) -> Result<ScanResult> {
    if !root.exists() {
        bail!(
            "Source directory '{}' does not exist.\n\
             Hint: Check the 'sourceRoot' setting or pass --source-root.",
            root.display()
        );
    }
    if !root.is_dir() {
        bail!("'{}' is not a directory.", root.display());
    }

    let mut result = ScanResult::default();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !filter.is_excluded_dir(entry));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| root.display().to_string());
                result.skipped.push((path, e.to_string()));
                continue;
            }
        };
        let path = entry.path();

        if filter.is_ignored(path) {
            continue;
        }

        if path.is_file() && filter.is_scannable_file(path) {
            result.files.push(path.to_path_buf());
        }
    }

    Ok(result)
}

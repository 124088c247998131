//! Persisted outputs of a run.
//!
//! Three artifacts are written to the output directory:
//! - the extracted keys document (JSON)
//! - the missing translations document (JSON)
//! - the narrative report (Markdown)

use std::{
    collections::BTreeMap,
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::Extraction;
use crate::config::{Config, OutputFiles};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeysDocument {
    pub extracted_at: String,
    pub total_keys: usize,
    pub keys: Vec<String>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingDocument {
    pub extracted_at: String,
    pub total_missing: usize,
    pub missing: BTreeMap<String, Vec<String>>,
}

/// Paths of the artifacts written by [`write_outputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub keys: PathBuf,
    pub missing: PathBuf,
    pub report: PathBuf,
}

impl OutputPaths {
    pub fn new(output_dir: &Path, files: &OutputFiles) -> Self {
        Self {
            keys: output_dir.join(&files.keys),
            missing: output_dir.join(&files.missing),
            report: output_dir.join(&files.report),
        }
    }
}

/// Timestamp format shared by every artifact, e.g. `2024-05-01T09:30:00.000Z`.
pub fn format_timestamp(generated_at: DateTime<Utc>) -> String {
    generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn keys_document(extraction: &Extraction, generated_at: DateTime<Utc>) -> KeysDocument {
    KeysDocument {
        extracted_at: format_timestamp(generated_at),
        total_keys: extraction.unique_keys(),
        keys: extraction.keys.iter().cloned().collect(),
    }
}

pub fn missing_document(extraction: &Extraction, generated_at: DateTime<Utc>) -> MissingDocument {
    MissingDocument {
        extracted_at: format_timestamp(generated_at),
        total_missing: extraction.missing_count(),
        missing: extraction.missing.clone(),
    }
}

/// Render the Markdown report.
pub fn render_report(
    extraction: &Extraction,
    config: &Config,
    generated_at: DateTime<Utc>,
) -> String {
    let stats = &extraction.stats;
    let mut out = String::new();

    let _ = writeln!(out, "# Translation Extraction Report");
    let _ = writeln!(out);
    let _ = writeln!(out, "Generated: {}", format_timestamp(generated_at));
    let _ = writeln!(out);
    let _ = writeln!(out, "## Summary Statistics");
    let _ = writeln!(out);
    let _ = writeln!(out, "- **Files Processed**: {}", stats.files_processed);
    let _ = writeln!(out, "- **Files with Translations**: {}", stats.files_with_translations);
    let _ = writeln!(out, "- **Total Translation Keys**: {}", stats.total_occurrences);
    let _ = writeln!(out, "- **Unique Keys**: {}", extraction.unique_keys());
    let _ = writeln!(out, "- **Missing Translations**: {}", extraction.missing_count());
    let _ = writeln!(out);

    let _ = writeln!(out, "## Extracted Translation Keys");
    let _ = writeln!(out);
    for key in &extraction.keys {
        let _ = writeln!(out, "- `{}`", key);
    }
    if !extraction.keys.is_empty() {
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "## Missing Translations");
    let _ = writeln!(out);
    if extraction.missing.is_empty() {
        let _ = writeln!(out, "No missing translations found!");
    } else {
        for (key, locales) in &extraction.missing {
            let _ = writeln!(out, "- `{}` - Missing in: {}", key, locales.join(", "));
        }
    }
    let _ = writeln!(out);

    write_recommendations(&mut out, config);

    out
}

fn write_recommendations(out: &mut String, config: &Config) {
    let [primary, secondary] = config.locales();

    let _ = writeln!(out, "## Recommendations");
    let _ = writeln!(out);

    for locale in [primary, secondary] {
        let locale_file = config.locale_path(locale);
        let _ = writeln!(out, "### For Missing `{}` Translations:", locale);
        let _ = writeln!(out, "1. Add translations to `{}`", locale_file.display());
        let _ = writeln!(out, "2. Use descriptive, user-friendly text");
        let _ = writeln!(out, "3. Keep terminology consistent across screens");
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "### Next Steps:");
    let _ = writeln!(out, "1. Review missing translations");
    let _ = writeln!(out, "2. Add missing keys to translation files");
    let _ = writeln!(out, "3. Test the app in `{}` and `{}`", primary, secondary);
    let _ = writeln!(out, "4. Validate wording with native speakers");
    let _ = writeln!(out, "5. Update store listings and other metadata accordingly");
    let _ = writeln!(out);

    let _ = writeln!(out, "## Quality Assurance Checklist");
    let _ = writeln!(out);
    let _ = writeln!(out, "- [ ] All keys have `{}` translations", primary);
    let _ = writeln!(out, "- [ ] All keys have `{}` translations", secondary);
    let _ = writeln!(out, "- [ ] Politeness level and tone fit each audience");
    let _ = writeln!(out, "- [ ] Technical terms are consistently translated");
    let _ = writeln!(out, "- [ ] UI text fits within interface constraints");
    let _ = writeln!(out, "- [ ] Cultural adaptations are considered");
    let _ = writeln!(out, "- [ ] Currency and date formatting is locale-appropriate");
    let _ = writeln!(out);
    let _ = writeln!(out, "---");
    let _ = writeln!(out);
    let _ = writeln!(out, "**Generated by i18n-extract**");
}

/// Create the output directory and write all three artifacts.
///
/// Each artifact is written as a whole file; a failure aborts the remaining
/// writes and is returned to the caller.
pub fn write_outputs(
    extraction: &Extraction,
    config: &Config,
    generated_at: DateTime<Utc>,
) -> Result<OutputPaths> {
    let output_dir = Path::new(&config.output_dir);
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let paths = OutputPaths::new(output_dir, &config.output_files);

    write_json(&paths.keys, &keys_document(extraction, generated_at))?;
    write_json(&paths.missing, &missing_document(extraction, generated_at))?;

    let report = render_report(extraction, config, generated_at);
    fs::write(&paths.report, report)
        .with_context(|| format!("Failed to write file: {}", paths.report.display()))?;

    Ok(paths)
}

/// Write `value` with 2-space indentation and a trailing newline.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(())
}

//! Locale table loading and dotted-path lookup.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use super::{Extraction, WarningKind};

/// Translated strings for one locale, as a nested JSON value.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleTable {
    pub locale: String,
    root: Value,
}

impl LocaleTable {
    pub fn new(locale: impl Into<String>, root: Value) -> Self {
        Self {
            locale: locale.into(),
            root,
        }
    }

    /// A table with no entries. Every lookup fails.
    pub fn empty(locale: impl Into<String>) -> Self {
        Self::new(locale, Value::Object(Map::new()))
    }

    /// Resolve a dotted key path such as `settings.title`.
    ///
    /// Objects are descended by member name and arrays by canonical decimal
    /// index (`0`, `1`, `12`; never `+1` or `01`). Reaching any other value
    /// before the last segment fails the lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        key.split('.').try_fold(&self.root, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => array_index(segment).and_then(|i| items.get(i)),
            _ => None,
        })
    }

    /// True if `key` resolves to a truthy value.
    pub fn has_value(&self, key: &str) -> bool {
        self.get(key).is_some_and(is_truthy)
    }
}

fn array_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    canonical.then(|| segment.parse().ok()).flatten()
}

/// Truthiness of a resolved value.
///
/// `null`, `false`, zero and the empty string count as absent. Objects and
/// arrays count as present even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn parse_json_file(path: &Path, locale: &str) -> Result<LocaleTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    Ok(LocaleTable::new(locale, json))
}

/// Load the table for `locale` from `path`.
///
/// A missing or unparsable file yields an empty table and a warning on
/// `extraction`; it never fails the run.
pub fn load_locale(extraction: &mut Extraction, path: &Path, locale: &str) -> LocaleTable {
    let display = path.display().to_string();

    if !path.exists() {
        extraction.warn(WarningKind::LocaleMissing, display, "");
        return LocaleTable::empty(locale);
    }

    match parse_json_file(path, locale) {
        Ok(table) => table,
        Err(e) => {
            extraction.warn(WarningKind::LocaleInvalid, display, format!("{:#}", e));
            LocaleTable::empty(locale)
        }
    }
}

use super::{Extraction, locale::LocaleTable};

/// Record, for every extracted key, the locales that lack a truthy value.
///
/// `tables` are checked in order, so each missing entry lists locales in the
/// same order. Keys resolved in every table are left out. Any previous
/// comparison result on `extraction` is replaced.
pub fn check_missing_translations(extraction: &mut Extraction, tables: &[LocaleTable]) {
    extraction.missing.clear();

    for key in &extraction.keys {
        let missing: Vec<String> = tables
            .iter()
            .filter(|table| !table.has_value(key))
            .map(|table| table.locale.clone())
            .collect();

        if !missing.is_empty() {
            extraction.missing.insert(key.clone(), missing);
        }
    }
}

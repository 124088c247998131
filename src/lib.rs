//! i18n-extract - translation key extractor
//!
//! Scans a source tree for calls to a translation function such as
//! `t("settings.title")`, collects the literal keys, checks them against a
//! primary and a secondary locale file and writes a report of what is missing.
//!
//! Matching is textual. See [`crate::core::extractor`] for what that implies.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and defaults
//! - `core`: The scan, extract, compare and report pipeline

pub mod cli;
pub mod config;
pub mod core;

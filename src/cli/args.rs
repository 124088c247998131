//! CLI argument definitions using clap.
//!
//! Running `i18n-extract` with no subcommand performs a full extraction with
//! the configured (or default) settings. Every flag is optional.
//!
//! ## Commands
//!
//! - `init`: Write a default `.i18n-extract.json` configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Overrides applied on top of the configuration file.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Output directory holding locale files and reports (overrides config file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Primary locale (overrides config file)
    #[arg(long)]
    pub primary_locale: Option<String>,

    /// Secondary locale (overrides config file)
    #[arg(long)]
    pub secondary_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(source_root) = &self.source_root {
            config.source_root = source_root.to_string_lossy().to_string();
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.to_string_lossy().to_string();
        }
        if let Some(locale) = &self.primary_locale {
            config.primary_locale = locale.clone();
        }
        if let Some(locale) = &self.secondary_locale {
            config.secondary_locale = locale.clone();
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .i18n-extract.json configuration file
    Init,
}

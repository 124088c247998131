//! Command dispatch.
//!
//! Loads configuration, applies CLI overrides and runs either the extraction
//! pipeline or `init`.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use chrono::Utc;

use super::{
    args::{Arguments, Command},
    report,
};
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json, load_config};
use crate::core::{PipelineOutput, run_pipeline};

/// Outcome of a successful command.
#[derive(Debug)]
pub enum CommandResult {
    Extract(PipelineOutput),
    Init { path: PathBuf },
}

pub fn run(args: Arguments) -> Result<CommandResult> {
    match args.command {
        Some(Command::Init) => {
            let path = init(Path::new(CONFIG_FILE_NAME))?;
            Ok(CommandResult::Init { path })
        }
        None => extract(&args),
    }
}

fn extract(args: &Arguments) -> Result<CommandResult> {
    let verbose = args.common.verbose;
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_config(&cwd)?;

    let mut config: Config = loaded.config;
    args.common.apply_to(&mut config);
    config.validate()?;

    if verbose {
        report::print_config_origin(loaded.from_file);
    }

    report::print_start();
    let output = run_pipeline(&config, Utc::now(), &mut report::Console)?;

    Ok(CommandResult::Extract(output))
}

fn init(config_path: &Path) -> Result<PathBuf> {
    if config_path.exists() {
        bail!("{} already exists", config_path.display());
    }

    fs::write(config_path, default_config_json()?)
        .with_context(|| format!("Failed to write file: {}", config_path.display()))?;
    Ok(config_path.to_path_buf())
}

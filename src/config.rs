use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".i18n-extract.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
    #[serde(default = "default_include_extensions")]
    pub include_extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_translation_function")]
    pub translation_function: String,
    #[serde(default = "default_primary_locale")]
    pub primary_locale: String,
    #[serde(default = "default_secondary_locale")]
    pub secondary_locale: String,
    #[serde(default)]
    pub output_files: OutputFiles,
}

/// File names of the three generated artifacts, relative to `outputDir`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputFiles {
    #[serde(default = "default_keys_file")]
    pub keys: String,
    #[serde(default = "default_missing_file")]
    pub missing: String,
    #[serde(default = "default_report_file")]
    pub report: String,
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_output_dir() -> String {
    "./localization".to_string()
}

fn default_exclude_dirs() -> Vec<String> {
    ["node_modules", ".git", ".expo", "dist", "build"]
        .map(String::from)
        .to_vec()
}

fn default_include_extensions() -> Vec<String> {
    ["js", "jsx", "ts", "tsx"].map(String::from).to_vec()
}

fn default_translation_function() -> String {
    "t".to_string()
}

fn default_primary_locale() -> String {
    "en".to_string()
}

fn default_secondary_locale() -> String {
    "ja".to_string()
}

fn default_keys_file() -> String {
    "translation-keys.json".to_string()
}

fn default_missing_file() -> String {
    "missing-translations.json".to_string()
}

fn default_report_file() -> String {
    "translation-report.md".to_string()
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            keys: default_keys_file(),
            missing: default_missing_file(),
            report: default_report_file(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            output_dir: default_output_dir(),
            exclude_dirs: default_exclude_dirs(),
            include_extensions: default_include_extensions(),
            ignores: Vec::new(),
            translation_function: default_translation_function(),
            primary_locale: default_primary_locale(),
            secondary_locale: default_secondary_locale(),
            output_files: OutputFiles::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid, the
    /// translation function name is empty, or both locales are the same.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.translation_function.trim().is_empty() {
            bail!("'translationFunction' must not be empty");
        }

        if self.primary_locale == self.secondary_locale {
            bail!(
                "'primaryLocale' and 'secondaryLocale' must differ (both are \"{}\")",
                self.primary_locale
            );
        }

        Ok(())
    }

    /// Locales checked by the comparator, primary first.
    pub fn locales(&self) -> [&str; 2] {
        [self.primary_locale.as_str(), self.secondary_locale.as_str()]
    }

    /// Path of the locale table for `locale`: `<outputDir>/<locale>.json`.
    pub fn locale_path(&self, locale: &str) -> PathBuf {
        Path::new(&self.output_dir).join(format!("{}.json", locale))
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{EmitOptions, OutputLang};

pub const CONFIG_FILE_NAME: &str = ".typelocalesrc.json";

/// Largest accepted indentation width.
pub const MAX_INDENT: usize = 8;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales_root")]
    pub locales_root: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default)]
    pub lang: OutputLang,
    #[serde(default = "default_indent")]
    pub indent: usize,
    #[serde(default)]
    pub semi: bool,
    #[serde(default = "default_true")]
    pub typing: bool,
    #[serde(default = "default_true")]
    pub strict: bool,
    #[serde(default = "default_true")]
    pub placeholders: bool,
    #[serde(default)]
    pub recursive: bool,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_locales_root() -> String {
    "./locales".to_string()
}

fn default_output() -> String {
    "./locales".to_string()
}

fn default_indent() -> usize {
    2
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_root: default_locales_root(),
            output: default_output(),
            lang: OutputLang::default(),
            indent: default_indent(),
            semi: false,
            typing: true,
            strict: true,
            placeholders: true,
            recursive: false,
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or the
    /// indentation is out of range.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.indent == 0 || self.indent > MAX_INDENT {
            bail!(
                "Invalid 'indent': {} (expected a value between 1 and {})",
                self.indent,
                MAX_INDENT
            );
        }

        Ok(())
    }

    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            lang: self.lang,
            typing: self.typing,
            strict: self.strict,
            indent: self.indent,
            semi: self.semi,
            placeholders: self.placeholders,
        }
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

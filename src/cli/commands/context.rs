use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::{
    cli::args::{CommonArgs, GenerateCommand},
    config::{Config, load_config},
    loader::{ScanLocalesResult, ScanOptions, scan_locale_files},
};

/// Settings shared by `generate` and `check`.
///
/// Configuration is merged with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--lang js`)
/// 2. `.typelocalesrc.json` config file
/// 3. Built-in defaults
pub struct CommandContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,
    /// Locales directory, as given.
    pub locales_dir: PathBuf,
    pub quiet: bool,
}

impl CommandContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read the current directory")?;
        let loaded = load_config(&cwd)?;
        let mut config = loaded.config;

        if loaded.from_file {
            tracing::debug!("using config file from {}", cwd.display());
        }

        if let Some(path) = &common.path {
            config.locales_root = path.to_string_lossy().to_string();
        }
        if common.recursive {
            config.recursive = true;
        }

        Ok(Self {
            locales_dir: PathBuf::from(&config.locales_root),
            config,
            quiet: common.quiet,
        })
    }

    /// Apply the rendering flags of `generate` on top of the config.
    pub fn apply_generate_overrides(&mut self, cmd: &GenerateCommand) -> Result<()> {
        if let Some(output) = &cmd.output {
            self.config.output = output.clone();
        }
        if let Some(lang) = cmd.lang {
            self.config.lang = lang;
        }
        if let Some(indent) = cmd.indent {
            self.config.indent = indent;
        }
        if cmd.semi {
            self.config.semi = true;
        }
        if cmd.no_typing {
            self.config.typing = false;
        }
        if cmd.no_strict {
            self.config.strict = false;
        }
        if cmd.no_placeholders {
            self.config.placeholders = false;
        }
        self.config.validate()
    }

    /// Output file with the language extension appended when missing.
    pub fn output_path(&self) -> PathBuf {
        with_extension(&self.config.output, self.config.lang.extension())
    }

    /// Read every locale file, skipping `exclude` if it lives in the directory.
    pub fn scan(&self, exclude: Option<&Path>) -> Result<ScanLocalesResult> {
        let options = ScanOptions {
            recursive: self.config.recursive,
            exclude: exclude.map(Path::to_path_buf),
            ..Default::default()
        }
        .with_ignores(&self.config.ignores)?;
        scan_locale_files(&self.locales_dir, &options)
    }
}

fn with_extension(output: &str, extension: &str) -> PathBuf {
    let path = PathBuf::from(output);
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext == extension => path,
        _ => PathBuf::from(format!("{}.{}", output, extension)),
    }
}

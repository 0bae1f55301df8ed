//! Locale file discovery and parsing.
//!
//! Files are read and validated in parallel, then handed to the core sorted
//! by locale id. A bad file never aborts the scan: it becomes a
//! [`MalformedInputError`] warning and the remaining locales still load.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use glob::Pattern;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::core::{LocaleDocument, MalformedInputError, MalformedKind};

/// Options for [`scan_locale_files`].
#[derive(Debug, Default)]
pub struct ScanOptions {
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Glob patterns, matched against paths relative to the locales directory.
    pub ignores: Vec<Pattern>,
    /// A file that must never be read as a locale (the generated output).
    pub exclude: Option<PathBuf>,
}

impl ScanOptions {
    /// Compile `ignores` patterns. Invalid patterns are an error.
    pub fn with_ignores(mut self, patterns: &[String]) -> Result<Self> {
        for p in patterns {
            self.ignores.push(Pattern::new(p)?);
        }
        Ok(self)
    }
}

/// A locale file that failed to load.
#[derive(Debug, Clone)]
pub struct LocaleScanWarning {
    pub file_path: String,
    pub error: MalformedInputError,
}

#[derive(Debug, Default)]
pub struct ScanLocalesResult {
    /// Valid documents, sorted by locale id.
    pub documents: Vec<LocaleDocument>,
    pub warnings: Vec<LocaleScanWarning>,
    /// Number of candidate `.json` files found.
    pub files_found: usize,
}

impl ScanLocalesResult {
    pub fn locales(&self) -> Vec<&str> {
        self.documents.iter().map(|d| d.locale.as_str()).collect()
    }
}

/// Extracts locale from filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.json" -> Some("zh-CN")
/// - "/path/to/locales/ja.json" -> Some("ja")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Read and validate one locale file.
pub fn parse_locale_file(path: &Path, locale: &str) -> Result<LocaleDocument, MalformedInputError> {
    let source_name = file_name(path);
    let content = fs::read_to_string(path).map_err(|e| {
        MalformedInputError::new(&source_name, MalformedKind::Unreadable(e.to_string()))
    })?;
    LocaleDocument::parse(locale, &source_name, &content)
}

pub fn scan_locale_files(
    locales_dir: impl AsRef<Path>,
    options: &ScanOptions,
) -> Result<ScanLocalesResult> {
    let locales_dir = locales_dir.as_ref();

    if !locales_dir.exists() {
        bail!(
            "Locales directory '{}' does not exist.\n\
             Hint: Pass the directory as an argument or set 'localesRoot' in the config file.",
            locales_dir.display()
        );
    }

    if !locales_dir.is_dir() {
        bail!("'{}' is not a directory.", locales_dir.display());
    }

    let candidates = collect_candidates(locales_dir, options);
    let mut result = ScanLocalesResult {
        files_found: candidates.len(),
        ..Default::default()
    };

    let parsed: Vec<_> = candidates
        .par_iter()
        .map(|(path, locale)| (path, parse_locale_file(path, locale)))
        .collect();

    // Same stem in two subdirectories: keep the first valid file in path
    // order, warn about the rest.
    let mut first_by_locale: HashMap<String, String> = HashMap::new();
    for (path, parsed) in parsed {
        let file_path = path.to_string_lossy().to_string();
        match parsed {
            Ok(document) => match first_by_locale.get(&document.locale) {
                Some(first) => result.warnings.push(LocaleScanWarning {
                    error: MalformedInputError::new(
                        file_name(path),
                        MalformedKind::DuplicateLocale {
                            locale: document.locale.clone(),
                            first: first.clone(),
                        },
                    ),
                    file_path,
                }),
                None => {
                    tracing::debug!(path = %path.display(), locale = %document.locale, "loaded locale file");
                    first_by_locale.insert(document.locale.clone(), file_path);
                    result.documents.push(document);
                }
            },
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "skipping locale file");
                result.warnings.push(LocaleScanWarning { file_path, error });
            }
        }
    }

    result.documents.sort_by(|a, b| a.locale.cmp(&b.locale));
    Ok(result)
}

/// `.json` files under the directory, in path order, with their locale ids.
fn collect_candidates(locales_dir: &Path, options: &ScanOptions) -> Vec<(PathBuf, String)> {
    let max_depth = if options.recursive { usize::MAX } else { 1 };
    let exclude = options
        .exclude
        .as_ref()
        .and_then(|p| fs::canonicalize(p).ok());

    let mut candidates = Vec::new();
    for entry in WalkDir::new(locales_dir)
        .max_depth(max_depth)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable path");
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().and_then(|e| e.to_str()) != Some("json")
        {
            continue;
        }

        let relative = path.strip_prefix(locales_dir).unwrap_or(path);
        if options.ignores.iter().any(|p| p.matches_path(relative)) {
            tracing::debug!(path = %path.display(), "ignored by pattern");
            continue;
        }

        if let Some(exclude) = &exclude
            && fs::canonicalize(path).ok().as_ref() == Some(exclude)
        {
            tracing::debug!(path = %path.display(), "skipping generated output");
            continue;
        }

        if let Some(locale) = extract_locale(path) {
            candidates.push((path.to_path_buf(), locale));
        }
    }
    candidates
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

//! Error types raised by the merge-and-generate core.
//!
//! The core never prints anything; callers decide whether an error is fatal
//! for the whole run ([`GenerateError`]) or only for a single locale file
//! ([`MalformedInputError`]).

use thiserror::Error;

/// A path is a leaf in one locale and a nested object in another.
///
/// Fatal for the tree instance that raised it: ingestion does not roll back,
/// so the partially merged tree must be discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("conflict at key \"{path}\" in locale \"{locale}\": {kind}")]
pub struct ConflictError {
    /// Full dotted path of the conflicting node.
    pub path: String,
    /// Locale being ingested when the clash was observed.
    pub locale: String,
    pub kind: ConflictKind,
}

/// Which direction the leaf/branch clash went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConflictKind {
    /// The locale has text where other locales have a nested object.
    #[error("expected a nested object, found a string")]
    TextOverObject,
    /// The locale has a nested object where other locales have text.
    #[error("expected a string, found a nested object")]
    ObjectOverText,
}

/// Why a locale document could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedKind {
    #[error("cannot be read: {0}")]
    Unreadable(String),
    /// The file is empty or only whitespace.
    #[error("is empty")]
    Empty,
    #[error("is not valid JSON: {0}")]
    InvalidJson(String),
    /// A value is neither a string nor an object. `found` is the JSON type name.
    #[error("key \"{path}\" must be a string or an object, found {found}")]
    InvalidShape { path: String, found: &'static str },
    #[error("root must be an object, found {found}")]
    RootNotObject { found: &'static str },
    /// Another file already provided this locale id.
    #[error("defines locale \"{locale}\" which is already loaded from \"{first}\"")]
    DuplicateLocale { locale: String, first: String },
}

/// A single locale document is unusable. Recoverable at the batch level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("locale file \"{source_name}\" {kind}")]
pub struct MalformedInputError {
    /// File name (or locale id when there is no file) for messages.
    pub source_name: String,
    pub kind: MalformedKind,
}

impl MalformedInputError {
    pub fn new(source_name: impl Into<String>, kind: MalformedKind) -> Self {
        Self {
            source_name: source_name.into(),
            kind,
        }
    }
}

/// Fatal errors of a generation cycle. No artifact is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Conflict(#[from] ConflictError),
    #[error("no valid locale files found")]
    EmptyInput,
    #[error("failed to serialize output: {0}")]
    Serialize(String),
}

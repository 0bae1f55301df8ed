//! Merge-and-generate core.
//!
//! ## Pipeline
//!
//! 1. [`document`]: validate parsed JSON into [`LocaleDocument`]s
//! 2. [`tree`]: ingest documents one by one into a [`KeyTree`]
//! 3. [`emit`]: render the mapping and its type description
//!
//! [`generate`] runs steps 2 and 3 as a single all-or-nothing operation.
//! The [`translator`] module is the runtime counterpart: it looks up and
//! formats messages by the dotted keys the generated module exposes.

pub mod document;
pub mod emit;
pub mod error;
pub mod placeholder;
pub mod translator;
pub mod tree;

pub use document::{Entry, LocaleDocument};
pub use emit::{EmitOptions, OutputLang};
pub use error::{ConflictError, ConflictKind, GenerateError, MalformedInputError, MalformedKind};
pub use translator::{BraceFormatter, Catalog, FormatArgs, MessageFormatter, Translator};
pub use tree::{CoverageGap, KeyTree, KeyTreeNode, LeafValue, NodeKind};

/// Result of a successful generation.
#[derive(Debug)]
pub struct Generated {
    /// The finalized tree, kept for coverage reporting.
    pub tree: KeyTree,
    /// Full text of the output module.
    pub content: String,
}

/// Merge all documents and render the output module.
///
/// Documents are ingested in locale order on a fresh tree. Fails with
/// [`GenerateError::EmptyInput`] when there is nothing to merge and with
/// [`GenerateError::Conflict`] on the first structural conflict; in both
/// cases no content is produced.
pub fn generate(
    documents: &[LocaleDocument],
    options: &EmitOptions,
) -> Result<Generated, GenerateError> {
    if documents.is_empty() {
        return Err(GenerateError::EmptyInput);
    }

    let tree = KeyTree::from_documents(documents)?;
    let content = emit::render_module(&tree, options)?;
    Ok(Generated { tree, content })
}

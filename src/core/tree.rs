//! The merged key tree.
//!
//! Every locale document is ingested into one [`KeyTree`] whose shape is the
//! union of all locales' shapes. Each node remembers which locales defined it
//! so the emitter can tell required keys from optional ones.
//!
//! # Leaf / branch invariant
//!
//! A node is either a leaf (translation text) or a branch (namespace), which
//! is encoded in [`NodeKind`]. A locale that tries to turn one into the other
//! raises a [`ConflictError`] before the node is touched.
//!
//! # Ordering
//!
//! Children are kept in a `BTreeMap`, so traversal order only depends on the
//! set of keys, never on which locale was ingested first.

use std::collections::{BTreeMap, BTreeSet};

use super::document::{Entry, LocaleDocument, join_path};
use super::error::{ConflictError, ConflictKind};
use super::placeholder::extract_placeholders;

/// Data held by a leaf node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafValue {
    /// Text from the first locale that defined the leaf. Later locales do not
    /// overwrite it.
    pub text: String,
    /// Union of `{placeholder}` names found in every locale's text.
    pub placeholders: BTreeSet<String>,
}

impl LeafValue {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            placeholders: extract_placeholders(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Leaf(LeafValue),
    Branch(BTreeMap<String, KeyTreeNode>),
}

/// One path segment of the merged hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTreeNode {
    key: String,
    kind: NodeKind,
    defining_locales: BTreeSet<String>,
}

impl KeyTreeNode {
    fn leaf(key: &str, text: &str) -> Self {
        Self {
            key: key.to_string(),
            kind: NodeKind::Leaf(LeafValue::new(text)),
            defining_locales: BTreeSet::new(),
        }
    }

    fn branch(key: &str) -> Self {
        Self {
            key: key.to_string(),
            kind: NodeKind::Branch(BTreeMap::new()),
            defining_locales: BTreeSet::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    /// Leaf data, or `None` for a branch.
    pub fn leaf_value(&self) -> Option<&LeafValue> {
        match &self.kind {
            NodeKind::Leaf(value) => Some(value),
            NodeKind::Branch(_) => None,
        }
    }

    /// Children in key order. Empty for a leaf.
    pub fn children(&self) -> impl Iterator<Item = &KeyTreeNode> {
        let children = match &self.kind {
            NodeKind::Branch(children) => Some(children.values()),
            NodeKind::Leaf(_) => None,
        };
        children.into_iter().flatten()
    }

    /// Locales that supplied a value at or below this node.
    pub fn defining_locales(&self) -> &BTreeSet<String> {
        &self.defining_locales
    }

    /// Whether every locale in `all_locales` defines this node.
    pub fn covers_all(&self, all_locales: &BTreeSet<String>) -> bool {
        self.defining_locales.is_superset(all_locales)
    }
}

/// Root of the merged key hierarchy. The root itself is never a leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyTree {
    children: BTreeMap<String, KeyTreeNode>,
    locales: BTreeSet<String>,
}

/// A node that is missing from some locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageGap {
    /// Dotted path of the highest node missing from those locales.
    pub path: String,
    /// Locales that do not define the node.
    pub missing_locales: Vec<String>,
}

impl KeyTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from documents, ingesting them in locale order.
    pub fn from_documents<'a>(
        documents: impl IntoIterator<Item = &'a LocaleDocument>,
    ) -> Result<Self, ConflictError> {
        let mut documents: Vec<&LocaleDocument> = documents.into_iter().collect();
        documents.sort_by(|a, b| a.locale.cmp(&b.locale));

        let mut tree = Self::new();
        for document in documents {
            tree.ingest(document)?;
        }
        Ok(tree)
    }

    /// Merge one locale document into the tree.
    ///
    /// Locale ids must be unique across calls. On error the tree is left
    /// partially mutated and must be discarded.
    pub fn ingest(&mut self, document: &LocaleDocument) -> Result<(), ConflictError> {
        let locale = document.locale.as_str();
        tracing::debug!(locale, keys = document.entries.len(), "ingesting locale");

        ingest_entries(&mut self.children, "", locale, &document.entries)?;
        self.locales.insert(locale.to_string());
        Ok(())
    }

    /// Every locale id ingested so far.
    pub fn locales(&self) -> &BTreeSet<String> {
        &self.locales
    }

    /// Top-level nodes in key order.
    pub fn children(&self) -> impl Iterator<Item = &KeyTreeNode> {
        self.children.values()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of translation keys (leaves) in the tree.
    pub fn leaf_count(&self) -> usize {
        fn count(node: &KeyTreeNode) -> usize {
            match &node.kind {
                NodeKind::Leaf(_) => 1,
                NodeKind::Branch(children) => children.values().map(count).sum(),
            }
        }
        self.children.values().map(count).sum()
    }

    /// Look up a node by dotted path.
    pub fn get(&self, path: &str) -> Option<&KeyTreeNode> {
        let mut parts = path.split('.');
        let mut node = self.children.get(parts.next()?)?;
        for part in parts {
            node = match &node.kind {
                NodeKind::Branch(children) => children.get(part)?,
                NodeKind::Leaf(_) => return None,
            };
        }
        Some(node)
    }

    /// Nodes not defined by every locale.
    ///
    /// A gap is reported at the highest missing node only: when a whole
    /// namespace is absent from a locale its descendants are not listed again
    /// for that locale.
    pub fn coverage_gaps(&self) -> Vec<CoverageGap> {
        let mut gaps = Vec::new();
        for node in self.children.values() {
            collect_gaps(node, "", &self.locales, &mut gaps);
        }
        gaps
    }
}

fn ingest_entries(
    children: &mut BTreeMap<String, KeyTreeNode>,
    parent_path: &str,
    locale: &str,
    entries: &[(String, Entry)],
) -> Result<(), ConflictError> {
    for (key, entry) in entries {
        let conflict = |kind| ConflictError {
            path: join_path(parent_path, key),
            locale: locale.to_string(),
            kind,
        };

        match entry {
            Entry::Text(text) => {
                let node = children
                    .entry(key.clone())
                    .or_insert_with(|| KeyTreeNode::leaf(key, text));
                match &mut node.kind {
                    NodeKind::Leaf(value) => {
                        value.placeholders.extend(extract_placeholders(text));
                    }
                    NodeKind::Branch(_) => return Err(conflict(ConflictKind::TextOverObject)),
                }
                node.defining_locales.insert(locale.to_string());
            }
            Entry::Nested(inner) => {
                let node = children
                    .entry(key.clone())
                    .or_insert_with(|| KeyTreeNode::branch(key));
                match &mut node.kind {
                    NodeKind::Branch(grandchildren) => {
                        let path = join_path(parent_path, key);
                        ingest_entries(grandchildren, &path, locale, inner)?;
                    }
                    NodeKind::Leaf(_) => return Err(conflict(ConflictKind::ObjectOverText)),
                }
                node.defining_locales.insert(locale.to_string());
            }
        }
    }
    Ok(())
}

fn collect_gaps(
    node: &KeyTreeNode,
    parent_path: &str,
    parent_locales: &BTreeSet<String>,
    gaps: &mut Vec<CoverageGap>,
) {
    let path = join_path(parent_path, &node.key);
    // Only locales that defined the parent can be newly missing here.
    let missing_locales: Vec<String> = parent_locales
        .difference(&node.defining_locales)
        .cloned()
        .collect();
    if !missing_locales.is_empty() {
        gaps.push(CoverageGap {
            path: path.clone(),
            missing_locales,
        });
    }

    let present: BTreeSet<String> = parent_locales
        .intersection(&node.defining_locales)
        .cloned()
        .collect();
    for child in node.children() {
        collect_gaps(child, &path, &present, gaps);
    }
}

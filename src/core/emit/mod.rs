//! Artifact generation.
//!
//! Turns a finalized [`KeyTree`] into the text of the output module. Both
//! artifacts are derived from the same tree walk:
//!
//! - the runtime mapping ([`mapping`]), where every leaf is its dotted path
//! - the type description ([`shape`]), where every leaf is a literal type of
//!   that same path and partially translated keys are optional
//!
//! Nothing is written to disk here; the caller persists the returned text
//! only when generation succeeded.

pub mod mapping;
pub mod shape;

use std::{collections::BTreeMap, fmt};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Value, ser::PrettyFormatter};

use super::document::join_path;
use super::error::GenerateError;
use super::tree::{KeyTree, KeyTreeNode};
use mapping::{Descriptions, quote, render_object, resolve_tree};
use shape::{describe_tree, render_type, render_type_compact};

/// Language of the generated module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputLang {
    /// TypeScript module with a `Locales` type.
    #[default]
    Ts,
    /// ES module with an optional JSDoc `@type` annotation.
    Js,
    /// Plain JSON mapping, no type description.
    Json,
}

impl OutputLang {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputLang::Ts => "ts",
            OutputLang::Js => "js",
            OutputLang::Json => "json",
        }
    }
}

impl fmt::Display for OutputLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Everything that controls how artifacts are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    pub lang: OutputLang,
    /// Emit the type description next to the mapping.
    pub typing: bool,
    /// Mark keys missing from some locale as optional.
    pub strict: bool,
    /// Spaces per indentation level.
    pub indent: usize,
    /// Terminate statements with `;`.
    pub semi: bool,
    /// Emit the `LocalesMap` placeholder type (TypeScript only).
    pub placeholders: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            lang: OutputLang::Ts,
            typing: true,
            strict: true,
            indent: 2,
            semi: false,
            placeholders: true,
        }
    }
}

/// Render the output module for a finalized tree.
pub fn render_module(tree: &KeyTree, options: &EmitOptions) -> Result<String, GenerateError> {
    let mapping = resolve_tree(tree);
    let semi = if options.semi { ";" } else { "" };
    let descriptions = if options.placeholders {
        collect_placeholders(tree)
    } else {
        Descriptions::new()
    };

    let content = match options.lang {
        OutputLang::Json => render_json(&Value::Object(mapping), options.indent)?,
        OutputLang::Ts if options.typing => {
            let shape = describe_tree(tree, options.strict);
            let mut out = format!(
                "type Locales = {}\n\nconst keys: Locales = {}{}\n\nexport default keys{}\n",
                render_type(&shape, options.indent, &descriptions),
                render_object(&mapping, options.indent, &descriptions),
                semi,
                semi
            );
            if options.placeholders {
                out.push('\n');
                out.push_str(&render_placeholder_map(tree, options.indent));
            }
            out
        }
        OutputLang::Ts => format!(
            "const keys = {} as const{}\n\nexport default keys{}\n",
            render_object(&mapping, options.indent, &descriptions),
            semi,
            semi
        ),
        OutputLang::Js => {
            let mut out = String::new();
            if options.typing {
                let shape = describe_tree(tree, options.strict);
                out.push_str(&format!(
                    "/**\n * @type {{{}}}\n */\n",
                    render_type_compact(&shape)
                ));
            }
            out.push_str(&format!(
                "export default {}{}\n",
                render_object(&mapping, options.indent, &descriptions),
                semi
            ));
            out
        }
    };
    Ok(content)
}

fn render_json(value: &Value, indent: usize) -> Result<String, GenerateError> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value
        .serialize(&mut serializer)
        .map_err(|e| GenerateError::Serialize(e.to_string()))?;
    let mut out = String::from_utf8(buf).map_err(|e| GenerateError::Serialize(e.to_string()))?;
    out.push('\n');
    Ok(out)
}

/// Placeholder names of every leaf, keyed by dotted path.
pub fn collect_placeholders(tree: &KeyTree) -> Descriptions {
    fn walk(node: &KeyTreeNode, parent: &str, out: &mut BTreeMap<String, Vec<String>>) {
        let path = join_path(parent, node.key());
        match node.leaf_value() {
            Some(leaf) => {
                out.insert(path, leaf.placeholders.iter().cloned().collect());
            }
            None => {
                for child in node.children() {
                    walk(child, &path, out);
                }
            }
        }
    }

    let mut out = BTreeMap::new();
    for node in tree.children() {
        walk(node, "", &mut out);
    }
    out
}

/// Render `export type LocalesMap`, mapping each key to its format arguments.
fn render_placeholder_map(tree: &KeyTree, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut out = String::from("export type LocalesMap = {\n");
    for (path, names) in collect_placeholders(tree) {
        let args = if names.is_empty() {
            "{}".to_string()
        } else {
            let members: Vec<String> = names
                .iter()
                .map(|name| format!("{}: string", quote(name)))
                .collect();
            format!("{{ {} }}", members.join(", "))
        };
        out.push_str(&format!("{}{}: {}\n", pad, quote(&path), args));
    }
    out.push_str("}\n");
    out
}

//! type-locales - typed translation keys from per-locale JSON files
//!
//! type-locales merges a directory of `<locale>.json` message files into a
//! single key tree and writes a module exposing every translation key as a
//! dotted path, together with a type description in which keys missing from
//! some locales are optional.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (`generate`, `check`, `init`)
//! - `config`: Configuration file loading and parsing
//! - `core`: Key tree, conflict detection, output rendering and translator
//! - `issues`: Issue type definitions for reporting
//! - `loader`: Locale file discovery and parsing

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod loader;

//! bindmeta - binding metadata resolution for declared model types
//!
//! Given a type, one of its properties, or a constructor parameter, bindmeta
//! works out the binding rules that apply: model name, binder type, binding
//! source, property filter, whether binding is allowed or required, and which
//! constructor builds the type. Types and their markers are declared in JSON
//! model manifests.
//!
//! ## Module Structure
//!
//! - `core`: The resolver and everything it reads and produces
//! - `manifest`: Manifest parsing, the type catalog, and context discovery
//! - `analysis`: Resolving every element of a catalog
//! - `rules`: Checks over resolved elements and loaded manifests
//! - `issues`: Issue definitions
//! - `config`: Configuration file loading and parsing
//! - `cli`: Command-line interface layer

pub mod analysis;
pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod manifest;
pub mod rules;

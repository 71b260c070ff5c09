//! Core library for schemadoc: JSON Schema to HTML reference pages
//!
//! The pipeline runs in four stages:
//!
//! 1. [`loader`] parses schema files and resolves `$ref` references
//!    against sibling documents, with cycle detection.
//! 2. [`walker`] traverses a resolved schema and populates an
//!    insertion-ordered [`TokenStore`] of documentation tokens.
//! 3. [`generator`] renders tokens to Markdown and converts the
//!    result to HTML.
//! 4. [`pipeline`] drives single-file and directory conversions,
//!    wiring the [`docmap`] document map and [`doctree`] navigation
//!    templates through shared headers and footers.

pub mod docmap;
pub mod doctree;
pub mod error;
pub mod generator;
pub mod loader;
pub mod pipeline;
pub mod tokens;
pub mod walker;

pub use docmap::{DocMap, DocNode};
pub use error::{Error, Result};
pub use generator::{markdown_to_html, MarkdownGenerator};
pub use pipeline::{build_dir, render_file, BatchReport, RenderOptions};
pub use tokens::{PropertyDoc, Token, TokenStore};
pub use walker::SchemaWalker;

//! Schema loading: file reading, JSON parsing, and `$ref` resolution

pub mod parser;
pub mod resolver;

pub use parser::SchemaParser;
pub use resolver::{ReferenceResolver, ResolverContext};

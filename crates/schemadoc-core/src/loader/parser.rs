//! JSON Schema document parsing

use crate::error::{Error, Result};
use serde_json::Value;
use std::path::Path;

/// Parser for JSON Schema documents
///
/// Input files are JSON by contract; the parser maps every read or
/// parse failure to an error carrying the offending path.
#[derive(Debug, Default)]
pub struct SchemaParser;

impl SchemaParser {
    /// Create a new schema parser
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a schema file
    pub fn parse_file(&self, path: &Path) -> Result<Value> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(path.to_path_buf(), e))?;
        self.parse_str(&content, path)
    }

    /// Parse schema content, attributing errors to `path`
    pub fn parse_str(&self, content: &str, path: &Path) -> Result<Value> {
        serde_json::from_str(content).map_err(|e| Error::json_parse(path.to_path_buf(), e))
    }
}

//! Error types for schema reading, reference resolution, and page generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type for schemadoc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types covering every stage of a documentation run
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O errors
    #[error("Failed to read file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON parsing errors
    #[error("Failed to parse JSON file '{path}': {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Reference resolution errors
    #[error("Failed to resolve reference '{reference}' in '{source_path}': {reason}")]
    Reference {
        reference: String,
        source_path: PathBuf,
        reason: String,
    },

    /// Circular reference detection
    #[error("Circular reference detected: {chain}")]
    CircularReference { chain: String },

    /// Input path missing or of the wrong kind
    #[error("Input path not found: '{path}'")]
    MissingInput { path: PathBuf },

    /// Output write errors
    #[error("Failed to write output file '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    /// Create an I/O error with path context
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io { path, source }
    }

    /// Create a JSON parsing error with path context
    pub fn json_parse(path: PathBuf, source: serde_json::Error) -> Self {
        Self::JsonParse { path, source }
    }

    /// Create a reference resolution error
    pub fn reference(reference: String, source_path: PathBuf, reason: String) -> Self {
        Self::Reference {
            reference,
            source_path,
            reason,
        }
    }

    /// Create a circular reference error from the resolution chain
    pub fn circular_reference(chain: Vec<PathBuf>) -> Self {
        let chain = chain
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        Self::CircularReference { chain }
    }

    /// Create a missing input error
    pub fn missing_input(path: PathBuf) -> Self {
        Self::MissingInput { path }
    }

    /// Create an output write error
    pub fn write(path: PathBuf, source: std::io::Error) -> Self {
        Self::Write { path, source }
    }

    /// Get the path associated with this error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::JsonParse { path, .. } => Some(path),
            Self::Reference { source_path, .. } => Some(source_path),
            Self::MissingInput { path } => Some(path),
            Self::Write { path, .. } => Some(path),
            Self::CircularReference { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let path = PathBuf::from("schema.json");

        let io_err = Error::io(
            path.clone(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert!(matches!(io_err, Error::Io { .. }));
        assert_eq!(io_err.path(), Some(&path));

        let circular = Error::circular_reference(vec![
            PathBuf::from("a.json"),
            PathBuf::from("b.json"),
            PathBuf::from("a.json"),
        ]);
        assert!(matches!(circular, Error::CircularReference { .. }));
        assert!(circular.to_string().contains("a.json -> b.json -> a.json"));
    }

    #[test]
    fn test_reference_error_display() {
        let err = Error::reference(
            "#/address".to_string(),
            PathBuf::from("person.json"),
            "referenced file not found".to_string(),
        );
        let msg = err.to_string();
        assert!(msg.contains("#/address"));
        assert!(msg.contains("person.json"));
    }
}

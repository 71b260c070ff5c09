//! `$ref` dereferencing for schema fragments
//!
//! References of the form `#/name` resolve to a sibling file
//! `name.json` relative to the current document. Remote `http(s)://`
//! references are recognized but resolve to an empty fragment: network
//! fetching is out of scope. Resolution recurses into the resolved
//! document's `items`, so arrays of referenced objects work.

use crate::error::{Error, Result};
use crate::loader::parser::SchemaParser;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Context for one document's resolution run
#[derive(Debug, Clone)]
pub struct ResolverContext {
    /// Directory of the document being walked; sibling refs resolve here
    pub base_dir: PathBuf,
    /// Stack of resolved file paths, for circular reference detection
    pub resolution_stack: Vec<PathBuf>,
    /// Maximum resolution depth
    pub max_depth: usize,
}

impl ResolverContext {
    /// Create a context rooted at the given directory
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            resolution_stack: Vec::new(),
            max_depth: 16,
        }
    }

    /// Push a resolved path, failing on cycles or runaway depth
    pub fn push_path(&mut self, path: PathBuf) -> Result<()> {
        if self.resolution_stack.len() >= self.max_depth
            || self.resolution_stack.contains(&path)
        {
            let mut chain = self.resolution_stack.clone();
            chain.push(path);
            return Err(Error::circular_reference(chain));
        }
        self.resolution_stack.push(path);
        Ok(())
    }

    /// Pop the most recently resolved path
    pub fn pop_path(&mut self) -> Option<PathBuf> {
        self.resolution_stack.pop()
    }
}

/// Eager resolver for schema fragment references
#[derive(Debug, Default)]
pub struct ReferenceResolver {
    parser: SchemaParser,
    cache: HashMap<PathBuf, Value>,
}

impl ReferenceResolver {
    /// Create a new reference resolver
    pub fn new() -> Self {
        Self {
            parser: SchemaParser::new(),
            cache: HashMap::new(),
        }
    }

    /// Dereference a fragment, replacing `$ref` content wholesale
    ///
    /// Fragments without a reference are returned as-is, except that
    /// their `items` are dereferenced in place.
    pub fn deref_fragment(&mut self, fragment: &Value, ctx: &mut ResolverContext) -> Result<Value> {
        if let Some(reference) = fragment.get("$ref").and_then(Value::as_str) {
            if reference.starts_with("http://") || reference.starts_with("https://") {
                // Remote schema fetching is out of scope.
                return Ok(Value::Object(Map::new()));
            }

            let target = self.sibling_path(reference, ctx)?;
            ctx.push_path(target.clone())?;
            let mut resolved = self.load_file(&target)?;
            if let Some(items) = resolved.get("items") {
                let items = self.deref_fragment(&items.clone(), ctx)?;
                resolved["items"] = items;
            }
            ctx.pop_path();
            return Ok(resolved);
        }

        if let Some(items) = fragment.get("items") {
            let items = self.deref_fragment(&items.clone(), ctx)?;
            let mut out = fragment.clone();
            out["items"] = items;
            return Ok(out);
        }

        Ok(fragment.clone())
    }

    /// Resolve `#/name` to the canonical path of sibling `name.json`
    fn sibling_path(&self, reference: &str, ctx: &ResolverContext) -> Result<PathBuf> {
        let name = reference.strip_prefix("#/").unwrap_or(reference);
        let candidate = ctx.base_dir.join(format!("{name}.json"));
        candidate.canonicalize().map_err(|e| {
            Error::reference(
                reference.to_string(),
                candidate,
                format!("referenced file not found: {e}"),
            )
        })
    }

    /// Load a referenced file, caching parsed content by path
    fn load_file(&mut self, path: &Path) -> Result<Value> {
        if let Some(cached) = self.cache.get(path) {
            return Ok(cached.clone());
        }
        let content = self.parser.parse_file(path)?;
        self.cache.insert(path.to_path_buf(), content.clone());
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_plain_fragment_passes_through() {
        let dir = tempdir().unwrap();
        let mut resolver = ReferenceResolver::new();
        let mut ctx = ResolverContext::new(dir.path().to_path_buf());

        let fragment = json!({"type": "string", "format": "email"});
        let out = resolver.deref_fragment(&fragment, &mut ctx).unwrap();
        assert_eq!(out, fragment);
    }

    #[test]
    fn test_remote_ref_resolves_empty() {
        let dir = tempdir().unwrap();
        let mut resolver = ReferenceResolver::new();
        let mut ctx = ResolverContext::new(dir.path().to_path_buf());

        let fragment = json!({"$ref": "https://example.com/remote.json"});
        let out = resolver.deref_fragment(&fragment, &mut ctx).unwrap();
        assert_eq!(out, json!({}));
    }

    #[test]
    fn test_sibling_file_resolution() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("address.json"),
            r#"{"type": "object", "title": "Address"}"#,
        )
        .unwrap();

        let mut resolver = ReferenceResolver::new();
        let mut ctx = ResolverContext::new(dir.path().to_path_buf());

        let fragment = json!({"$ref": "#/address"});
        let out = resolver.deref_fragment(&fragment, &mut ctx).unwrap();
        assert_eq!(out["title"], "Address");
    }

    #[test]
    fn test_resolution_recurses_into_items() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("entry.json"),
            r#"{"type": "object", "title": "Entry"}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("list.json"),
            r##"{"type": "array", "items": {"$ref": "#/entry"}}"##,
        )
        .unwrap();

        let mut resolver = ReferenceResolver::new();
        let mut ctx = ResolverContext::new(dir.path().to_path_buf());

        let fragment = json!({"$ref": "#/list"});
        let out = resolver.deref_fragment(&fragment, &mut ctx).unwrap();
        assert_eq!(out["items"]["title"], "Entry");
    }

    #[test]
    fn test_missing_reference_is_an_error() {
        let dir = tempdir().unwrap();
        let mut resolver = ReferenceResolver::new();
        let mut ctx = ResolverContext::new(dir.path().to_path_buf());

        let fragment = json!({"$ref": "#/nowhere"});
        let err = resolver.deref_fragment(&fragment, &mut ctx).unwrap_err();
        assert!(matches!(err, Error::Reference { .. }));
    }

    #[test]
    fn test_circular_reference_detection() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("a.json"),
            r##"{"type": "array", "items": {"$ref": "#/b"}}"##,
        )
        .unwrap();
        fs::write(
            dir.path().join("b.json"),
            r##"{"type": "array", "items": {"$ref": "#/a"}}"##,
        )
        .unwrap();

        let mut resolver = ReferenceResolver::new();
        let mut ctx = ResolverContext::new(dir.path().to_path_buf());

        let fragment = json!({"$ref": "#/a"});
        let err = resolver.deref_fragment(&fragment, &mut ctx).unwrap_err();
        assert!(matches!(err, Error::CircularReference { .. }));
    }
}

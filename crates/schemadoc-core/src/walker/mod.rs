//! Schema walker: flattens one JSON Schema document into tokens
//!
//! The walker resolves `$ref` pointers eagerly, registers a top-level
//! token plus one token per nested object-typed property, and records
//! required-field information. It produces no output itself; it only
//! populates a [`TokenStore`].

pub mod synth;

use crate::error::Result;
use crate::loader::parser::SchemaParser;
use crate::loader::resolver::{ReferenceResolver, ResolverContext};
use crate::tokens::{PropertyDoc, TokenStore};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Derive a display name: underscores and dots become spaces
fn display_name(stem: &str) -> String {
    stem.replace(['_', '.'], " ")
}

/// Walker over one parsed schema document
pub struct SchemaWalker {
    base_dir: PathBuf,
    fallback_name: String,
    document: Value,
    resolver: ReferenceResolver,
}

impl SchemaWalker {
    /// Read and parse a schema file, ready for walking
    pub fn new(path: &Path) -> Result<Self> {
        let document = SchemaParser::new().parse_file(path)?;
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("schema");
        Ok(Self::with_document(stem, base_dir, document))
    }

    /// Build a walker over an in-memory document
    ///
    /// `source_stem` stands in for the file name when the schema has
    /// no `id`; `base_dir` anchors sibling `$ref` resolution.
    pub fn with_document(source_stem: &str, base_dir: PathBuf, document: Value) -> Self {
        Self {
            base_dir,
            fallback_name: display_name(source_stem),
            document,
            resolver: ReferenceResolver::new(),
        }
    }

    /// Walk the document, writing tokens into `store`
    ///
    /// On failure, tokens registered before the failing fragment stay
    /// in the store; there is no rollback.
    pub fn walk(&mut self, store: &mut TokenStore) -> Result<()> {
        let document = self.document.clone();
        let mut ctx = ResolverContext::new(self.base_dir.clone());

        let name = document
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| self.fallback_name.clone());

        {
            let token = store.token_mut(&name);
            if let Some(title) = document.get("title").and_then(Value::as_str) {
                token.title = Some(title.to_string());
            }
            if let Some(description) = document.get("description").and_then(Value::as_str) {
                token.description = Some(description.to_string());
            }
            if let Some(Value::String(type_name)) = document.get("type") {
                token.type_label = Some(type_name.clone());
            }
        }

        if let Some(properties) = document.get("properties").and_then(Value::as_object) {
            self.walk_properties(&name, properties, store, &mut ctx)?;
            collect_required(&name, &document, store);
        }

        Ok(())
    }

    /// Register every property of a token, then walk nested object
    /// properties as tokens of their own
    ///
    /// Child registration deliberately happens after the parent's
    /// properties are complete.
    fn walk_properties(
        &mut self,
        token_name: &str,
        properties: &Map<String, Value>,
        store: &mut TokenStore,
        ctx: &mut ResolverContext,
    ) -> Result<()> {
        let mut sub_tokens: Vec<(String, Value)> = Vec::new();

        for (key, value) in properties {
            let fragment = self.resolver.deref_fragment(value, ctx)?;

            let sub = if fragment.pointer("/items/type").and_then(Value::as_str) == Some("object")
            {
                fragment.get("items").cloned()
            } else if fragment.get("type").and_then(Value::as_str) == Some("object") {
                Some(fragment.clone())
            } else {
                None
            };
            if let Some(sub_fragment) = sub {
                sub_tokens.push((key.clone(), sub_fragment));
            }

            store.token_mut(token_name).merge_prop(
                key,
                PropertyDoc {
                    name: key.clone(),
                    type_label: synth::type_label(&fragment),
                    description: synth::description(&fragment),
                    allowed: synth::allowed_label(&fragment),
                    example: format!("`{}`", synth::example(&fragment)),
                    required: false,
                },
            );
        }

        for (name, fragment) in sub_tokens {
            self.walk_sub_token(&name, &fragment, store, ctx)?;
        }
        Ok(())
    }

    /// Register a nested object as a token named by its property key
    ///
    /// Collisions across unrelated nested objects sharing a key merge
    /// silently; names are not namespaced to the parent.
    fn walk_sub_token(
        &mut self,
        name: &str,
        fragment: &Value,
        store: &mut TokenStore,
        ctx: &mut ResolverContext,
    ) -> Result<()> {
        {
            let token = store.token_mut(name);
            if let Some(title) = fragment.get("title").and_then(Value::as_str) {
                token.title = Some(title.to_string());
            }
            if let Some(description) = fragment.get("description").and_then(Value::as_str) {
                token.description = Some(description.to_string());
            }
            let type_label = synth::type_label(fragment);
            if !type_label.is_empty() {
                token.type_label = Some(type_label);
            }
            let allowed = synth::allowed_label(fragment);
            if !allowed.is_empty() {
                token.allowed = Some(allowed);
            }
        }

        if let Some(properties) = fragment.get("properties").and_then(Value::as_object) {
            self.walk_properties(name, properties, store, ctx)?;
            collect_required(name, fragment, store);
        }
        Ok(())
    }
}

/// Record required-field information for a token
///
/// `required` is recorded verbatim and each named property gets a
/// required flag; `oneOf`/`anyOf` required-sets are kept as separate
/// alternatives and never touch the per-property flag.
fn collect_required(token_name: &str, schema: &Value, store: &mut TokenStore) {
    if let Some(required) = schema.get("required").and_then(Value::as_array) {
        let names: Vec<String> = required
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect();
        let token = store.token_mut(token_name);
        for name in &names {
            token.mark_required(name);
        }
        token.required.extend(names);
    }

    if let Some(variants) = schema.get("oneOf").and_then(Value::as_array) {
        for variant in variants {
            if let Some(required) = variant.get("required").and_then(Value::as_array) {
                let names = required
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect();
                store.token_mut(token_name).required_one_of.push(names);
            }
        }
    }
    if let Some(variants) = schema.get("anyOf").and_then(Value::as_array) {
        for variant in variants {
            if let Some(required) = variant.get("required").and_then(Value::as_array) {
                let names = required
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect();
                store.token_mut(token_name).required_any_of.push(names);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    fn walk(document: Value) -> TokenStore {
        let mut store = TokenStore::new();
        SchemaWalker::with_document("test_schema", PathBuf::from("."), document)
            .walk(&mut store)
            .unwrap();
        store
    }

    #[test]
    fn test_top_level_token_named_by_id() {
        let store = walk(json!({"id": "person", "title": "Person", "type": "object"}));
        let token = store.get("person").unwrap();
        assert_eq!(token.title.as_deref(), Some("Person"));
        assert_eq!(token.type_label.as_deref(), Some("object"));
    }

    #[test]
    fn test_fallback_name_replaces_underscores() {
        let store = walk(json!({"type": "object"}));
        assert!(store.get("test schema").is_some());
    }

    #[test]
    fn test_nested_object_registers_child_token() {
        let store = walk(json!({
            "id": "order",
            "type": "object",
            "properties": {
                "widget": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "title": "Foo",
                        "properties": {
                            "size": {"type": "integer"}
                        }
                    }
                }
            }
        }));

        let parent = store.get("order").unwrap();
        assert_eq!(parent.props.get("widget").unwrap().type_label, "array[object]");

        let child = store.get("widget").unwrap();
        assert_eq!(child.title.as_deref(), Some("Foo"));
        assert_eq!(child.props.get("size").unwrap().type_label, "integer");
    }

    #[test]
    fn test_parent_registered_before_child() {
        let store = walk(json!({
            "id": "outer",
            "type": "object",
            "properties": {
                "inner": {"type": "object", "properties": {"leaf": {"type": "string"}}}
            }
        }));
        let order: Vec<_> = store.iter().map(|(name, _)| name.clone()).collect();
        assert_eq!(order, vec!["outer", "inner"]);
    }

    #[test]
    fn test_required_propagation() {
        let store = walk(json!({
            "id": "account",
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "nick": {"type": "string"}
            },
            "required": ["name"],
            "oneOf": [
                {"required": ["name"]},
                {"required": ["nick"]}
            ],
            "anyOf": [
                {"required": ["nick"]}
            ]
        }));

        let token = store.get("account").unwrap();
        assert_eq!(token.required, vec!["name"]);
        assert!(token.props.get("name").unwrap().required);
        assert!(!token.props.get("nick").unwrap().required);
        assert_eq!(
            token.required_one_of,
            vec![vec!["name".to_string()], vec!["nick".to_string()]]
        );
        assert_eq!(token.required_any_of, vec![vec!["nick".to_string()]]);
    }

    #[test]
    fn test_rewalk_with_fresh_store_is_identical() {
        let document = json!({
            "id": "person",
            "type": "object",
            "properties": {
                "email": {"type": "string", "format": "email"},
                "tags": {"type": "array", "items": {"type": "string"}}
            },
            "required": ["email"]
        });

        let first = walk(document.clone());
        let second = walk(document);

        let a: Vec<_> = first.iter().collect();
        let b: Vec<_> = second.iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_ref_to_missing_file_surfaces_error() {
        let dir = tempdir().unwrap();
        let document = json!({
            "id": "root",
            "type": "object",
            "properties": {
                "broken": {"$ref": "#/missing"}
            }
        });

        let mut store = TokenStore::new();
        let mut walker =
            SchemaWalker::with_document("root", dir.path().to_path_buf(), document);
        assert!(walker.walk(&mut store).is_err());
    }

    #[test]
    fn test_sibling_ref_resolved_into_property() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("address.json"),
            r#"{
                "type": "object",
                "title": "Address",
                "properties": {"street": {"type": "string"}}
            }"#,
        )
        .unwrap();

        let document = json!({
            "id": "person",
            "type": "object",
            "properties": {
                "address": {"$ref": "#/address"}
            }
        });

        let mut store = TokenStore::new();
        SchemaWalker::with_document("person", dir.path().to_path_buf(), document)
            .walk(&mut store)
            .unwrap();

        assert_eq!(store.get("person").unwrap().props.get("address").unwrap().type_label, "object");
        let child = store.get("address").unwrap();
        assert_eq!(child.title.as_deref(), Some("Address"));
        assert!(child.props.contains_key("street"));
    }
}

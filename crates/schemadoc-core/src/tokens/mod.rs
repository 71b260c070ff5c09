//! Token store: the accumulator the schema walker writes into
//!
//! A token is a named bundle of documentation metadata for one schema
//! object. Tokens are created lazily on first write and live for the
//! duration of one document's walk; a fresh store is constructed per
//! document, so no state leaks across a batch run.

use indexmap::IndexMap;

/// Documentation record for a single schema property
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyDoc {
    pub name: String,
    pub type_label: String,
    pub description: String,
    pub allowed: String,
    pub example: String,
    pub required: bool,
}

impl PropertyDoc {
    /// Merge another record into this one
    ///
    /// Non-empty fields of `other` win; the required flag is sticky so
    /// a bare required-mark never erases a full descriptor (and vice
    /// versa).
    fn merge(&mut self, other: PropertyDoc) {
        if !other.name.is_empty() {
            self.name = other.name;
        }
        if !other.type_label.is_empty() {
            self.type_label = other.type_label;
        }
        if !other.description.is_empty() {
            self.description = other.description;
        }
        if !other.allowed.is_empty() {
            self.allowed = other.allowed;
        }
        if !other.example.is_empty() {
            self.example = other.example;
        }
        self.required |= other.required;
    }
}

/// A named bundle of documentation metadata for one schema object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token {
    pub title: Option<String>,
    pub description: Option<String>,
    pub type_label: Option<String>,
    pub allowed: Option<String>,
    /// Unconditionally required property names, recorded verbatim
    pub required: Vec<String>,
    /// Alternative required-sets contributed by `oneOf`
    pub required_one_of: Vec<Vec<String>>,
    /// Alternative required-sets contributed by `anyOf`
    pub required_any_of: Vec<Vec<String>>,
    /// Property descriptors in registration order
    pub props: IndexMap<String, PropertyDoc>,
}

impl Token {
    /// Merge a property descriptor under the given key
    pub fn merge_prop(&mut self, key: &str, doc: PropertyDoc) {
        self.props
            .entry(key.to_string())
            .or_insert_with(|| PropertyDoc {
                name: key.to_string(),
                ..PropertyDoc::default()
            })
            .merge(doc);
    }

    /// Flag a property as unconditionally required
    pub fn mark_required(&mut self, key: &str) {
        self.merge_prop(
            key,
            PropertyDoc {
                required: true,
                ..PropertyDoc::default()
            },
        );
    }
}

/// Insertion-ordered accumulator of tokens for one document
#[derive(Debug, Default)]
pub struct TokenStore {
    tokens: IndexMap<String, Token>,
}

impl TokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a token for writing, creating it on first use
    ///
    /// Writing to an existing name merges into it; unrelated nested
    /// objects that share a property key therefore merge silently.
    pub fn token_mut(&mut self, name: &str) -> &mut Token {
        self.tokens.entry(name.to_string()).or_default()
    }

    /// Look up a token by name
    pub fn get(&self, name: &str) -> Option<&Token> {
        self.tokens.get(name)
    }

    /// Iterate tokens in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Token)> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_creation_and_lookup() {
        let mut store = TokenStore::new();
        assert!(store.is_empty());

        store.token_mut("person").title = Some("Person".to_string());
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get("person").unwrap().title.as_deref(),
            Some("Person")
        );
    }

    #[test]
    fn test_prop_merge_keeps_prior_fields() {
        let mut token = Token::default();
        token.merge_prop(
            "email",
            PropertyDoc {
                name: "email".to_string(),
                type_label: "string".to_string(),
                example: "`\"a@b.c\"`".to_string(),
                ..PropertyDoc::default()
            },
        );
        token.mark_required("email");

        let prop = token.props.get("email").unwrap();
        assert!(prop.required);
        assert_eq!(prop.type_label, "string");
        assert_eq!(prop.example, "`\"a@b.c\"`");
    }

    #[test]
    fn test_required_mark_before_descriptor() {
        let mut token = Token::default();
        token.mark_required("name");
        token.merge_prop(
            "name",
            PropertyDoc {
                name: "name".to_string(),
                type_label: "string".to_string(),
                ..PropertyDoc::default()
            },
        );

        let prop = token.props.get("name").unwrap();
        assert!(prop.required);
        assert_eq!(prop.type_label, "string");
    }

    #[test]
    fn test_props_keep_insertion_order() {
        let mut token = Token::default();
        for key in ["zeta", "alpha", "mid"] {
            token.merge_prop(key, PropertyDoc::default());
        }
        let keys: Vec<_> = token.props.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }
}

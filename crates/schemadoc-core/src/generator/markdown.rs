//! Markdown rendering of a populated token store
//!
//! Renders every token into a linear document: a heading, the
//! description, type and required annotations, and a property table
//! with inline examples.

use crate::tokens::{Token, TokenStore};

/// Markdown generator over one document's tokens
pub struct MarkdownGenerator<'a> {
    store: &'a TokenStore,
}

impl<'a> MarkdownGenerator<'a> {
    /// Create a generator over a populated store
    pub fn new(store: &'a TokenStore) -> Self {
        Self { store }
    }

    /// Render all tokens into one Markdown document
    pub fn generate(&self) -> String {
        let mut doc = String::new();
        for (name, token) in self.store.iter() {
            doc.push_str(&Self::section(name, token));
        }
        doc
    }

    /// Render one token as a section
    fn section(name: &str, token: &Token) -> String {
        let mut out = String::new();

        let heading = token.title.as_deref().unwrap_or(name);
        out.push_str(&format!("## {heading}\n\n"));

        if let Some(description) = &token.description {
            out.push_str(&format!("{description}\n\n"));
        }
        if let Some(type_label) = &token.type_label {
            out.push_str(&format!("**Type:** `{type_label}`\n\n"));
        }
        if !token.required.is_empty() {
            out.push_str(&format!(
                "**Required:** {}\n\n",
                code_list(&token.required)
            ));
        }
        for alternative in &token.required_one_of {
            out.push_str(&format!(
                "**Required (one of):** {}\n\n",
                code_list(alternative)
            ));
        }
        for alternative in &token.required_any_of {
            out.push_str(&format!(
                "**Required (any of):** {}\n\n",
                code_list(alternative)
            ));
        }

        if !token.props.is_empty() {
            out.push_str("| Property | Type | Allowed | Description | Example |\n");
            out.push_str("| --- | --- | --- | --- | --- |\n");
            for prop in token.props.values() {
                let name_cell = if prop.required {
                    format!("**{}** \\*", prop.name)
                } else {
                    prop.name.clone()
                };
                out.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    cell(&name_cell),
                    cell(&prop.type_label),
                    cell(&prop.allowed),
                    cell(&prop.description),
                    cell(&prop.example),
                ));
            }
            if token.props.values().any(|p| p.required) {
                out.push_str("\n\\* required property\n");
            }
            out.push('\n');
        }

        out
    }
}

/// Join names as backticked code spans
fn code_list(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("`{n}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Escape table cell content
fn cell(content: &str) -> String {
    content.replace('|', "\\|").replace('\n', " ")
}

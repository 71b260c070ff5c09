//! Markdown to HTML conversion
//!
//! Thin wrapper over pulldown-cmark with table support. Inline
//! `<br/>` separators produced by the synthesizer pass through as raw
//! HTML, and underscores inside code spans stay literal.

use pulldown_cmark::{html, Options, Parser};

/// Convert a Markdown document to an HTML fragment
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_enabled() {
        let md = "| A | B |\n| --- | --- |\n| 1 | 2 |\n";
        let html = markdown_to_html(md);
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_inline_breaks_pass_through() {
        let html = markdown_to_html("first<br/>second");
        assert!(html.contains("<br/>"));
    }

    #[test]
    fn test_heading_and_code_span() {
        let html = markdown_to_html("## user profile\n\n`\"example\"`\n");
        assert!(html.contains("<h2>user profile</h2>"));
        assert!(html.contains("<code>&quot;example&quot;</code>"));
    }
}

//! Output generation: token store → Markdown → HTML

pub mod html;
pub mod markdown;

pub use html::markdown_to_html;
pub use markdown::MarkdownGenerator;

//! Doctree template engine
//!
//! Templates carry a fixed vocabulary of nested custom tags:
//!
//! ```text
//! <doctree-root>
//!   <doctree-branch-root>          - branch rendering at depth 1
//!     <doctree-branch-root-childs> - where depth-1 children land
//!       <doctree-branch>           - branch rendering below depth 1
//!         <doctree-branch-childs>
//!           <doctree-branch-leaf>  - file entries
//! ```
//!
//! Extraction produces a typed fragment set instead of re-running
//! independent regex passes over the whole document. Duplicate tags
//! are unsupported input; extraction takes the widest region (first
//! open tag to last close tag), so later declarations win.
//!
//! Placeholders: `<doctree-branch-<prop>/>` and `<doctree-leaf-<prop>/>`
//! substitute node attributes, `${itemLevel}`/`${itemIndent}` expose
//! depth, and `${<uri>.itemState}` marks the active page.

use crate::docmap::{DocMap, DocNode};
use regex::Regex;
use std::sync::OnceLock;

/// The five nested sub-templates extracted from one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSet {
    pub branch_root: String,
    pub branch: String,
    pub branch_leaf: String,
}

/// Inner content and outer span of the widest `<tag>...</tag>` region
fn tag_region<'a>(scope: &'a str, tag: &str) -> Option<(usize, usize, &'a str)> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    let start = scope.find(&open)?;
    let end = scope.rfind(&close)?;
    let inner_start = start + open.len();
    if end < inner_start {
        return None;
    }
    Some((start, end + close.len(), &scope[inner_start..end]))
}

fn tag_inner<'a>(scope: &'a str, tag: &str) -> &'a str {
    tag_region(scope, tag).map(|(_, _, inner)| inner).unwrap_or("")
}

/// Replace the whole `<tag>...</tag>` region with `content`
fn replace_tag_region(scope: &str, tag: &str, content: &str) -> String {
    match tag_region(scope, tag) {
        Some((start, end, _)) => format!("{}{}{}", &scope[..start], content, &scope[end..]),
        None => scope.to_string(),
    }
}

impl TemplateSet {
    /// Extract the fragment set from a root region's content
    ///
    /// Missing tags yield empty fragments, matching documents that
    /// only use part of the vocabulary.
    fn from_root(root: &str) -> Self {
        let branch_root = tag_inner(root, "doctree-branch-root");
        let branch = tag_inner(root, "doctree-branch");
        let branch_childs = tag_inner(branch, "doctree-branch-childs");
        let branch_leaf = tag_inner(branch_childs, "doctree-branch-leaf");
        Self {
            branch_root: branch_root.to_string(),
            branch: branch.to_string(),
            branch_leaf: branch_leaf.to_string(),
        }
    }
}

/// Substitution attributes of a node, excluding children
fn node_attrs(node: &DocNode) -> [(&'static str, String); 5] {
    [
        ("name", node.name.clone()),
        ("label", node.label.clone()),
        ("path", node.path.clone()),
        ("uri", node.uri.clone()),
        ("isLeaf", node.is_leaf.to_string()),
    ]
}

fn apply_depth(template: &str, level: usize) -> String {
    template
        .replace("${itemLevel}", &level.to_string())
        .replace("${itemIndent}", if level > 2 { "is-indent" } else { "" })
}

/// Render one node (and its subtree) at the given depth
fn render_node(node: &DocNode, set: &TemplateSet, level: usize) -> String {
    if node.is_leaf {
        let mut part = apply_depth(&set.branch_leaf, level);
        for (prop, value) in node_attrs(node) {
            part = part.replace(&format!("<doctree-leaf-{prop}/>"), &value);
        }
        return part;
    }

    let template = if level > 1 { &set.branch } else { &set.branch_root };
    let mut part = apply_depth(template, level);
    for (prop, value) in node_attrs(node) {
        part = part.replace(&format!("<doctree-branch-{prop}/>"), &value);
    }

    let mut childs = String::new();
    for child in node.childs.values() {
        childs.push_str(&render_node(child, set, level + 1));
    }
    let childs_tag = if level > 1 {
        "doctree-branch-childs"
    } else {
        "doctree-branch-root-childs"
    };
    replace_tag_region(&part, childs_tag, &childs)
}

/// Expand a template against a document map
///
/// The `<doctree-root>` region is replaced with the concatenated
/// renders of all top-level nodes; templates without a root region
/// pass through unchanged.
pub fn expand(map: &DocMap, template: &str) -> String {
    let Some((start, end, root_inner)) = tag_region(template, "doctree-root") else {
        return template.to_string();
    };
    let set = TemplateSet::from_root(root_inner);

    let mut rendered = String::new();
    for node in map.roots().values() {
        rendered.push_str(&render_node(node, &set, 1));
    }

    format!("{}{}{}", &template[..start], rendered, &template[end..])
}

/// Mark the navigation entry for one page as active
///
/// The `${<uri>.itemState}` placeholder matching `uri` becomes
/// `is-active`; every other page's placeholder is cleared.
pub fn apply_active_state(uri: &str, html: &str) -> String {
    static ITEM_STATE: OnceLock<Regex> = OnceLock::new();
    let re = ITEM_STATE.get_or_init(|| Regex::new(r"\$\{[^}]*\.itemState\}").unwrap());

    let marked = html.replace(&format!("${{{uri}.itemState}}"), "is-active");
    re.replace_all(&marked, "").into_owned()
}

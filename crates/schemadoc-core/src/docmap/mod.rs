//! Document map: the in-memory tree mirroring discovered input files
//!
//! Directories become branch nodes, files become leaves. The tree
//! drives doctree navigation rendering and output URI derivation.

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// One file-system entry under the input root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocNode {
    pub name: String,
    /// Name with underscores and dots replaced by spaces
    pub label: String,
    /// Relative path of the entry (directory path for leaves)
    pub path: String,
    /// Output-relative URI: raw relative path for directories,
    /// dot-joined `.html` name for leaves
    pub uri: String,
    pub is_leaf: bool,
    /// Children in insertion order; always empty for leaves
    pub childs: IndexMap<String, DocNode>,
}

impl DocNode {
    fn branch(name: &str, path: String) -> Self {
        Self {
            name: name.to_string(),
            label: display_label(name),
            uri: path.clone(),
            path,
            is_leaf: false,
            childs: IndexMap::new(),
        }
    }

    fn leaf(name: &str, dir: &str) -> Self {
        let uri = if dir.is_empty() {
            format!("{name}.html")
        } else {
            format!("{}.{name}.html", dir.replace('/', "."))
        };
        Self {
            name: name.to_string(),
            label: display_label(name),
            path: dir.to_string(),
            uri,
            is_leaf: true,
            childs: IndexMap::new(),
        }
    }
}

/// Replace underscores and dots with spaces for display
pub fn display_label(name: &str) -> String {
    name.replace(['_', '.'], " ")
}

/// Ordered tree of discovered input files
#[derive(Debug, Default)]
pub struct DocMap {
    roots: IndexMap<String, DocNode>,
}

impl DocMap {
    /// Build a map from discovered files, relative to the input root
    ///
    /// Node creation order follows the order of `files`.
    pub fn build(files: &[PathBuf], input_root: &Path) -> Self {
        let mut map = Self::default();
        for file in files {
            let rel = file.strip_prefix(input_root).unwrap_or(file);
            map.insert(rel);
        }
        map
    }

    /// Insert one relative file path; re-inserting is a no-op
    pub fn insert(&mut self, rel: &Path) {
        let components: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        let Some((file_name, dirs)) = components.split_last() else {
            return;
        };
        let stem = Path::new(file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_name.clone());

        let mut tree = &mut self.roots;
        let mut dir_step = String::new();
        for dir in dirs {
            let path = format!("{dir_step}{dir}");
            tree = &mut tree
                .entry(dir.clone())
                .or_insert_with(|| DocNode::branch(dir, path))
                .childs;
            dir_step = format!("{dir_step}{dir}/");
        }

        let dir_rel = dirs.join("/");
        tree.entry(stem.clone())
            .or_insert_with(|| DocNode::leaf(&stem, &dir_rel));
    }

    /// Top-level nodes in insertion order
    pub fn roots(&self) -> &IndexMap<String, DocNode> {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_file_tree_shape() {
        let files = vec![
            PathBuf::from("/in/a/x.json"),
            PathBuf::from("/in/a/y.json"),
            PathBuf::from("/in/b/z.json"),
        ];
        let map = DocMap::build(&files, Path::new("/in"));

        assert_eq!(map.roots().len(), 2);
        let a = map.roots().get("a").unwrap();
        let b = map.roots().get("b").unwrap();
        assert!(!a.is_leaf);
        assert_eq!(a.childs.len(), 2);
        assert_eq!(b.childs.len(), 1);

        assert_eq!(a.childs.get("x").unwrap().uri, "a.x.html");
        assert_eq!(a.childs.get("y").unwrap().uri, "a.y.html");
        assert_eq!(b.childs.get("z").unwrap().uri, "b.z.html");
    }

    #[test]
    fn test_root_level_file_uri_has_no_leading_dot() {
        let mut map = DocMap::default();
        map.insert(Path::new("config.json"));
        let leaf = map.roots().get("config").unwrap();
        assert!(leaf.is_leaf);
        assert_eq!(leaf.uri, "config.html");
        assert_eq!(leaf.path, "");
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut map = DocMap::default();
        map.insert(Path::new("a/x.json"));
        map.insert(Path::new("a/x.json"));
        assert_eq!(map.roots().len(), 1);
        assert_eq!(map.roots().get("a").unwrap().childs.len(), 1);
    }

    #[test]
    fn test_labels_replace_separator_characters() {
        let mut map = DocMap::default();
        map.insert(Path::new("api_docs/user_profile.json"));
        let branch = map.roots().get("api_docs").unwrap();
        assert_eq!(branch.label, "api docs");
        assert_eq!(branch.uri, "api_docs");
        let leaf = branch.childs.get("user_profile").unwrap();
        assert_eq!(leaf.label, "user profile");
        assert_eq!(leaf.uri, "api_docs.user_profile.html");
    }

    #[test]
    fn test_nested_branch_uri_accumulates() {
        let mut map = DocMap::default();
        map.insert(Path::new("a/b/c.json"));
        let a = map.roots().get("a").unwrap();
        let b = a.childs.get("b").unwrap();
        assert_eq!(b.uri, "a/b");
        assert_eq!(b.childs.get("c").unwrap().uri, "a.b.c.html");
    }
}

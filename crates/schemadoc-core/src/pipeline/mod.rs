//! Pipeline driver: orchestrates walking, generation, and file output
//!
//! Two entry points: [`render_file`] converts a single schema, and
//! [`build_dir`] converts a whole directory tree, wiring the document
//! map and doctree navigation through shared header/footer templates.

use crate::docmap::DocMap;
use crate::doctree;
use crate::error::{Error, Result};
use crate::generator::{markdown_to_html, MarkdownGenerator};
use crate::tokens::TokenStore;
use crate::walker::SchemaWalker;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Options recognized by both pipeline entry points
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Persist output to disk; when false the result is only returned
    pub write_file: bool,
    pub header_file: Option<PathBuf>,
    pub footer_file: Option<PathBuf>,
    /// Index page template, used by directory runs only
    pub index_file: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            write_file: true,
            header_file: None,
            footer_file: None,
            index_file: None,
        }
    }
}

/// Outcome of a directory run
///
/// One malformed schema does not abort the batch; its failure is
/// collected here while the remaining files are still generated.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Output paths of successfully generated pages
    pub generated: Vec<PathBuf>,
    /// Inputs that failed, with the error that stopped each one
    pub failures: Vec<(PathBuf, Error)>,
}

impl BatchReport {
    /// True when every discovered file was generated
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Convert one schema file to an HTML page
///
/// Header and footer templates are read raw (a single file has no
/// document map to expand). Returns the assembled page; when
/// `write_file` is set it is also written to `output`, defaulting to
/// `<stem>.html` in the current directory.
pub fn render_file(input: &Path, output: Option<&Path>, options: &RenderOptions) -> Result<String> {
    if !input.is_file() {
        return Err(Error::missing_input(input.to_path_buf()));
    }

    let body = render_body(input)?;
    let header = read_template(&options.header_file)?;
    let footer = read_template(&options.footer_file)?;
    let page = format!("{header}{body}{footer}");

    if options.write_file {
        let default_name = default_output_name(input);
        let out_path = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(default_name));
        std::fs::write(&out_path, &page).map_err(|e| Error::write(out_path.clone(), e))?;
        tracing::info!(output = %out_path.display(), "Wrote page");
    }

    Ok(page)
}

/// Convert every `.json` schema under a directory
///
/// Discovers input files recursively (sorted by file name), builds the
/// document map, expands doctree navigation into the shared templates,
/// optionally emits `index.html`, and converts each schema with a
/// fresh token store. Per-file failures are logged and collected; the
/// run continues.
pub fn build_dir(input: &Path, output: Option<&Path>, options: &RenderOptions) -> Result<BatchReport> {
    if !input.is_dir() {
        return Err(Error::missing_input(input.to_path_buf()));
    }

    let files = discover(input)?;
    let out_root = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| input.join("md"));

    let map = DocMap::build(&files, input);
    let header = doctree::expand(&map, &read_template(&options.header_file)?);
    let footer = doctree::expand(&map, &read_template(&options.footer_file)?);

    if options.write_file {
        std::fs::create_dir_all(&out_root).map_err(|e| Error::write(out_root.clone(), e))?;
    }

    if let Some(index_template) = &options.index_file {
        if index_template.exists() && options.write_file {
            let index = doctree::expand(&map, &read_template(&options.index_file)?);
            let page = format!(
                "{}{}{}",
                doctree::apply_active_state("index.html", &header),
                doctree::apply_active_state("index.html", &index),
                doctree::apply_active_state("index.html", &footer),
            );
            let index_path = out_root.join("index.html");
            std::fs::write(&index_path, page).map_err(|e| Error::write(index_path.clone(), e))?;
            tracing::info!(output = %index_path.display(), "Wrote index page");
        }
    }

    let total = files.len();
    let mut report = BatchReport::default();
    for (i, file) in files.iter().enumerate() {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        tracing::info!("Processing {} [{}/{}]", name, i + 1, total);

        match generate_page(file, input, &out_root, &header, &footer, options) {
            Ok(out_path) => report.generated.push(out_path),
            Err(e) => {
                tracing::error!(input = %file.display(), error = %e, "Skipping file");
                report.failures.push((file.clone(), e));
            }
        }
    }

    Ok(report)
}

/// Generate one page of a directory run
fn generate_page(
    file: &Path,
    input_root: &Path,
    out_root: &Path,
    header: &str,
    footer: &str,
    options: &RenderOptions,
) -> Result<PathBuf> {
    let body = render_body(file)?;

    let rel = file.strip_prefix(input_root).unwrap_or(file);
    let out_name = flatten_output_name(rel);
    let page = format!(
        "{}{}{}",
        doctree::apply_active_state(&out_name, header),
        body,
        doctree::apply_active_state(&out_name, footer),
    );

    let out_path = out_root.join(&out_name);
    if options.write_file {
        std::fs::write(&out_path, page).map_err(|e| Error::write(out_path.clone(), e))?;
    }
    Ok(out_path)
}

/// Parse, walk, and convert one schema to an HTML body
fn render_body(input: &Path) -> Result<String> {
    let mut walker = SchemaWalker::new(input)?;
    let mut store = TokenStore::new();
    walker.walk(&mut store)?;
    let markdown = MarkdownGenerator::new(&store).generate();
    Ok(markdown_to_html(&markdown))
}

/// Recursively discover `.json` files, sorted by file name
fn discover(input: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(input).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| input.to_path_buf());
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
            Error::io(path, source)
        })?;
        if entry.file_type().is_file()
            && entry.path().extension().and_then(|e| e.to_str()) == Some("json")
        {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Read an optional template file; missing files yield an empty string
fn read_template(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.exists() => {
            std::fs::read_to_string(p).map_err(|e| Error::io(p.clone(), e))
        }
        _ => Ok(String::new()),
    }
}

/// Output name for a single-file run: the input stem plus `.html`
fn default_output_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "schema".to_string());
    format!("{stem}.html")
}

/// Output name for a batch page: relative path flattened with `.`
fn flatten_output_name(rel: &Path) -> String {
    let flat = rel
        .with_extension("")
        .to_string_lossy()
        .replace(['/', '\\'], ".");
    format!("{flat}.html")
}

//! Page generation and static-asset mirroring.
//!
//! A site build has two steps:
//! - the static directory is mirrored into the output directory, which is
//!   deleted and recreated first;
//! - every `.md` file under the content directory is converted, substituted
//!   into the template and written to the same relative path in the output
//!   directory with an `.html` extension.
//!
//! Directory entries are visited in sorted order so builds are reproducible.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, SiteError};
use crate::parser::convert_document;
use crate::title::extract_title;

/// Placeholder replaced with the page title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
/// Placeholder replaced with the rendered page body.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

const MARKDOWN_EXTENSION: &str = "md";
const HTML_EXTENSION: &str = "html";

/// Locations used by [`build_site`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Root of the Markdown sources.
    pub content_dir: PathBuf,
    /// Assets copied verbatim into the output.
    pub static_dir: PathBuf,
    /// HTML template containing the placeholders.
    pub template_path: PathBuf,
    /// Output root. Recreated on every build.
    pub output_dir: PathBuf,
}

/// Counts reported by [`build_site`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub files_copied: usize,
    pub pages_written: usize,
}

/// Substitute the first `{{ Title }}` and the first `{{ Content }}`.
///
/// Later occurrences of either placeholder are left as they are. Both
/// placeholders are located in the template itself, so substituted text is
/// never searched again.
///
/// ```rust
/// use staticmark_core::site::apply_template;
///
/// let page = apply_template("<title>{{ Title }}</title>{{ Content }}", "Hi", "<p>x</p>");
/// assert_eq!(page, "<title>Hi</title><p>x</p>");
/// ```
pub fn apply_template(template: &str, title: &str, content: &str) -> String {
    let mut replacements: Vec<(usize, &str, &str)> = [
        (TITLE_PLACEHOLDER, title),
        (CONTENT_PLACEHOLDER, content),
    ]
    .into_iter()
    .filter_map(|(placeholder, value)| {
        template
            .find(placeholder)
            .map(|pos| (pos, placeholder, value))
    })
    .collect();
    replacements.sort_by_key(|&(pos, _, _)| pos);

    let mut page = String::with_capacity(template.len() + title.len() + content.len());
    let mut cursor = 0;
    for (pos, placeholder, value) in replacements {
        page.push_str(&template[cursor..pos]);
        page.push_str(value);
        cursor = pos + placeholder.len();
    }
    page.push_str(&template[cursor..]);

    page
}

/// Render a Markdown string into a full page.
pub fn render_page(markdown: &str, template: &str) -> Result<String, Error> {
    let title = extract_title(markdown)?;
    let content = convert_document(markdown)?.render()?;
    Ok(apply_template(template, &title, &content))
}

/// Convert one Markdown file into an HTML page at `dest_path`.
///
/// Parent directories of `dest_path` are created as needed.
pub fn generate_page(
    markdown_path: &Path,
    template: &str,
    dest_path: &Path,
) -> Result<(), SiteError> {
    info!(
        from = %markdown_path.display(),
        to = %dest_path.display(),
        "Generating page"
    );

    let markdown =
        fs::read_to_string(markdown_path).map_err(|e| SiteError::io(markdown_path, e))?;

    let page = render_page(&markdown, template).map_err(|source| SiteError::Page {
        path: markdown_path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
    }
    fs::write(dest_path, page).map_err(|e| SiteError::io(dest_path, e))?;

    Ok(())
}

/// Generate a page for every `.md` file under `content_dir`.
///
/// The directory structure is mirrored under `dest_dir`. Files with other
/// extensions are ignored. Returns the number of pages written.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &str,
    dest_dir: &Path,
) -> Result<usize, SiteError> {
    if !content_dir.exists() {
        return Err(SiteError::SourceMissing(content_dir.to_path_buf()));
    }

    let mut written = 0;
    for path in sorted_entries(content_dir)? {
        let Some(name) = path.file_name() else {
            continue;
        };

        if path.is_dir() {
            written += generate_pages_recursive(&path, template, &dest_dir.join(name))?;
        } else if path.extension().is_some_and(|ext| ext == MARKDOWN_EXTENSION) {
            let dest = dest_dir.join(name).with_extension(HTML_EXTENSION);
            generate_page(&path, template, &dest)?;
            written += 1;
        }
    }

    Ok(written)
}

/// Replace `dst` with a recursive copy of `src`.
///
/// Fails with [`SiteError::SourceMissing`] before touching `dst` if `src`
/// does not exist. Returns the number of files copied.
pub fn copy_static(src: &Path, dst: &Path) -> Result<usize, SiteError> {
    if !src.exists() {
        return Err(SiteError::SourceMissing(src.to_path_buf()));
    }

    if dst.exists() {
        debug!(path = %dst.display(), "Removing existing output directory");
        fs::remove_dir_all(dst).map_err(|e| SiteError::io(dst, e))?;
    }

    copy_dir(src, dst)
}

fn copy_dir(src: &Path, dst: &Path) -> Result<usize, SiteError> {
    fs::create_dir_all(dst).map_err(|e| SiteError::io(dst, e))?;

    let mut copied = 0;
    for path in sorted_entries(src)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dst.join(name);

        if path.is_dir() {
            copied += copy_dir(&path, &target)?;
        } else {
            debug!(from = %path.display(), to = %target.display(), "Copying file");
            fs::copy(&path, &target).map_err(|e| SiteError::io(&path, e))?;
            copied += 1;
        }
    }

    Ok(copied)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let entries = fs::read_dir(dir).map_err(|e| SiteError::io(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SiteError::io(dir, e))?;
        paths.push(entry.path());
    }
    paths.sort();

    Ok(paths)
}

/// Mirror static assets, then generate every page.
pub fn build_site(config: &SiteConfig) -> Result<BuildSummary, SiteError> {
    let template = fs::read_to_string(&config.template_path)
        .map_err(|e| SiteError::io(&config.template_path, e))?;

    let files_copied = copy_static(&config.static_dir, &config.output_dir)?;
    let pages_written =
        generate_pages_recursive(&config.content_dir, &template, &config.output_dir)?;

    info!(
        files_copied,
        pages_written,
        output = %config.output_dir.display(),
        "Site built"
    );

    Ok(BuildSummary {
        files_copied,
        pages_written,
    })
}

//! Site configuration from `staticmark.toml`.
//!
//! ```toml
//! [site]
//! content_dir = "content"
//! static_dir = "static"
//! template = "template.html"
//! output_dir = "public"
//! ```
//!
//! Every key is optional. Relative paths resolve against the directory that
//! holds the config file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use staticmark_core::SiteConfig;

use crate::error::CliError;

/// Config file looked up in the working directory when none is given.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "staticmark.toml";

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    pub site: SiteSection,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct SiteSection {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub template: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            template: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub(crate) struct Overrides {
    pub content_dir: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load config from a TOML file.
    ///
    /// An explicitly requested file must exist. Without one, the default file
    /// is read if present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<(Self, PathBuf), CliError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        let base = base_dir(&path);

        match fs::read_to_string(&path) {
            Ok(content) => {
                let config = toml::from_str(&content).map_err(|source| CliError::Config {
                    path: path.clone(),
                    source: Box::new(source),
                })?;
                Ok((config, base))
            }
            Err(e) if e.kind() == ErrorKind::NotFound && !required => {
                Ok((Self::default(), base))
            }
            Err(source) => Err(CliError::Read { path, source }),
        }
    }

    /// Resolve file values against `base` and apply overrides.
    pub fn into_site_config(self, base: &Path, overrides: Overrides) -> SiteConfig {
        let site = self.site;
        SiteConfig {
            content_dir: overrides
                .content_dir
                .unwrap_or_else(|| base.join(site.content_dir)),
            static_dir: overrides
                .static_dir
                .unwrap_or_else(|| base.join(site.static_dir)),
            template_path: overrides
                .template
                .unwrap_or_else(|| base.join(site.template)),
            output_dir: overrides
                .output_dir
                .unwrap_or_else(|| base.join(site.output_dir)),
        }
    }
}

fn base_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

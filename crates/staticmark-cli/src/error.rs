//! CLI error types.

use std::path::PathBuf;

use staticmark_core::{Error, ParseError, SiteError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Convert(#[from] Error),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("{0} error(s) found")]
    Invalid(usize),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

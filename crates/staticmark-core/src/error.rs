//! Error types for the conversion pipeline.
//!
//! Every error is terminal for the conversion in progress: there is no
//! partial or best-effort output.

use std::path::PathBuf;

use crate::span::Span;

/// Error kinds for categorizing parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// An inline delimiter (`**`, `*`, `` ` ``) or a link/image bracket
    /// pair was opened but never closed.
    UnclosedDelimiter,
    /// A code block whose opening and closing fences do not both validate.
    MalformedCodeFence,
}

/// A parse error with its location in the source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}{}", location(.span))]
pub struct ParseError {
    /// Human-readable error message
    pub message: String,
    /// Source location of the block where the error occurred
    pub span: Option<Span>,
    /// Error categorization
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Create an error for an unclosed delimiter.
    pub fn unclosed_delimiter(delimiter: &str, span: Option<Span>) -> Self {
        Self {
            message: format!("unclosed delimiter `{}`", delimiter),
            span,
            kind: ParseErrorKind::UnclosedDelimiter,
        }
    }

    /// Create an error for a code block without matching fences.
    pub fn malformed_code_fence(span: Option<Span>) -> Self {
        Self {
            message: "code block must start and end with ```".to_string(),
            span,
            kind: ParseErrorKind::MalformedCodeFence,
        }
    }

    /// Attach a source location, keeping an existing one.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }
}

fn location(span: &Option<Span>) -> String {
    match span {
        Some(span) => format!(" at bytes {}..{}", span.start, span.end),
        None => String::new(),
    }
}

/// Violations of the HTML node invariants, raised at render time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("parent node has no tag")]
    MissingParentTag,

    #[error("parent node <{tag}> has no children")]
    EmptyChildren { tag: String },

    #[error("leaf node has no value")]
    MissingLeafValue,
}

/// Top-level error for converting and rendering a document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Node(#[from] NodeError),

    #[error("no title: document has no level-1 heading")]
    MissingTitle,
}

/// Errors from the page-generation driver and static-asset mirroring.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("source directory {} does not exist", .0.display())]
    SourceMissing(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to generate page from {}: {source}", .path.display())]
    Page {
        path: PathBuf,
        #[source]
        source: Error,
    },
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

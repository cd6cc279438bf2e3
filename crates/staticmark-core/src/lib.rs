//! # Staticmark Core
//!
//! The rendering core of a small static-site generator: Markdown in, HTML
//! node tree out, HTML string on demand.
//!
//! Conversion runs in one direction:
//!
//! ```text
//! text -> blocks -> inline spans (per block) -> node fragments -> root div -> HTML
//! ```
//!
//! Every stage is a pure function of its input. There is no shared state, so
//! documents can be converted concurrently without coordination.
//!
//! ## Quick Start
//!
//! ```rust
//! use staticmark_core::{convert_document, extract_title};
//!
//! let input = "# Hello World\n\nThis is a **paragraph**.";
//! let root = convert_document(input).unwrap();
//!
//! assert_eq!(
//!     root.render().unwrap(),
//!     "<div><h1>Hello World</h1><p>This is a <b>paragraph</b>.</p></div>"
//! );
//! assert_eq!(extract_title(input).unwrap(), "Hello World");
//! ```
//!
//! ## Errors
//!
//! Malformed input aborts the conversion. There is no best-effort mode:
//!
//! ```rust
//! use staticmark_core::{convert_document, ParseErrorKind};
//!
//! let err = convert_document("Intro\n\nan *unclosed span").unwrap_err();
//! assert_eq!(err.kind, ParseErrorKind::UnclosedDelimiter);
//! assert_eq!(err.to_string(), "unclosed delimiter `*` at bytes 7..24");
//! ```

pub mod ast;
pub mod classify;
pub mod error;
pub mod inline;
pub mod lexer;
pub mod node;
pub mod parser;
pub mod site;
pub mod span;
pub mod title;

pub use ast::{Block, BlockType, Inline, Style};
pub use classify::classify;
pub use error::{Error, NodeError, ParseError, ParseErrorKind, SiteError};
pub use inline::text_to_spans;
pub use lexer::segment;
pub use node::{render, HtmlNode, LeafNode, ParentNode};
pub use parser::{convert_document, markdown_to_html, RootNode};
pub use site::{build_site, SiteConfig};
pub use title::extract_title;

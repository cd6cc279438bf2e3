//! Intermediate representation between Markdown text and HTML nodes.
//!
//! - **Blocks** are trimmed slices of the source, annotated with a
//!   [`BlockType`] at classification time.
//! - **Inlines** are flat, typed fragments of a block's text. They borrow
//!   from the input through `Cow<'a, str>` where possible.
//!
//! Neither outlives a single conversion: both are consumed immediately into
//! HTML nodes.

use crate::span::Span;

/// Borrowed or owned string type for zero-copy tokenizing.
pub type CowStr<'a> = std::borrow::Cow<'a, str>;

/// Structural type of a block, decided by its prefix and shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// `#` to `######` followed by a space. Holds the level (1-6).
    Heading(u8),
    /// Starts and ends with a triple-backtick fence.
    CodeFence,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `* ` or `- `.
    UnorderedList,
    /// Lines are numbered `1. `, `2. `, `3. `, ... without gaps.
    OrderedList,
    /// Anything else.
    Paragraph,
}

impl BlockType {
    /// Short lowercase name, used in diagnostics and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            BlockType::Heading(_) => "heading",
            BlockType::CodeFence => "code",
            BlockType::Quote => "quote",
            BlockType::UnorderedList => "unordered_list",
            BlockType::OrderedList => "ordered_list",
            BlockType::Paragraph => "paragraph",
        }
    }
}

/// A classified block of the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Structural type.
    pub kind: BlockType,
    /// Block text, trimmed of surrounding whitespace.
    pub text: &'a str,
    /// Source span of `text`.
    pub span: Span,
}

impl<'a> Block<'a> {
    /// Split the block into lines on `\n`.
    #[inline]
    pub fn lines(&self) -> std::str::Split<'a, char> {
        self.text.split('\n')
    }
}

/// Inline fragment of text.
///
/// Spans are immutable values compared structurally. Only links and images
/// carry a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline<'a> {
    /// Plain text, passed through verbatim.
    Text(CowStr<'a>),
    /// `**bold**`
    Bold(CowStr<'a>),
    /// `*italic*`
    Italic(CowStr<'a>),
    /// `` `code` ``
    Code(CowStr<'a>),
    /// `[text](url)`
    Link { text: CowStr<'a>, url: CowStr<'a> },
    /// `![alt](url)`
    Image { alt: CowStr<'a>, url: CowStr<'a> },
}

impl<'a> Inline<'a> {
    /// Create a plain text span.
    pub fn text(text: impl Into<CowStr<'a>>) -> Self {
        Inline::Text(text.into())
    }

    /// Create a link span.
    pub fn link(text: impl Into<CowStr<'a>>, url: impl Into<CowStr<'a>>) -> Self {
        Inline::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    /// Create an image span.
    pub fn image(alt: impl Into<CowStr<'a>>, url: impl Into<CowStr<'a>>) -> Self {
        Inline::Image {
            alt: alt.into(),
            url: url.into(),
        }
    }

    /// The span's text (alt text for images).
    pub fn content(&self) -> &str {
        match self {
            Inline::Text(t) | Inline::Bold(t) | Inline::Italic(t) | Inline::Code(t) => t.as_ref(),
            Inline::Link { text, .. } => text.as_ref(),
            Inline::Image { alt, .. } => alt.as_ref(),
        }
    }

    /// The span's URL, present only for links and images.
    pub fn url(&self) -> Option<&str> {
        match self {
            Inline::Link { url, .. } | Inline::Image { url, .. } => Some(url.as_ref()),
            _ => None,
        }
    }

    /// Short lowercase name of the variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Inline::Text(_) => "text",
            Inline::Bold(_) => "bold",
            Inline::Italic(_) => "italic",
            Inline::Code(_) => "code",
            Inline::Link { .. } => "link",
            Inline::Image { .. } => "image",
        }
    }
}

/// Delimiter-based inline styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Italic,
    Code,
}

impl Style {
    /// The Markdown delimiter for this style.
    pub const fn delimiter(self) -> &'static str {
        match self {
            Style::Bold => "**",
            Style::Italic => "*",
            Style::Code => "`",
        }
    }

    /// Wrap text in a span of this style.
    pub fn wrap<'a>(self, text: CowStr<'a>) -> Inline<'a> {
        match self {
            Style::Bold => Inline::Bold(text),
            Style::Italic => Inline::Italic(text),
            Style::Code => Inline::Code(text),
        }
    }
}

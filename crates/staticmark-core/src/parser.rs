//! Block-to-tree compiler.
//!
//! Segments a document, classifies each block and builds the matching HTML
//! fragment, delegating inline text to [`crate::inline`]. All fragments are
//! collected in source order under a single root `div`.

use tracing::{debug, trace};

use crate::ast::{Block, BlockType, CowStr, Inline};
use crate::classify::{classify_block, ordered_marker, FENCE};
use crate::error::{Error, ParseError};
use crate::inline::text_to_spans;
use crate::lexer::Lexer;
use crate::node::{HtmlNode, LeafNode, ParentNode};

/// The root node returned by [`convert_document`].
pub type RootNode = ParentNode;

/// Tag of the root container node.
pub const ROOT_TAG: &str = "div";

/// Characters stripped ahead of code block content: the fence and the
/// character after it.
const CODE_OPEN_LEN: usize = 4;

/// Segment and classify a document.
pub fn parse_blocks(markdown: &str) -> Vec<Block<'_>> {
    Lexer::new(markdown)
        .map(|raw| {
            let block = classify_block(raw);
            debug!(
                kind = block.kind.name(),
                start = block.span.start,
                end = block.span.end,
                "classified block"
            );
            block
        })
        .collect()
}

/// Convert a Markdown document into an HTML node tree rooted at a `div`.
///
/// ```rust
/// use staticmark_core::convert_document;
///
/// let root = convert_document("# Title\n\nSome **bold** text").unwrap();
/// assert_eq!(
///     root.render().unwrap(),
///     "<div><h1>Title</h1><p>Some <b>bold</b> text</p></div>"
/// );
/// ```
pub fn convert_document(markdown: &str) -> Result<RootNode, ParseError> {
    let blocks = parse_blocks(markdown);

    let mut children = Vec::with_capacity(blocks.len());
    for block in &blocks {
        children.push(block_to_node(block)?);
    }

    trace!(blocks = children.len(), "converted document");
    Ok(ParentNode::new(ROOT_TAG, children))
}

/// Convert and render a document in one step.
pub fn markdown_to_html(markdown: &str) -> Result<String, Error> {
    let root = convert_document(markdown)?;
    Ok(root.render()?)
}

/// Build the HTML fragment for one classified block.
///
/// Errors carry the block's source span.
pub fn block_to_node(block: &Block<'_>) -> Result<HtmlNode, ParseError> {
    build_block(block).map_err(|err| err.with_span(block.span))
}

fn build_block(block: &Block<'_>) -> Result<HtmlNode, ParseError> {
    let runs = inline_runs(block)?;

    let node = match block.kind {
        BlockType::UnorderedList | BlockType::OrderedList => {
            let tag = if block.kind == BlockType::OrderedList {
                "ol"
            } else {
                "ul"
            };
            let mut items = Vec::with_capacity(runs.len());
            for run in &runs {
                items.push(ParentNode::new("li", text_to_children(run)?).into());
            }
            ParentNode::new(tag, items)
        }
        BlockType::CodeFence => {
            let code = ParentNode::new("code", runs_to_children(&runs)?);
            ParentNode::new("pre", vec![code.into()])
        }
        BlockType::Heading(level) => {
            ParentNode::new(format!("h{}", level), runs_to_children(&runs)?)
        }
        BlockType::Quote => ParentNode::new("blockquote", runs_to_children(&runs)?),
        BlockType::Paragraph => ParentNode::new("p", runs_to_children(&runs)?),
    };

    Ok(node.into())
}

/// The text runs of a block that go through the inline tokenizer: one per
/// list item, a single run for every other block type.
///
/// Block markers are stripped here. A quote line loses its `>` and at most
/// one following space. Paragraph and quote lines are joined with single
/// spaces.
pub fn inline_runs<'a>(block: &Block<'a>) -> Result<Vec<CowStr<'a>>, ParseError> {
    let runs: Vec<CowStr<'a>> = match block.kind {
        BlockType::Paragraph => vec![block.lines().collect::<Vec<_>>().join(" ").into()],
        BlockType::Heading(level) => {
            // The classifier guarantees `level` hashes and a space.
            vec![block.text.get(level as usize + 1..).unwrap_or_default().into()]
        }
        BlockType::UnorderedList => block
            .lines()
            .map(|line| {
                line.strip_prefix("* ")
                    .or_else(|| line.strip_prefix("- "))
                    .unwrap_or(line)
                    .into()
            })
            .collect(),
        BlockType::OrderedList => block
            .lines()
            .enumerate()
            .map(|(i, line)| {
                line.strip_prefix(ordered_marker(i).as_str())
                    .unwrap_or(line)
                    .into()
            })
            .collect(),
        BlockType::Quote => {
            let text = block
                .lines()
                .map(|line| {
                    let line = line.strip_prefix('>').unwrap_or(line);
                    line.strip_prefix(' ').unwrap_or(line).trim_end()
                })
                .collect::<Vec<_>>()
                .join(" ");
            vec![text.into()]
        }
        BlockType::CodeFence => vec![code_content(block)?.into()],
    };

    Ok(runs)
}

fn code_content<'a>(block: &Block<'a>) -> Result<&'a str, ParseError> {
    let text = block.text;
    if !text.starts_with(FENCE) || !text.ends_with(FENCE) {
        return Err(ParseError::malformed_code_fence(Some(block.span)));
    }

    let start = text
        .char_indices()
        .nth(CODE_OPEN_LEN)
        .map_or(text.len(), |(i, _)| i);
    let end = text.len() - FENCE.len();

    Ok(text.get(start..end).unwrap_or_default())
}

fn runs_to_children(runs: &[CowStr<'_>]) -> Result<Vec<HtmlNode>, ParseError> {
    let mut children = Vec::new();
    for run in runs {
        children.extend(text_to_children(run)?);
    }
    Ok(children)
}

fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    Ok(text_to_spans(text)?
        .iter()
        .map(|span| inline_to_node(span).into())
        .collect())
}

/// Map an inline span to its leaf node.
pub fn inline_to_node(span: &Inline<'_>) -> LeafNode {
    match span {
        Inline::Text(text) => LeafNode::raw(text.as_ref()),
        Inline::Bold(text) => LeafNode::new("b", text.as_ref()),
        Inline::Italic(text) => LeafNode::new("i", text.as_ref()),
        Inline::Code(text) => LeafNode::new("code", text.as_ref()),
        Inline::Link { text, url } => {
            LeafNode::new("a", text.as_ref()).with_attribute("href", url.as_ref())
        }
        Inline::Image { alt, url } => LeafNode::new("img", "")
            .with_attribute("src", url.as_ref())
            .with_attribute("alt", alt.as_ref()),
    }
}

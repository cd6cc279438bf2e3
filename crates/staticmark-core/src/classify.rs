//! Block classification.
//!
//! `classify` is a pure, total function: every string maps to exactly one
//! [`BlockType`]. Rules are tried in priority order and the first match wins:
//!
//! 1. heading: one to six `#` followed by a space
//! 2. code fence: starts and ends with ```` ``` ````, fences not overlapping
//! 3. quote: every line starts with `>`
//! 4. unordered list: every line starts with `* ` or `- `
//! 5. ordered list: lines numbered `1. `, `2. `, ... strictly by one
//! 6. paragraph

use crate::ast::{Block, BlockType};
use crate::lexer::RawBlock;

/// Triple-backtick fence delimiting a code block.
pub const FENCE: &str = "```";

const MAX_HEADING_LEVEL: usize = 6;

/// Classify a block by its prefix and shape.
pub fn classify(block: &str) -> BlockType {
    if let Some(level) = heading_level(block) {
        return BlockType::Heading(level);
    }

    if is_code_fence(block) {
        return BlockType::CodeFence;
    }

    if block.split('\n').all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }

    if block.split('\n').all(is_bullet_line) {
        return BlockType::UnorderedList;
    }

    if is_ordered_list(block) {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

/// Classify a segmented block, keeping its text and span.
#[inline]
pub fn classify_block(raw: RawBlock<'_>) -> Block<'_> {
    Block {
        kind: classify(raw.text),
        text: raw.text,
        span: raw.span,
    }
}

/// Level of a heading line: the run of leading `#` (1-6) when followed by a
/// space.
pub fn heading_level(block: &str) -> Option<u8> {
    let bytes = block.as_bytes();
    let level = bytes.iter().take_while(|&&b| b == b'#').count();

    if level == 0 || level > MAX_HEADING_LEVEL {
        return None;
    }

    match bytes.get(level) {
        Some(b' ') => Some(level as u8),
        _ => None,
    }
}

/// Whether the block both opens and closes with a fence.
pub fn is_code_fence(block: &str) -> bool {
    block.len() >= 2 * FENCE.len() && block.starts_with(FENCE) && block.ends_with(FENCE)
}

#[inline]
fn is_bullet_line(line: &str) -> bool {
    line.starts_with("* ") || line.starts_with("- ")
}

/// The marker expected on the line at `index` (0-based) of an ordered list.
#[inline]
pub fn ordered_marker(index: usize) -> String {
    format!("{}. ", index + 1)
}

fn is_ordered_list(block: &str) -> bool {
    block
        .split('\n')
        .enumerate()
        .all(|(i, line)| line.starts_with(&ordered_marker(i)))
}

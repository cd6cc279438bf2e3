//! Inline tokenizer.
//!
//! Converts a run of text into a flat sequence of [`Inline`] spans. The
//! tokenizer is a pipeline of pure stages, applied strictly in this order:
//!
//! 1. images `![alt](url)`
//! 2. links `[text](url)`
//! 3. bold `**`
//! 4. italic `*`
//! 5. code `` ` ``
//!
//! Each stage rewrites only `Text` spans and passes every other span through
//! untouched, so source order is preserved across the whole pipeline.
//! Spans borrow from the input whenever the input is borrowed.

use std::ops::Range;
use std::sync::LazyLock;

use memchr::memmem;
use regex::Regex;

use crate::ast::{CowStr, Inline, Style};
use crate::error::ParseError;

// URLs may hold one level of balanced parentheses: `[a](http://x/(y))`.
static IMAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\[\]]*)\]\(((?:[^()]|\([^()]*\))*)\)").unwrap()
});

static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\[\]]*)\]\(((?:[^()]|\([^()]*\))*)\)").unwrap()
});

/// A `[..](` opener whose parenthesis never closes before the end of the span.
static UNCLOSED_LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\[\]]*\]\([^)]*$").unwrap());

/// Delimiter named in the error for an unclosed image or link.
const DANGLING_LINK: &str = "](";

/// Tokenize text into inline spans.
///
/// ```rust
/// use staticmark_core::inline::text_to_spans;
/// use staticmark_core::Inline;
///
/// let spans = text_to_spans("a **b** c").unwrap();
/// assert_eq!(
///     spans,
///     vec![Inline::text("a "), Inline::Bold("b".into()), Inline::text(" c")]
/// );
/// ```
pub fn text_to_spans(text: &str) -> Result<Vec<Inline<'_>>, ParseError> {
    let spans = vec![Inline::text(text)];
    let spans = split_images(spans)?;
    let spans = split_links(spans)?;
    let spans = split_delimiter(spans, Style::Bold.delimiter(), Style::Bold)?;
    let spans = split_delimiter(spans, Style::Italic.delimiter(), Style::Italic)?;
    split_delimiter(spans, Style::Code.delimiter(), Style::Code)
}

/// Find every `![alt](url)` in `text`, returning `(alt, url)` pairs.
pub fn extract_images(text: &str) -> Vec<(&str, &str)> {
    extract(&IMAGE_PATTERN, text)
}

/// Find every `[text](url)` in `text`, returning `(text, url)` pairs.
///
/// Run on text that still contains images, this also matches the bracket
/// part of each image; the pipeline extracts images first for that reason.
pub fn extract_links(text: &str) -> Vec<(&str, &str)> {
    extract(&LINK_PATTERN, text)
}

fn extract<'t>(pattern: &Regex, text: &'t str) -> Vec<(&'t str, &'t str)> {
    pattern
        .captures_iter(text)
        .filter_map(|caps| {
            let label = caps.get(1)?.as_str();
            let url = caps.get(2)?.as_str();
            Some((label, url))
        })
        .collect()
}

/// Split image syntax out of every text span.
pub fn split_images(spans: Vec<Inline<'_>>) -> Result<Vec<Inline<'_>>, ParseError> {
    Ok(split_pattern(spans, &IMAGE_PATTERN, |alt, url| {
        Inline::Image { alt, url }
    }))
}

/// Split link syntax out of every text span.
///
/// Fails if a text span is left with a `[text](` opener that never closed.
/// A stray `](` without an opening bracket is plain text.
pub fn split_links(spans: Vec<Inline<'_>>) -> Result<Vec<Inline<'_>>, ParseError> {
    let spans = split_pattern(spans, &LINK_PATTERN, |text, url| Inline::Link { text, url });

    let dangling = spans
        .iter()
        .any(|span| matches!(span, Inline::Text(t) if UNCLOSED_LINK_PATTERN.is_match(t)));
    if dangling {
        return Err(ParseError::unclosed_delimiter(DANGLING_LINK, None));
    }

    Ok(spans)
}

fn split_pattern<'a>(
    spans: Vec<Inline<'a>>,
    pattern: &Regex,
    make: fn(CowStr<'a>, CowStr<'a>) -> Inline<'a>,
) -> Vec<Inline<'a>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            Inline::Text(text) => text,
            other => {
                result.push(other);
                continue;
            }
        };

        let matches: Vec<(Range<usize>, Range<usize>, Range<usize>)> = pattern
            .captures_iter(&text)
            .filter_map(|caps| {
                let whole = caps.get(0)?.range();
                let label = caps.get(1)?.range();
                let url = caps.get(2)?.range();
                Some((whole, label, url))
            })
            .collect();

        if matches.is_empty() {
            result.push(Inline::Text(text));
            continue;
        }

        let mut cursor = 0;
        for (whole, label, url) in matches {
            if cursor < whole.start {
                result.push(Inline::Text(sub(&text, cursor..whole.start)));
            }
            result.push(make(sub(&text, label), sub(&text, url)));
            cursor = whole.end;
        }
        if cursor < text.len() {
            result.push(Inline::Text(sub(&text, cursor..text.len())));
        }
    }

    result
}

/// Split every text span on `delimiter`, wrapping alternate segments in
/// `style`.
///
/// The delimiter must come in closed pairs: an odd number of occurrences is
/// an unclosed delimiter. Empty segments are dropped. An empty delimiter
/// passes the spans through unchanged.
///
/// ```rust
/// use staticmark_core::inline::split_delimiter;
/// use staticmark_core::{Inline, Style};
///
/// let spans = split_delimiter(vec![Inline::text("a `b")], "`", Style::Code);
/// assert!(spans.is_err());
/// ```
pub fn split_delimiter<'a>(
    spans: Vec<Inline<'a>>,
    delimiter: &str,
    style: Style,
) -> Result<Vec<Inline<'a>>, ParseError> {
    if delimiter.is_empty() {
        return Ok(spans);
    }

    let finder = memmem::Finder::new(delimiter);
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            Inline::Text(text) => text,
            other => {
                result.push(other);
                continue;
            }
        };

        let mut segments = Vec::new();
        let mut start = 0;
        for pos in finder.find_iter(text.as_bytes()) {
            segments.push(start..pos);
            start = pos + delimiter.len();
        }
        segments.push(start..text.len());

        if segments.len() % 2 == 0 {
            return Err(ParseError::unclosed_delimiter(delimiter, None));
        }

        for (i, range) in segments.into_iter().enumerate() {
            if range.is_empty() {
                continue;
            }
            let piece = sub(&text, range);
            if i % 2 == 0 {
                result.push(Inline::Text(piece));
            } else {
                result.push(style.wrap(piece));
            }
        }
    }

    Ok(result)
}

/// Take a sub-range of a span's text, borrowing when the text is borrowed.
#[inline]
fn sub<'a>(text: &CowStr<'a>, range: Range<usize>) -> CowStr<'a> {
    match text {
        CowStr::Borrowed(s) => {
            let s: &'a str = *s;
            CowStr::Borrowed(&s[range])
        }
        CowStr::Owned(s) => CowStr::Owned(s[range].to_owned()),
    }
}

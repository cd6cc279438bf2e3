//! Integration tests for the inline tokenizer

use std::borrow::Cow;

use pretty_assertions::assert_eq;
use rstest::rstest;
use staticmark_core::inline::{
    extract_images, extract_links, split_delimiter, split_images, split_links,
};
use staticmark_core::{text_to_spans, Inline, ParseErrorKind, Style};

// ============================================================================
// Delimiter Split Tests
// ============================================================================

#[test]
fn test_split_bold() {
    let spans = split_delimiter(vec![Inline::text("a **b** c")], "**", Style::Bold).unwrap();
    assert_eq!(
        spans,
        vec![
            Inline::text("a "),
            Inline::Bold("b".into()),
            Inline::text(" c")
        ]
    );
}

#[test]
fn test_split_multiple_pairs() {
    let spans = split_delimiter(
        vec![Inline::text("`one` and `two`")],
        "`",
        Style::Code,
    )
    .unwrap();
    assert_eq!(
        spans,
        vec![
            Inline::Code("one".into()),
            Inline::text(" and "),
            Inline::Code("two".into()),
        ]
    );
}

#[test]
fn test_split_unclosed_code_fails() {
    let err = split_delimiter(vec![Inline::text("a `b")], "`", Style::Code).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnclosedDelimiter);
    assert_eq!(err.message, "unclosed delimiter ```");
    assert!(err.span.is_none());
}

#[test]
fn test_split_three_delimiters_fails() {
    assert!(split_delimiter(vec![Inline::text("*a* *b")], "*", Style::Italic).is_err());
}

#[test]
fn test_split_empty_delimiter_is_noop() {
    let spans = vec![Inline::text("a *b* c"), Inline::Bold("x".into())];
    let result = split_delimiter(spans.clone(), "", Style::Italic).unwrap();
    assert_eq!(result, spans);
}

#[test]
fn test_split_drops_empty_segments() {
    let spans = split_delimiter(vec![Inline::text("**bold**")], "**", Style::Bold).unwrap();
    assert_eq!(spans, vec![Inline::Bold("bold".into())]);
}

#[test]
fn test_split_empty_pair_yields_nothing() {
    let spans = split_delimiter(vec![Inline::text("a``b")], "`", Style::Code).unwrap();
    assert_eq!(spans, vec![Inline::text("a"), Inline::text("b")]);
}

#[test]
fn test_split_passes_non_text_through() {
    let spans = vec![
        Inline::Code("*not italic*".into()),
        Inline::text("*yes*"),
    ];
    let result = split_delimiter(spans, "*", Style::Italic).unwrap();
    assert_eq!(
        result,
        vec![
            Inline::Code("*not italic*".into()),
            Inline::Italic("yes".into()),
        ]
    );
}

#[test]
fn test_split_borrows_from_input() {
    let spans = split_delimiter(vec![Inline::text("a *b*")], "*", Style::Italic).unwrap();
    assert!(matches!(&spans[1], Inline::Italic(Cow::Borrowed("b"))));
}

// ============================================================================
// Image and Link Extraction Tests
// ============================================================================

#[test]
fn test_extract_images() {
    let text = "This is text with a ![rick roll](https://i.imgur.com/aKaOqIh.gif) and ![obi wan](https://i.imgur.com/fJRm4Vk.jpeg)";
    assert_eq!(
        extract_images(text),
        vec![
            ("rick roll", "https://i.imgur.com/aKaOqIh.gif"),
            ("obi wan", "https://i.imgur.com/fJRm4Vk.jpeg"),
        ]
    );
}

#[test]
fn test_extract_links() {
    let text = "This is text with a link [to boot dev](https://www.boot.dev) and [to youtube](https://www.youtube.com/@bootdotdev)";
    assert_eq!(
        extract_links(text),
        vec![
            ("to boot dev", "https://www.boot.dev"),
            ("to youtube", "https://www.youtube.com/@bootdotdev"),
        ]
    );
}

#[test]
fn test_split_images() {
    let spans = split_images(vec![Inline::text(
        "Look ![benji smile](https://a.dev) then ![benji bark](https://b.dev)",
    )])
    .unwrap();
    assert_eq!(
        spans,
        vec![
            Inline::text("Look "),
            Inline::image("benji smile", "https://a.dev"),
            Inline::text(" then "),
            Inline::image("benji bark", "https://b.dev"),
        ]
    );
}

#[test]
fn test_split_links_keeps_trailing_text() {
    let spans = split_links(vec![Inline::text("[a](u) tail")]).unwrap();
    assert_eq!(spans, vec![Inline::link("a", "u"), Inline::text(" tail")]);
}

#[test]
fn test_split_links_unclosed_fails() {
    let err = split_links(vec![Inline::text("see [here](http://x")]).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnclosedDelimiter);
    assert_eq!(err.message, "unclosed delimiter `](`");
}

#[test]
fn test_split_links_stray_close_bracket_is_text() {
    let spans = split_links(vec![Inline::text("see ](here")]).unwrap();
    assert_eq!(spans, vec![Inline::text("see ](here")]);

    assert_eq!(
        text_to_spans("a ] b ( c ](").unwrap(),
        vec![Inline::text("a ] b ( c ](")]
    );
}

#[test]
fn test_split_links_unclosed_after_closed_pair_fails() {
    let err = split_links(vec![Inline::text("[a](u) and [b](v")]).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnclosedDelimiter);
}

#[test]
fn test_link_url_with_parentheses() {
    assert_eq!(
        text_to_spans("[a](http://x/(y))").unwrap(),
        vec![Inline::link("a", "http://x/(y)")]
    );
    assert_eq!(
        extract_links("see [wiki](https://en.wikipedia.org/wiki/Rust_(language)) now"),
        vec![("wiki", "https://en.wikipedia.org/wiki/Rust_(language)")]
    );
}

#[test]
fn test_image_url_with_parentheses() {
    assert_eq!(
        text_to_spans("![cat](img/cat_(1).png) done").unwrap(),
        vec![Inline::image("cat", "img/cat_(1).png"), Inline::text(" done")]
    );
}

#[test]
fn test_image_is_not_also_a_link() {
    let spans = text_to_spans("![alt](u)").unwrap();
    assert_eq!(spans, vec![Inline::image("alt", "u")]);
}

#[test]
fn test_links_alone_would_match_image_brackets() {
    // Without image extraction first, the bracket part of an image matches
    // the link pattern and leaves a stray `!`.
    let spans = split_links(vec![Inline::text("![alt](u)")]).unwrap();
    assert_eq!(spans, vec![Inline::text("!"), Inline::link("alt", "u")]);
}

// ============================================================================
// Full Pipeline Tests
// ============================================================================

#[test]
fn test_text_to_spans_all_kinds() {
    let text = "This is **text** with an *italic* word and a `code block` and an ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)";
    assert_eq!(
        text_to_spans(text).unwrap(),
        vec![
            Inline::text("This is "),
            Inline::Bold("text".into()),
            Inline::text(" with an "),
            Inline::Italic("italic".into()),
            Inline::text(" word and a "),
            Inline::Code("code block".into()),
            Inline::text(" and an "),
            Inline::image("obi wan image", "https://i.imgur.com/fJRm4Vk.jpeg"),
            Inline::text(" and a "),
            Inline::link("link", "https://boot.dev"),
        ]
    );
}

#[test]
fn test_delimiters_inside_link_text_are_left_alone() {
    assert_eq!(
        text_to_spans("[**x**](u)").unwrap(),
        vec![Inline::link("**x**", "u")]
    );
}

#[test]
fn test_triple_star_is_not_bold_italic() {
    // `**` pairs first, leaving a lone `*` in the trailing text.
    let spans = split_delimiter(vec![Inline::text("***x***")], "**", Style::Bold).unwrap();
    assert_eq!(spans, vec![Inline::Bold("*x".into()), Inline::text("*")]);

    let err = text_to_spans("***x***").unwrap_err();
    assert_eq!(err.message, "unclosed delimiter `*`");
}

#[rstest]
#[case("plain", vec![Inline::text("plain")])]
#[case("", vec![])]
#[case("**b**", vec![Inline::Bold("b".into())])]
#[case("*i*", vec![Inline::Italic("i".into())])]
#[case("`c`", vec![Inline::Code("c".into())])]
fn test_text_to_spans_single(#[case] text: &str, #[case] expected: Vec<Inline<'static>>) {
    assert_eq!(text_to_spans(text).unwrap(), expected);
}

#[rstest]
#[case("**open")]
#[case("*open")]
#[case("`open")]
#[case("[open](url")]
#[case("![open](url")]
#[case("[open](http://x/(y)")]
fn test_text_to_spans_unclosed(#[case] text: &str) {
    let err = text_to_spans(text).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnclosedDelimiter);
}

#[test]
fn test_span_accessors() {
    let link = Inline::link("text", "https://x");
    assert_eq!(link.content(), "text");
    assert_eq!(link.url(), Some("https://x"));
    assert_eq!(link.kind_name(), "link");

    let bold = Inline::Bold("b".into());
    assert_eq!(bold.url(), None);
    assert_eq!(bold.kind_name(), "bold");
}

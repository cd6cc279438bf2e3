//! Integration tests for the HTML node model

use pretty_assertions::assert_eq;
use staticmark_core::node::attributes_to_html;
use staticmark_core::parser::inline_to_node;
use staticmark_core::{render, HtmlNode, Inline, LeafNode, NodeError, ParentNode};

// ============================================================================
// Leaf Node Tests
// ============================================================================

#[test]
fn test_leaf_with_tag() {
    let leaf = LeafNode::new("p", "This is a paragraph of text.");
    assert_eq!(leaf.render().unwrap(), "<p>This is a paragraph of text.</p>");
}

#[test]
fn test_leaf_with_attribute() {
    let leaf = LeafNode::new("a", "Click me!").with_attribute("href", "https://www.google.com");
    assert_eq!(
        leaf.render().unwrap(),
        r#"<a href="https://www.google.com">Click me!</a>"#
    );
}

#[test]
fn test_leaf_without_tag_is_raw() {
    assert_eq!(LeafNode::raw("just text").render().unwrap(), "just text");
}

#[test]
fn test_leaf_empty_value_is_allowed() {
    assert_eq!(LeafNode::new("img", "").render().unwrap(), "<img></img>");
}

#[test]
fn test_leaf_without_value_fails() {
    let leaf = LeafNode {
        tag: Some("p".to_string()),
        ..Default::default()
    };
    assert_eq!(leaf.render(), Err(NodeError::MissingLeafValue));
}

// ============================================================================
// Parent Node Tests
// ============================================================================

#[test]
fn test_parent_with_mixed_children() {
    let node = ParentNode::new(
        "p",
        vec![
            LeafNode::new("b", "Bold text").into(),
            LeafNode::raw("Normal text").into(),
            LeafNode::new("i", "italic text").into(),
            LeafNode::raw("Normal text").into(),
        ],
    );
    assert_eq!(
        node.render().unwrap(),
        "<p><b>Bold text</b>Normal text<i>italic text</i>Normal text</p>"
    );
}

#[test]
fn test_nested_parents() {
    let inner = ParentNode::new("li", vec![LeafNode::raw("item").into()]);
    let outer = ParentNode::new("ul", vec![inner.into()]).with_attribute("class", "list");
    assert_eq!(
        outer.render().unwrap(),
        r#"<ul class="list"><li>item</li></ul>"#
    );
}

#[test]
fn test_parent_push() {
    let mut node = ParentNode::new("div", Vec::new());
    node.push(LeafNode::raw("a"));
    node.push(ParentNode::new("span", vec![LeafNode::raw("b").into()]));
    assert_eq!(node.render().unwrap(), "<div>a<span>b</span></div>");
}

#[test]
fn test_parent_without_children_fails() {
    let node = ParentNode::new("ul", Vec::new());
    assert_eq!(
        node.render(),
        Err(NodeError::EmptyChildren {
            tag: "ul".to_string()
        })
    );
}

#[test]
fn test_parent_without_tag_fails() {
    let node = ParentNode {
        tag: None,
        children: vec![LeafNode::raw("x").into()],
        attributes: Vec::new(),
    };
    assert_eq!(node.render(), Err(NodeError::MissingParentTag));
}

#[test]
fn test_child_error_propagates() {
    let bad_child = ParentNode::new("li", Vec::new());
    let node = ParentNode::new("ul", vec![bad_child.into()]);
    assert_eq!(
        node.render(),
        Err(NodeError::EmptyChildren {
            tag: "li".to_string()
        })
    );
}

#[test]
fn test_error_messages_name_the_invariant() {
    assert_eq!(NodeError::MissingParentTag.to_string(), "parent node has no tag");
    assert_eq!(
        NodeError::EmptyChildren {
            tag: "ol".to_string()
        }
        .to_string(),
        "parent node <ol> has no children"
    );
    assert_eq!(NodeError::MissingLeafValue.to_string(), "leaf node has no value");
}

// ============================================================================
// Attribute and Render Tests
// ============================================================================

#[test]
fn test_attributes_keep_insertion_order() {
    let attributes = vec![
        ("href".to_string(), "https://www.google.com".to_string()),
        ("target".to_string(), "_blank".to_string()),
    ];
    assert_eq!(
        attributes_to_html(&attributes),
        r#" href="https://www.google.com" target="_blank""#
    );
    assert_eq!(attributes_to_html(&Vec::new()), "");
}

#[test]
fn test_free_render_matches_method() {
    let node: HtmlNode = ParentNode::new("p", vec![LeafNode::raw("x").into()]).into();
    assert_eq!(render(&node).unwrap(), node.render().unwrap());
    assert_eq!(node.tag(), Some("p"));
}

#[test]
fn test_render_twice_is_identical() {
    let node: HtmlNode = ParentNode::new(
        "div",
        vec![
            ParentNode::new("p", vec![LeafNode::new("b", "x").into()]).into(),
            LeafNode::new("a", "y").with_attribute("href", "z").into(),
        ],
    )
    .into();
    assert_eq!(render(&node).unwrap(), render(&node).unwrap());
}

// ============================================================================
// Span to Node Mapping Tests
// ============================================================================

#[test]
fn test_inline_to_node_mapping() {
    assert_eq!(inline_to_node(&Inline::text("t")), LeafNode::raw("t"));
    assert_eq!(inline_to_node(&Inline::Bold("b".into())), LeafNode::new("b", "b"));
    assert_eq!(inline_to_node(&Inline::Italic("i".into())), LeafNode::new("i", "i"));
    assert_eq!(
        inline_to_node(&Inline::Code("c".into())),
        LeafNode::new("code", "c")
    );
}

#[test]
fn test_link_to_node() {
    let node = inline_to_node(&Inline::link("this is a link!", "http://example.com"));
    assert_eq!(
        node.render().unwrap(),
        r#"<a href="http://example.com">this is a link!</a>"#
    );
}

#[test]
fn test_image_to_node() {
    let node = inline_to_node(&Inline::image("a picture", "http://example.com/p.png"));
    assert_eq!(node.value.as_deref(), Some(""));
    assert_eq!(
        node.render().unwrap(),
        r#"<img src="http://example.com/p.png" alt="a picture"></img>"#
    );
}

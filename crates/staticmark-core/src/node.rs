//! HTML node tree.
//!
//! A closed union of two node kinds, each able to render itself:
//!
//! - [`LeafNode`]: an optional tag wrapping a text value, no children.
//!   Without a tag it renders as the raw value.
//! - [`ParentNode`]: a tag wrapping the concatenated renderings of its
//!   children, no text of its own.
//!
//! Attributes keep insertion order so output is deterministic. Rendering
//! never mutates the tree, so rendering twice yields identical bytes.

use std::fmt::Write;

use crate::error::NodeError;

/// Ordered attribute list: `(name, value)` pairs in insertion order.
pub type Attributes = Vec<(String, String)>;

/// A node in the HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Text or a single tag wrapping text.
    Leaf(LeafNode),
    /// A tag wrapping child nodes.
    Parent(ParentNode),
}

impl HtmlNode {
    /// Render this node and its descendants to an HTML string.
    pub fn render(&self) -> Result<String, NodeError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    /// Append this node's rendering to `out`.
    ///
    /// On error `out` may hold a partial rendering and should be discarded.
    pub fn render_into(&self, out: &mut String) -> Result<(), NodeError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.render_into(out),
            HtmlNode::Parent(parent) => parent.render_into(out),
        }
    }

    /// The node's tag, if any.
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

/// A node without children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeafNode {
    /// Tag name; `None` renders the value as raw text.
    pub tag: Option<String>,
    /// Text content. Required at render time.
    pub value: Option<String>,
    /// Attributes rendered on the open tag.
    pub attributes: Attributes,
}

impl LeafNode {
    /// Create a tagged leaf.
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Create an untagged leaf that renders as raw text.
    pub fn raw(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Append an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Render to an HTML string.
    pub fn render(&self) -> Result<String, NodeError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), NodeError> {
        let value = self.value.as_deref().ok_or(NodeError::MissingLeafValue)?;

        match &self.tag {
            None => out.push_str(value),
            Some(tag) => {
                open_tag(out, tag, &self.attributes);
                out.push_str(value);
                close_tag(out, tag);
            }
        }

        Ok(())
    }
}

/// A node whose content is entirely its children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParentNode {
    /// Tag name. Required at render time.
    pub tag: Option<String>,
    /// Child nodes in document order. Must be non-empty at render time.
    pub children: Vec<HtmlNode>,
    /// Attributes rendered on the open tag.
    pub attributes: Attributes,
}

impl ParentNode {
    /// Create a parent node.
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.into()),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Append an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append a child node.
    pub fn push(&mut self, child: impl Into<HtmlNode>) {
        self.children.push(child.into());
    }

    /// Render to an HTML string.
    pub fn render(&self) -> Result<String, NodeError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), NodeError> {
        let tag = self.tag.as_deref().ok_or(NodeError::MissingParentTag)?;
        if self.children.is_empty() {
            return Err(NodeError::EmptyChildren {
                tag: tag.to_string(),
            });
        }

        // Children first: nothing of this node is emitted if one fails.
        let mut inner = String::new();
        for child in &self.children {
            child.render_into(&mut inner)?;
        }

        open_tag(out, tag, &self.attributes);
        out.push_str(&inner);
        close_tag(out, tag);

        Ok(())
    }
}

/// Render attributes as ` name="value"` pairs, in order.
pub fn attributes_to_html(attributes: &Attributes) -> String {
    let mut out = String::new();
    write_attributes(&mut out, attributes);
    out
}

#[inline]
fn write_attributes(out: &mut String, attributes: &Attributes) {
    for (name, value) in attributes {
        // Writing to a String cannot fail.
        let _ = write!(out, r#" {}="{}""#, name, value);
    }
}

#[inline]
fn open_tag(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    write_attributes(out, attributes);
    out.push('>');
}

#[inline]
fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Render any node and its descendants to an HTML string.
///
/// ```rust
/// use staticmark_core::node::{render, HtmlNode, LeafNode, ParentNode};
///
/// let p = ParentNode::new(
///     "p",
///     vec![LeafNode::raw("Some ").into(), LeafNode::new("b", "bold").into()],
/// );
/// assert_eq!(render(&HtmlNode::from(p)).unwrap(), "<p>Some <b>bold</b></p>");
/// ```
pub fn render(node: &HtmlNode) -> Result<String, NodeError> {
    node.render()
}

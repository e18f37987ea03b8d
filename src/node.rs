//! HTML tree representation.
//!
//! A [`Node`] is either a container holding other nodes or a text leaf
//! holding a literal string. Attributes are kept in a sorted map so that
//! rendering is deterministic.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

pub type Attributes = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Container(ContainerNode),
    Leaf(TextLeafNode),
}

/// A tagged node whose content is other nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerNode {
    pub tag: String,
    pub attributes: Attributes,
    pub children: Vec<Node>,
}

/// A node whose content is a literal string.
///
/// Without a tag the value is emitted as-is and attributes are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLeafNode {
    pub tag: Option<String>,
    pub attributes: Attributes,
    pub value: String,
}

impl Node {
    pub fn container(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Container(ContainerNode {
            tag: tag.into(),
            attributes: Attributes::new(),
            children,
        })
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Leaf(TextLeafNode {
            tag: Some(tag.into()),
            attributes: Attributes::new(),
            value: value.into(),
        })
    }

    /// An untagged leaf, rendered as raw text.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Leaf(TextLeafNode {
            tag: None,
            attributes: Attributes::new(),
            value: value.into(),
        })
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes_mut().insert(name.into(), value.into());
        self
    }

    /// Build a node from the loose shape where any field may be absent.
    ///
    /// `children` present means a container, `value` present means a leaf.
    /// A tag alone is an empty container.
    pub fn from_parts(
        tag: Option<String>,
        value: Option<String>,
        children: Option<Vec<Node>>,
        attributes: Option<Attributes>,
    ) -> Result<Self> {
        let attributes = attributes.unwrap_or_default();
        match (tag, value, children) {
            (_, Some(_), Some(_)) => Err(Error::InvalidNodeShape("node has both value and children")),
            (None, None, None) => Err(Error::MissingValue),
            (None, None, Some(_)) => Err(Error::MissingTag),
            (Some(tag), None, children) => Ok(Node::Container(ContainerNode {
                tag,
                attributes,
                children: children.unwrap_or_default(),
            })),
            (tag, Some(value), None) => Ok(Node::Leaf(TextLeafNode {
                tag,
                attributes,
                value,
            })),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Container(node) => Some(&node.tag),
            Node::Leaf(node) => node.tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Node::Container(node) => &node.attributes,
            Node::Leaf(node) => &node.attributes,
        }
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            Node::Container(node) => &mut node.attributes,
            Node::Leaf(node) => &mut node.attributes,
        }
    }

    /// Render the tree rooted at this node to an HTML string.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<()> {
        match self {
            Node::Container(node) => {
                if node.tag.is_empty() {
                    return Err(Error::MissingTag);
                }
                open_tag(&node.tag, &node.attributes, out);
                for child in &node.children {
                    child.render_into(out)?;
                }
                close_tag(&node.tag, out);
            }
            Node::Leaf(node) => match node.tag.as_deref() {
                None | Some("") => out.push_str(&node.value),
                Some(tag) => {
                    open_tag(tag, &node.attributes, out);
                    out.push_str(&node.value);
                    close_tag(tag, out);
                }
            },
        }
        Ok(())
    }
}

/// Render attributes as ` name="value"` pairs in name order.
pub fn attributes_to_html(attributes: &Attributes) -> String {
    let mut out = String::new();
    push_attributes(attributes, &mut out);
    out
}

fn push_attributes(attributes: &Attributes, out: &mut String) {
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    push_attributes(attributes, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

use crate::block::{Block, BlockKind};
use crate::error::{Error, Result};
use crate::inline::tokenize;
use crate::node::Node;
use crate::parser;
use crate::span::{SpanKind, TextSpan};

/// Tag of the node wrapping a whole document.
pub const ROOT_TAG: &str = "div";

/// Build the HTML tree of a whole document.
pub fn build(markdown: &str) -> Result<Node> {
    let blocks = parser::parse(markdown)?;
    blocks_to_node(&blocks)
}

/// Wrap one node per block in the document root.
pub fn blocks_to_node(blocks: &[Block]) -> Result<Node> {
    let children = blocks
        .iter()
        .map(block_to_node)
        .collect::<Result<Vec<_>>>()?;
    Ok(Node::container(ROOT_TAG, children))
}

pub fn block_to_node(block: &Block) -> Result<Node> {
    if block.text.is_empty() {
        return Err(Error::EmptyBlock);
    }

    match block.kind {
        BlockKind::Heading(level) => heading_to_node(&block.text, level),
        BlockKind::Code => Ok(code_to_node(block)),
        BlockKind::Quote => quote_to_node(block),
        BlockKind::UnorderedList => {
            list_to_node("ul", block.lines().map(|line| line.strip_prefix("- ").unwrap_or(line)))
        }
        BlockKind::OrderedList => list_to_node("ol", block.lines().map(strip_ordered_marker)),
        BlockKind::Paragraph => Ok(Node::container("p", text_to_children(&block.text)?)),
    }
}

fn heading_to_node(text: &str, level: u8) -> Result<Node> {
    let hashes = text
        .bytes()
        .take_while(|&b| b == b'#')
        .count()
        .min(6);
    let rest = &text[hashes..];
    let rest = rest.strip_prefix(' ').unwrap_or(rest);
    Ok(Node::container(format!("h{}", level), text_to_children(rest)?))
}

// Code is not tokenized: the interior is kept verbatim.
fn code_to_node(block: &Block) -> Node {
    let lines: Vec<&str> = block.lines().collect();
    let interior: &[&str] = if lines.len() > 2 {
        &lines[1..lines.len() - 1]
    } else {
        &[]
    };
    let mut content = interior.join("\n");
    content.push('\n');

    Node::container("pre", vec![Node::container("code", vec![Node::text(content)])])
}

fn quote_to_node(block: &Block) -> Result<Node> {
    let text = block
        .lines()
        .map(|line| {
            let line = line.strip_prefix('>').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n");
    Ok(Node::container("blockquote", text_to_children(&text)?))
}

/// Items are separated by a newline text node, including after the last.
fn list_to_node<'a>(tag: &str, items: impl Iterator<Item = &'a str>) -> Result<Node> {
    let mut children = Vec::new();
    for item in items {
        if item.is_empty() {
            continue;
        }
        children.push(Node::container("li", text_to_children(item)?));
        children.push(Node::text("\n"));
    }
    Ok(Node::container(tag, children))
}

// Numbering was validated at classification, only the marker is dropped.
fn strip_ordered_marker(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    rest.strip_prefix(". ").unwrap_or(rest)
}

/// Tokenize inline text into one node per span.
pub fn text_to_children(text: &str) -> Result<Vec<Node>> {
    tokenize(text)?.iter().map(span_to_node).collect()
}

pub fn span_to_node(span: &TextSpan) -> Result<Node> {
    let text = span.text();
    Ok(match span.kind() {
        SpanKind::Plain => Node::text(text),
        SpanKind::Bold => Node::leaf("b", text),
        SpanKind::Italic => Node::leaf("i", text),
        SpanKind::Code => Node::leaf("code", text),
        SpanKind::Link => Node::leaf("a", text).with_attribute("href", require_url(span)?),
        SpanKind::Image => Node::leaf("img", "")
            .with_attribute("src", require_url(span)?)
            .with_attribute("alt", text),
    })
}

fn require_url(span: &TextSpan) -> Result<&str> {
    span.url().ok_or(Error::MissingUrl {
        kind: span.kind().as_str(),
    })
}

/// Convert markdown straight to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    build(markdown)?.render()
}

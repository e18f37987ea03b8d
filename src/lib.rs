mod block;
pub mod config;
mod error;
mod html;
mod inline;
mod node;
mod page;
mod parser;
pub mod site;
mod span;

pub use block::{Block, BlockKind};
pub use config::Config;
pub use error::{Error, Result};
pub use html::{blocks_to_node, markdown_to_html};
pub use inline::{extract_images, extract_links};
pub use node::{Attributes, ContainerNode, Node, TextLeafNode, attributes_to_html};
pub use page::{CONTENT_PLACEHOLDER, TITLE_PLACEHOLDER, assemble, extract_title};
pub use span::{SpanKind, TextSpan};

/// Split inline text into typed spans.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>> {
    inline::tokenize(text)
}

/// Split a document into its non-empty, blank-line separated blocks.
pub fn segment(markdown: &str) -> Vec<&str> {
    parser::segment(markdown)
}

/// Classify one block.
pub fn classify(block: &str) -> Result<BlockKind> {
    parser::classify(block)
}

/// Parse markdown text into a vector of classified blocks.
pub fn parse(markdown: &str) -> Result<Vec<Block>> {
    parser::parse(markdown)
}

/// Build the HTML tree of a document, rooted at a `div`.
pub fn build(markdown: &str) -> Result<Node> {
    html::build(markdown)
}

/// Render a tree to an HTML string.
pub fn render(node: &Node) -> Result<String> {
    node.render()
}

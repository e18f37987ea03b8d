use crate::error::Result;

/// Kind of a top-level Markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    /// Heading level, 1 through 6.
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// A blank-line separated block of a document and its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub text: String,
    pub kind: BlockKind,
}

impl Block {
    /// Classify `text` into a block.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let kind = crate::parser::classify(&text)?;
        Ok(Self { text, kind })
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

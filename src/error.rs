use thiserror::Error;

/// Errors raised by the Markdown-to-HTML pipeline.
///
/// Every error is terminal for the call that raised it; nothing is retried
/// or recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid markdown: unclosed formatting span `{delimiter}`")]
    UnclosedFormattingSpan { delimiter: &'static str },

    #[error("invalid markdown: {kind} section not closed")]
    UnclosedImageOrLinkSpan { kind: &'static str },

    #[error("empty block")]
    EmptyBlock,

    #[error("container node has no tag")]
    MissingTag,

    #[error("untagged leaf node has no value")]
    MissingValue,

    #[error("{kind} span has no url")]
    MissingUrl { kind: &'static str },

    #[error("no `# ` title line found in document")]
    MissingTitle,

    #[error("invalid span kind: {0}")]
    InvalidSpanKind(String),

    #[error("invalid node shape: {0}")]
    InvalidNodeShape(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Formatting kind of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SpanKind::Plain => "text",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        }
    }

    /// Whether spans of this kind carry a url.
    pub fn has_url(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpanKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(SpanKind::Plain),
            "bold" => Ok(SpanKind::Bold),
            "italic" => Ok(SpanKind::Italic),
            "code" => Ok(SpanKind::Code),
            "link" => Ok(SpanKind::Link),
            "image" => Ok(SpanKind::Image),
            other => Err(Error::InvalidSpanKind(other.to_string())),
        }
    }
}

/// A contiguous run of inline text carrying one formatting kind.
///
/// `url` is present if and only if the kind is [`SpanKind::Link`] or
/// [`SpanKind::Image`]. For images, `text` holds the alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    kind: SpanKind,
    text: String,
    url: Option<String>,
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(SpanKind::Plain, text)
    }

    /// A span without a url. Panics in debug builds for link/image kinds.
    pub(crate) fn styled(kind: SpanKind, text: impl Into<String>) -> Self {
        debug_assert!(!kind.has_url());
        Self {
            kind,
            text: text.into(),
            url: None,
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Link,
            text: text.into(),
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Image,
            text: alt.into(),
            url: Some(url.into()),
        }
    }

    /// Build a span from loose parts, checking the url invariant.
    pub fn try_new(kind: SpanKind, text: impl Into<String>, url: Option<String>) -> Result<Self> {
        match (kind.has_url(), &url) {
            (true, None) => Err(Error::MissingUrl {
                kind: kind.as_str(),
            }),
            (false, Some(_)) => Err(Error::InvalidSpanKind(format!("{} with url", kind))),
            _ => Ok(Self {
                kind,
                text: text.into(),
                url,
            }),
        }
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::span::{SpanKind, TextSpan};

static IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

// The regex crate has no lookbehind, so the optional leading `!` is captured
// and matches that carry it are discarded.
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(!?)\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// Split a run of inline text into typed spans.
///
/// Stages run in a fixed order, each one only touching the plain spans left
/// by the previous stage: code, images, links, bold, italic. Code spans are
/// therefore never reinterpreted.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_delimiter(spans, "`", SpanKind::Code)?;
    let spans = split_images(spans)?;
    let spans = split_links(spans)?;
    let spans = split_delimiter(spans, "**", SpanKind::Bold)?;
    split_delimiter(spans, "_", SpanKind::Italic)
}

/// Split every plain span on `delimiter`, alternating plain and `kind`.
///
/// An even number of parts means an opening delimiter was never closed.
/// Empty parts are dropped.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let parts: Vec<&str> = span.text().split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(Error::UnclosedFormattingSpan { delimiter });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(TextSpan::plain(part));
            } else {
                out.push(TextSpan::styled(kind, part));
            }
        }
    }
    Ok(out)
}

/// `(alt, url)` pairs of every `![alt](url)` in `text`, in order.
pub fn extract_images(text: &str) -> Vec<(&str, &str)> {
    IMAGE_PATTERN
        .captures_iter(text)
        .map(|caps| {
            let (_, [alt, url]) = caps.extract();
            (alt, url)
        })
        .collect()
}

/// `(label, url)` pairs of every `[label](url)` in `text` that is not
/// immediately preceded by `!`.
pub fn extract_links(text: &str) -> Vec<(&str, &str)> {
    LINK_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let (_, [bang, label, url]) = caps.extract();
            bang.is_empty().then_some((label, url))
        })
        .collect()
}

pub fn split_images(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>> {
    split_extracted(spans, SpanKind::Image)
}

pub fn split_links(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>> {
    split_extracted(spans, SpanKind::Link)
}

fn split_extracted(spans: Vec<TextSpan>, kind: SpanKind) -> Result<Vec<TextSpan>> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if span.is_plain() {
            split_plain_extracted(span.text(), kind, &mut out)?;
        } else {
            out.push(span);
        }
    }
    Ok(out)
}

fn split_plain_extracted(text: &str, kind: SpanKind, out: &mut Vec<TextSpan>) -> Result<()> {
    let matches = match kind {
        SpanKind::Image => extract_images(text),
        _ => extract_links(text),
    };
    if matches.is_empty() {
        out.push(TextSpan::plain(text));
        return Ok(());
    }

    let mut remaining = text;
    for (label, url) in matches {
        let (literal, span) = match kind {
            SpanKind::Image => (format!("![{label}]({url})"), TextSpan::image(label, url)),
            _ => (format!("[{label}]({url})"), TextSpan::link(label, url)),
        };
        let Some((before, after)) = remaining.split_once(literal.as_str()) else {
            return Err(Error::UnclosedImageOrLinkSpan {
                kind: kind.as_str(),
            });
        };
        if !before.is_empty() {
            out.push(TextSpan::plain(before));
        }
        out.push(span);
        remaining = after;
    }
    if !remaining.is_empty() {
        out.push(TextSpan::plain(remaining));
    }
    Ok(())
}

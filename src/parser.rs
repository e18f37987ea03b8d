use crate::block::{Block, BlockKind};
use crate::error::{Error, Result};

const FENCE: &str = "```";

/// Split a document into its blank-line separated blocks.
///
/// Each block is trimmed of surrounding whitespace and blocks that end up
/// empty are dropped. Single newlines inside a block are kept.
pub fn segment(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Parse markdown text into a list of classified blocks.
pub fn parse(markdown: &str) -> Result<Vec<Block>> {
    segment(markdown).into_iter().map(Block::new).collect()
}

/// Classify a single block. The first matching rule wins.
pub fn classify(block: &str) -> Result<BlockKind> {
    if block.is_empty() {
        return Err(Error::EmptyBlock);
    }

    let lines: Vec<&str> = block.split('\n').collect();

    if let Some(level) = heading_level(lines[0]) {
        return Ok(BlockKind::Heading(level));
    }

    if lines.len() >= 2 && lines[0].starts_with(FENCE) && lines[lines.len() - 1] == FENCE {
        return Ok(BlockKind::Code);
    }

    let quote = lines.iter().all(|line| line.starts_with('>'));
    let unordered = lines.iter().all(|line| line.starts_with("- "));
    let ordered = lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)));

    Ok(match (quote, unordered, ordered) {
        (true, _, _) => BlockKind::Quote,
        (_, true, _) => BlockKind::UnorderedList,
        (_, _, true) => BlockKind::OrderedList,
        _ => BlockKind::Paragraph,
    })
}

/// Level of an ATX heading line: 1 to 6 `#`, one space, then some text.
pub fn heading_level(line: &str) -> Option<u8> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let text = line[hashes..].strip_prefix(' ')?;
    if text.trim().is_empty() {
        return None;
    }
    Some(hashes as u8)
}

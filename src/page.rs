use crate::error::{Error, Result};
use crate::html::markdown_to_html;

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Text of the first `# ` line with a non-blank title anywhere in the
/// document.
pub fn extract_title(markdown: &str) -> Result<&str> {
    markdown
        .lines()
        .filter_map(|line| line.strip_prefix("# "))
        .map(str::trim)
        .find(|title| !title.is_empty())
        .ok_or(Error::MissingTitle)
}

/// Render `markdown` and fill the title and content placeholders of
/// `template` with it.
pub fn assemble(markdown: &str, template: &str) -> Result<String> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html(markdown)?;
    Ok(template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, &content))
}

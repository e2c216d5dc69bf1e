//! Bounded text extraction from PDF files.

use lopdf::Document;
use std::path::Path;
use thiserror::Error;

/// Maximum number of characters retained from a document.
pub const MAX_CHARS: usize = 4096;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to load PDF: {0}")]
    Load(#[source] lopdf::Error),
    #[error("failed to extract page text: {0}")]
    PageText(#[source] lopdf::Error),
}

/// Reads per-page text in page order until the accumulated length reaches
/// [`MAX_CHARS`], then returns exactly that many characters. Documents whose
/// full text never reaches the bound yield `None` and are unclassifiable.
///
/// Pages are extracted lazily, so a document whose leading pages already
/// satisfy the bound is not parsed to the end.
pub fn extract_prefix(path: &Path) -> Result<Option<String>, ExtractError> {
    let doc = Document::load(path).map_err(ExtractError::Load)?;
    let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
    collect_prefix(
        pages
            .into_iter()
            .map(|page| doc.extract_text(&[page]).map_err(ExtractError::PageText)),
    )
}

fn collect_prefix<I>(pages: I) -> Result<Option<String>, ExtractError>
where
    I: Iterator<Item = Result<String, ExtractError>>,
{
    let mut text = String::new();
    let mut chars = 0usize;
    for page in pages {
        let page = page?;
        chars += page.chars().count();
        text.push_str(&page);
        if chars >= MAX_CHARS {
            return Ok(Some(text.chars().take(MAX_CHARS).collect()));
        }
    }
    Ok(None)
}

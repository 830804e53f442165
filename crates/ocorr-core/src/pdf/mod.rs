//! PDF processing module.
//!
//! Provides the raw report text fed to the extraction engine.

mod extractor;

pub use extractor::PdfExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Source of a document's raw text.
pub trait DocumentTextProvider {
    /// Load a document from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the document.
    fn page_count(&self) -> u32;

    /// Text of every page, in page order. A page without extractable text
    /// yields an empty string.
    fn extract_pages(&self) -> Result<Vec<String>>;

    /// Text of a single page (1-indexed).
    fn extract_page_text(&self, page: u32) -> Result<String> {
        let pages = self.extract_pages()?;
        page.checked_sub(1)
            .and_then(|i| pages.into_iter().nth(i as usize))
            .ok_or(PdfError::InvalidPage(page))
    }

    /// Concatenated text of all pages, joined with `separator`.
    fn extract_text(&self, separator: &str) -> Result<String> {
        Ok(self.extract_pages()?.join(separator))
    }
}

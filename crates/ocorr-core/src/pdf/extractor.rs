//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::{debug, trace, warn};

use super::{DocumentTextProvider, Result};
use crate::error::PdfError;

/// PDF text extractor.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    fn document(&self) -> Result<&Document> {
        self.document
            .as_ref()
            .ok_or_else(|| PdfError::Parse("No document loaded".to_string()))
    }

    /// Page-by-page extraction through lopdf's content stream decoder.
    fn extract_pages_lopdf(&self, doc: &Document) -> Vec<String> {
        let page_count = doc.get_pages().len() as u32;
        (1..=page_count)
            .map(|page| match doc.extract_text(&[page]) {
                Ok(text) => text,
                Err(e) => {
                    trace!("No text on page {}: {}", page, e);
                    String::new()
                }
            })
            .collect()
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentTextProvider for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract reads from raw bytes, so keep the decrypted copy
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_pages(&self) -> Result<Vec<String>> {
        let doc = self.document()?;

        let pages = match pdf_extract::extract_text_from_mem_by_pages(&self.raw_data) {
            Ok(pages) => pages,
            Err(e) => {
                warn!("pdf-extract failed ({}), extracting page by page", e);
                self.extract_pages_lopdf(doc)
            }
        };

        let total: usize = pages.iter().map(String::len).sum();
        debug!("Extracted {} chars of text from {} pages", total, pages.len());

        Ok(pages)
    }
}

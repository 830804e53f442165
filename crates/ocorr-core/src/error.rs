//! Error types for the ocorr-core library.
//!
//! Missing fields and missing party sections are not errors: they surface as
//! `None` in the extracted record. Only failures to obtain the document text
//! are reported here.

use thiserror::Error;

/// Main error type for the ocorr library.
#[derive(Error, Debug)]
pub enum OcorrError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Result type for the ocorr library.
pub type Result<T> = std::result::Result<T, OcorrError>;

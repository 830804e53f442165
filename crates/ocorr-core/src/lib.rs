//! Core library for police occurrence report extraction.
//!
//! This crate provides:
//! - PDF text extraction (the document text provider)
//! - A rule registry of literal-label anchored patterns
//! - Party section isolation for the victim ("Vítima") and accused ("Autor")
//! - Narrative extraction and the representation-intent flag
//! - The occurrence record model and its flattened export form

pub mod error;
pub mod extraction;
pub mod models;
pub mod pdf;

pub use error::{OcorrError, PdfError, Result};
pub use extraction::{ExtractionResult, ReportParser, RuleBasedReportParser};
pub use models::config::OcorrConfig;
pub use models::occurrence::{
    DocumentField, FieldKey, FieldValue, OccurrenceRecord, PartyField, PartyKind, PartyRecord,
};
pub use pdf::{DocumentTextProvider, PdfExtractor};

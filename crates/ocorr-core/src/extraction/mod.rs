//! Occurrence report field extraction.
//!
//! The rule registry, narrative extractor and flag detector run over the full
//! text; the party section isolator scopes the party rules to each involved
//! party. The assembler merges everything into an [`OccurrenceRecord`].
//!
//! [`OccurrenceRecord`]: crate::models::occurrence::OccurrenceRecord

pub mod assembler;
pub mod flags;
pub mod narrative;
mod parser;
pub mod party;
pub mod rules;
pub mod section;

pub use assembler::assemble;
pub use flags::{has_representation_intent, representation_intent};
pub use narrative::extract_narrative;
pub use parser::{ExtractionResult, ReportParser, RuleBasedReportParser};
pub use party::{extract_party, extract_party_section};
pub use section::{Section, Terminator, isolate, locate};

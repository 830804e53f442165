//! Merges independent extraction outputs into one record.

use crate::models::occurrence::{DocumentField, OccurrenceRecord, PartyRecord};

/// Trim a raw capture; an absent capture stays `None`.
pub fn normalize(raw: Option<&str>) -> Option<String> {
    raw.map(|s| s.trim().to_string())
}

/// Build the occurrence record.
///
/// Captures are trimmed; party records, narrative and flag pass through
/// unchanged.
pub fn assemble(
    captures: Vec<(DocumentField, Option<&str>)>,
    complainant: Option<PartyRecord>,
    accused: Option<PartyRecord>,
    narrative: Option<String>,
    representation_intent: bool,
) -> OccurrenceRecord {
    OccurrenceRecord::new(
        captures
            .into_iter()
            .map(|(field, raw)| (field, normalize(raw))),
        complainant,
        accused,
        narrative,
        representation_intent,
    )
}

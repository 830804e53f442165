//! Party field extraction.

use tracing::debug;

use super::assembler::normalize;
use super::rules::RuleSet;
use super::section::isolate;
use crate::models::occurrence::{PartyField, PartyKind, PartyRecord};

/// Apply the party rules to an isolated section.
///
/// Each rule captures or yields `None` on its own; a failed rule never
/// affects the others.
pub fn extract_party(section: &str, rules: &RuleSet<PartyField>) -> PartyRecord {
    PartyRecord::from_fields(
        rules
            .captures(section)
            .into_iter()
            .map(|(field, raw)| (field, normalize(raw))),
    )
}

/// Isolate the section of `kind` in the full text and extract it.
///
/// `None` when the section boundary cannot be located.
pub fn extract_party_section(
    text: &str,
    kind: PartyKind,
    rules: &RuleSet<PartyField>,
) -> Option<PartyRecord> {
    let Some(section) = isolate(text, kind) else {
        debug!("No {} section found", kind);
        return None;
    };

    let record = extract_party(section, rules);
    debug!(
        "{} section: {} of {} fields found",
        kind,
        record.found_count(),
        PartyField::ALL.len()
    );
    Some(record)
}

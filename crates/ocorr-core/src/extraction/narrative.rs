//! Narrative ("Dinâmica do Fato") extraction.
//!
//! Line scan: collection starts right after the section marker and stops at
//! the first line holding a declarant phrase or a footer timestamp marker,
//! keeping the part of that line before the marker. Protocol-number and
//! document-title lines in between are dropped.
//!
//! A page footer closes the narrative even when text continues on the next
//! page. To read across page breaks, move the footer label from
//! `footer_markers` to `boilerplate_prefixes`.

use tracing::trace;

use crate::models::config::NarrativeMarkers;

/// Extract the narrative text, trimmed.
///
/// Returns `None` when the section marker is absent. A marker followed by no
/// text yields an empty string.
pub fn extract_narrative(text: &str, markers: &NarrativeMarkers) -> Option<String> {
    if markers.section_marker.is_empty() {
        return None;
    }
    let start = text.find(markers.section_marker.as_str())? + markers.section_marker.len();

    let mut lines: Vec<&str> = Vec::new();
    for line in text[start..].lines() {
        if let Some(cut) = markers.terminal_position(line) {
            lines.push(&line[..cut]);
            break;
        }
        if markers.is_boilerplate(line) {
            trace!("Skipping boilerplate line in narrative: {:?}", line);
            continue;
        }
        lines.push(line);
    }

    Some(lines.join("\n").trim().to_string())
}

//! Party section isolation.
//!
//! A party section starts right after the party's label ("Vítima" or "Autor")
//! and ends at the nearest of an ordered list of terminators: the other
//! party's label, then the narrative marker. When two terminators start at the
//! same offset, the one listed first wins.

use regex::Regex;
use tracing::trace;

use super::rules::patterns::{ACCUSED_LABEL, COMPLAINANT_LABEL, NARRATIVE_LABEL};
use crate::models::occurrence::PartyKind;

/// Marker that closes a party section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// The label of the given party.
    Party(PartyKind),
    /// The narrative marker ("Dinâmica do Fato").
    Narrative,
}

impl Terminator {
    fn pattern(self) -> &'static Regex {
        match self {
            Terminator::Party(kind) => label_pattern(kind),
            Terminator::Narrative => &*NARRATIVE_LABEL,
        }
    }
}

/// Terminators of a party section, in tie-break order.
pub fn terminators(kind: PartyKind) -> [Terminator; 2] {
    [Terminator::Party(kind.other()), Terminator::Narrative]
}

/// Case-insensitive, whole-word label of a party section.
pub fn label_pattern(kind: PartyKind) -> &'static Regex {
    match kind {
        PartyKind::Complainant => &*COMPLAINANT_LABEL,
        PartyKind::Accused => &*ACCUSED_LABEL,
    }
}

/// An isolated party section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'t> {
    pub kind: PartyKind,
    /// Text between the label and the terminator.
    pub text: &'t str,
    /// Byte offset of `text` in the source.
    pub start: usize,
    /// Byte offset where the terminator begins.
    pub end: usize,
    pub terminator: Terminator,
}

/// Locate the section of `kind` in `text`.
///
/// Returns `None` when the label is missing or no terminator follows it.
pub fn locate(text: &str, kind: PartyKind) -> Option<Section<'_>> {
    let label = label_pattern(kind).find(text)?;
    let start = label.end();
    let rest = &text[start..];

    // min_by_key keeps the first of equal candidates
    let (terminator, offset) = terminators(kind)
        .into_iter()
        .filter_map(|t| t.pattern().find(rest).map(|m| (t, m.start())))
        .min_by_key(|(_, offset)| *offset)?;

    trace!(
        "{} section spans {}..{} (closed by {:?})",
        kind,
        start,
        start + offset,
        terminator
    );

    Some(Section {
        kind,
        text: &rest[..offset],
        start,
        end: start + offset,
        terminator,
    })
}

/// Text of the section of `kind`, if found.
pub fn isolate(text: &str, kind: PartyKind) -> Option<&str> {
    locate(text, kind).map(|s| s.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complainant_ends_at_accused_label() {
        let text = "Vítima\nNome: Maria\nAutor\nNome: Carlos\nDinâmica do Fato\nRelato";
        let section = locate(text, PartyKind::Complainant).unwrap();
        assert_eq!(section.text, "\nNome: Maria\n");
        assert_eq!(section.terminator, Terminator::Party(PartyKind::Accused));
        assert_eq!(&text[section.end..section.end + 5], "Autor");
    }

    #[test]
    fn test_accused_ends_at_narrative() {
        let text = "Vítima\nNome: Maria\nAutor\nNome: Carlos\nDinâmica do Fato\nRelato";
        let section = locate(text, PartyKind::Accused).unwrap();
        assert_eq!(section.text, "\nNome: Carlos\n");
        assert_eq!(section.terminator, Terminator::Narrative);
    }

    #[test]
    fn test_nearest_terminator_wins() {
        // Accused listed first: its section runs into the victim label
        let text = "Autor\nNome: Carlos\nVítima\nNome: Maria\nDinâmica do Fato";
        assert_eq!(isolate(text, PartyKind::Accused), Some("\nNome: Carlos\n"));
        assert_eq!(isolate(text, PartyKind::Complainant), Some("\nNome: Maria\n"));
    }

    #[test]
    fn test_missing_label_yields_none() {
        let text = "Vítima\nNome: Maria\nDinâmica do Fato\nO AUTOR fugiu";
        assert_eq!(isolate(text, PartyKind::Complainant), Some("\nNome: Maria\n"));
        // "AUTOR" after the narrative has no terminator behind it
        assert_eq!(isolate(text, PartyKind::Accused), None);
        assert_eq!(isolate("sem envolvidos", PartyKind::Complainant), None);
    }

    #[test]
    fn test_missing_terminator_yields_none() {
        assert_eq!(isolate("Vítima\nNome: Maria", PartyKind::Complainant), None);
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        let text = "VÍTIMA\nNome: Maria\nDINÂMICA DO FATO";
        assert_eq!(isolate(text, PartyKind::Complainant), Some("\nNome: Maria\n"));
    }

    #[test]
    fn test_autoridade_is_not_an_accused_label() {
        let text = "Despacho da Autoridade\nVítima\nNome: Maria\nDinâmica do Fato";
        assert_eq!(isolate(text, PartyKind::Accused), None);
        assert_eq!(isolate(text, PartyKind::Complainant), Some("\nNome: Maria\n"));
    }

    #[test]
    fn test_terminator_order() {
        assert_eq!(
            terminators(PartyKind::Complainant),
            [Terminator::Party(PartyKind::Accused), Terminator::Narrative]
        );
    }
}

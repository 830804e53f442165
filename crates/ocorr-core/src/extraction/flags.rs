//! Boolean flags detected by literal phrase.

use super::rules::{RuleMode, RuleSet, document_rules};
use crate::models::occurrence::DocumentField;

/// Evaluate the existence rule bound to `field`.
///
/// `false` when the set has no existence rule for that field.
pub fn detect_flag(text: &str, rules: &RuleSet<DocumentField>, field: DocumentField) -> bool {
    rules
        .get(field)
        .filter(|rule| rule.mode() == RuleMode::Exists)
        .is_some_and(|rule| rule.is_present(text))
}

/// Whether the complainant declared the wish to press charges.
pub fn has_representation_intent(text: &str) -> bool {
    detect_flag(text, document_rules(), DocumentField::RepresentationIntent)
}

/// Representation flag under a possibly custom rule set.
///
/// A set without an existence rule for the flag falls back to the built-in
/// phrase, so the flag never depends on which capture rules are supplied.
pub fn representation_intent(text: &str, rules: &RuleSet<DocumentField>) -> bool {
    match rules.get(DocumentField::RepresentationIntent) {
        Some(rule) if rule.mode() == RuleMode::Exists => rule.is_present(text),
        _ => has_representation_intent(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::rules::REPRESENTATION_INTENT_PHRASE;

    #[test]
    fn test_phrase_present() {
        let text = format!("Relato.\n{}\nQUE a declarante", REPRESENTATION_INTENT_PHRASE);
        assert!(has_representation_intent(&text));
    }

    #[test]
    fn test_phrase_absent() {
        assert!(!has_representation_intent("QUE NÃO DESEJA REPRESENTAR."));
        assert!(!has_representation_intent(""));
    }

    #[test]
    fn test_phrase_is_case_sensitive() {
        let lower = REPRESENTATION_INTENT_PHRASE.to_lowercase();
        assert!(!has_representation_intent(&lower));
    }

    #[test]
    fn test_matches_substring_semantics() {
        let samples = [
            REPRESENTATION_INTENT_PHRASE.to_string(),
            format!("xx{}yy", REPRESENTATION_INTENT_PHRASE),
            REPRESENTATION_INTENT_PHRASE.replace('.', ""),
            REPRESENTATION_INTENT_PHRASE.replace(' ', "\n"),
        ];
        for sample in samples {
            assert_eq!(
                has_representation_intent(&sample),
                sample.contains(REPRESENTATION_INTENT_PHRASE)
            );
        }
    }

    #[test]
    fn test_set_without_flag_rule_uses_builtin_phrase() {
        use crate::extraction::rules::{FieldRule, PRECINCT};

        let rules =
            RuleSet::new(vec![FieldRule::capture(DocumentField::Precinct, PRECINCT.clone())]).unwrap();
        assert!(representation_intent(REPRESENTATION_INTENT_PHRASE, &rules));
        assert!(!representation_intent("Relato sem manifestação.", &rules));
        assert!(representation_intent(REPRESENTATION_INTENT_PHRASE, document_rules()));
    }

    #[test]
    fn test_capture_field_is_not_a_flag() {
        assert!(!detect_flag("Bairro: Centro Municipio: X-RS", document_rules(), DocumentField::Neighborhood));
    }
}

//! Rule-based field extraction for occurrence reports.
//!
//! A [`RuleSet`] is an ordered, immutable list of [`FieldRule`]s. Rules are
//! evaluated independently against the same text; none depends on another
//! rule's match span.

pub mod patterns;
mod registry;

pub use patterns::*;
pub use registry::{document_rules, party_rules};

use regex::Regex;

use crate::error::OcorrError;
use crate::models::occurrence::FieldKey;

/// How a rule turns a match into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMode {
    /// The single capturing group becomes the field value.
    Capture,
    /// Only the presence of a match matters.
    Exists,
}

/// A pattern bound to a field.
#[derive(Debug, Clone)]
pub struct FieldRule<K> {
    key: K,
    pattern: Regex,
    mode: RuleMode,
}

impl<K: FieldKey> FieldRule<K> {
    /// Rule whose first capturing group is the field value.
    pub fn capture(key: K, pattern: Regex) -> Self {
        Self {
            key,
            pattern,
            mode: RuleMode::Capture,
        }
    }

    /// Rule that only tests for a match.
    pub fn exists(key: K, pattern: Regex) -> Self {
        Self {
            key,
            pattern,
            mode: RuleMode::Exists,
        }
    }

    pub fn key(&self) -> K {
        self.key
    }

    pub fn mode(&self) -> RuleMode {
        self.mode
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Raw captured text of the first match, untrimmed.
    ///
    /// Always `None` for [`RuleMode::Exists`] rules.
    pub fn captured<'t>(&self, text: &'t str) -> Option<&'t str> {
        if self.mode != RuleMode::Capture {
            return None;
        }
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Whether the pattern matches anywhere in `text`.
    pub fn is_present(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    fn check(&self) -> Result<(), OcorrError> {
        // captures_len counts the implicit whole-match group
        let groups = self.pattern.captures_len() - 1;
        if self.mode == RuleMode::Capture && groups != 1 {
            return Err(OcorrError::Config(format!(
                "capture rule `{}` must have exactly one capturing group, found {}",
                self.key.key(),
                groups
            )));
        }
        Ok(())
    }
}

/// Ordered collection of field rules.
#[derive(Debug, Clone)]
pub struct RuleSet<K> {
    rules: Vec<FieldRule<K>>,
}

impl<K: FieldKey> RuleSet<K> {
    /// Build a rule set, rejecting duplicate keys and capture rules without
    /// exactly one capturing group.
    pub fn new(rules: Vec<FieldRule<K>>) -> Result<Self, OcorrError> {
        for (i, rule) in rules.iter().enumerate() {
            rule.check()?;
            if rules[..i].iter().any(|r| r.key == rule.key) {
                return Err(OcorrError::Config(format!(
                    "duplicate rule for `{}`",
                    rule.key.key()
                )));
            }
        }
        Ok(Self { rules })
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldRule<K>> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule bound to `key`.
    pub fn get(&self, key: K) -> Option<&FieldRule<K>> {
        self.rules.iter().find(|r| r.key == key)
    }

    /// Raw captures of every capture-mode rule, in declaration order.
    pub fn captures<'t>(&self, text: &'t str) -> Vec<(K, Option<&'t str>)> {
        self.rules
            .iter()
            .filter(|r| r.mode == RuleMode::Capture)
            .map(|r| (r.key, r.captured(text)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::occurrence::{DocumentField, PartyField};

    #[test]
    fn test_capture_rule_requires_one_group() {
        let bad = FieldRule::capture(PartyField::Name, Regex::new(r"Nome: \w+").unwrap());
        assert!(RuleSet::new(vec![bad]).is_err());

        let two = FieldRule::capture(PartyField::Name, Regex::new(r"(Nome): (\w+)").unwrap());
        assert!(RuleSet::new(vec![two]).is_err());
    }

    #[test]
    fn test_exists_rule_needs_no_group() {
        let rule = FieldRule::exists(
            DocumentField::RepresentationIntent,
            Regex::new("DESEJO").unwrap(),
        );
        let set = RuleSet::new(vec![rule]).unwrap();
        assert!(set.captures("DESEJO").is_empty());
        assert!(set.get(DocumentField::RepresentationIntent).unwrap().is_present("O DESEJO"));
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let a = FieldRule::capture(PartyField::Sex, Regex::new(r"Sexo: (\w+)").unwrap());
        let b = FieldRule::capture(PartyField::Sex, Regex::new(r"Sex: (\w+)").unwrap());
        assert!(RuleSet::new(vec![a, b]).is_err());
    }

    #[test]
    fn test_captured_binds_to_first_occurrence() {
        let rule = FieldRule::capture(PartyField::Sex, Regex::new(r"Sexo: (\w+)").unwrap());
        assert_eq!(rule.captured("Sexo: Feminino\nSexo: Masculino"), Some("Feminino"));
        assert_eq!(rule.captured("nada"), None);
    }

    #[test]
    fn test_captured_is_untrimmed() {
        let rule = FieldRule::capture(PartyField::Name, Regex::new(r"Nome:(.*)").unwrap());
        assert_eq!(rule.captured("Nome:  Maria  "), Some("  Maria  "));
    }
}

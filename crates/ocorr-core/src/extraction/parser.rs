//! Rule-based occurrence report parser.

use std::time::Instant;

use tracing::{debug, info};

use super::assembler::assemble;
use super::flags;
use super::narrative::extract_narrative;
use super::party::extract_party_section;
use super::rules::{RuleSet, document_rules, party_rules};
use crate::models::config::{ExtractionConfig, NarrativeMarkers};
use crate::models::occurrence::{DocumentField, OccurrenceRecord, PartyField, PartyKind};

/// Result of occurrence extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted record.
    pub record: OccurrenceRecord,
    /// Length of the source text in bytes.
    pub raw_text_len: usize,
    /// Flattened keys that were not found.
    pub missing_fields: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for occurrence report parsing.
pub trait ReportParser {
    /// Parse an occurrence report from its raw text.
    ///
    /// Never fails: anything not found is `None` in the record.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Parser driven by immutable rule tables.
pub struct RuleBasedReportParser<'r> {
    document_rules: &'r RuleSet<DocumentField>,
    party_rules: &'r RuleSet<PartyField>,
    narrative: NarrativeMarkers,
}

impl RuleBasedReportParser<'static> {
    /// Create a parser with the built-in rules and default markers.
    pub fn new() -> Self {
        Self {
            document_rules: document_rules(),
            party_rules: party_rules(),
            narrative: NarrativeMarkers::default(),
        }
    }

    /// Create a parser from extraction settings.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new().with_narrative_markers(config.narrative.clone())
    }
}

impl<'r> RuleBasedReportParser<'r> {
    /// Use custom rule tables.
    pub fn with_rules<'n>(
        self,
        document_rules: &'n RuleSet<DocumentField>,
        party_rules: &'n RuleSet<PartyField>,
    ) -> RuleBasedReportParser<'n> {
        RuleBasedReportParser {
            document_rules,
            party_rules,
            narrative: self.narrative,
        }
    }

    /// Set the narrative boundary markers.
    pub fn with_narrative_markers(mut self, markers: NarrativeMarkers) -> Self {
        self.narrative = markers;
        self
    }

    /// Parse and return only the record.
    pub fn extract(&self, text: &str) -> OccurrenceRecord {
        self.parse(text).record
    }
}

impl Default for RuleBasedReportParser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportParser for RuleBasedReportParser<'_> {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();

        info!("Parsing occurrence report from {} characters of text", text.len());

        // Independent passes over the same text
        let captures = self.document_rules.captures(text);
        let narrative = extract_narrative(text, &self.narrative);
        let representation_intent = flags::representation_intent(text, self.document_rules);
        let complainant = extract_party_section(text, PartyKind::Complainant, self.party_rules);
        let accused = extract_party_section(text, PartyKind::Accused, self.party_rules);

        if narrative.is_none() {
            debug!("No narrative section found");
        }

        let record = assemble(
            captures,
            complainant,
            accused,
            narrative,
            representation_intent,
        );
        let missing_fields = record.missing_fields();

        debug!(
            "Extracted occurrence {} with {} missing fields",
            record
                .get(DocumentField::RegistrationNumber)
                .unwrap_or("<sem número>"),
            missing_fields.len()
        );

        ExtractionResult {
            record,
            raw_text_len: text.len(),
            missing_fields,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::rules::{FieldRule, REPRESENTATION_INTENT_PHRASE};
    use pretty_assertions::assert_eq;
    use regex::Regex;

    #[test]
    fn test_scenario_registration_number() {
        let record = RuleBasedReportParser::new().extract("REGISTRO Nº 123-45678/2024\n");
        assert_eq!(record.get(DocumentField::RegistrationNumber), Some("123-45678/2024"));
    }

    #[test]
    fn test_scenario_neighborhood_and_municipality() {
        let record = RuleBasedReportParser::new().extract("Bairro: Centro Municipio: Exemplo-RS");
        assert_eq!(record.get(DocumentField::Neighborhood), Some("Centro"));
        assert_eq!(record.get(DocumentField::Municipality), Some("Exemplo"));
    }

    #[test]
    fn test_scenario_single_party() {
        let text = "Envolvido(s)\nVítima\nNome: Maria Silva - CPF/CIC N° 123.456.789-00\nDinâmica do Fato\nRelato.";
        let record = RuleBasedReportParser::new().extract(text);

        let victim = record.complainant.as_ref().unwrap();
        assert_eq!(victim.get(PartyField::Name), Some("Maria Silva"));
        assert_eq!(victim.get(PartyField::NationalId), Some("123.456.789-00"));
        assert_eq!(record.accused, None);
    }

    #[test]
    fn test_scenario_flag() {
        let parser = RuleBasedReportParser::new();
        let with = format!("Dinâmica do Fato\nRelato.\n{}", REPRESENTATION_INTENT_PHRASE);
        assert!(parser.extract(&with).representation_intent);
        assert!(!parser.extract("Dinâmica do Fato\nRelato.").representation_intent);
    }

    #[test]
    fn test_scenario_narrative_without_boilerplate() {
        let text = "Dinâmica do Fato\n  Relato livre do fato.\nProtocolo nº: 2024/1\nREGISTRO DE OCORRÊNCIA\ncontinuação.\nImpresso em: 12/03/2024 10:05\n";
        let record = RuleBasedReportParser::new().extract(text);
        assert_eq!(
            record.narrative.as_deref(),
            Some("Relato livre do fato.\ncontinuação.")
        );
    }

    #[test]
    fn test_empty_text_is_all_null() {
        let result = RuleBasedReportParser::new().parse("");
        let record = &result.record;
        assert!(record.fields().all(|(_, v)| v.is_none()));
        assert_eq!(record.complainant, None);
        assert_eq!(record.accused, None);
        assert_eq!(record.narrative, None);
        assert!(!record.representation_intent);
        assert_eq!(result.missing_fields.len(), record.flatten().len() - 1);
        assert_eq!(result.raw_text_len, 0);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let parser = RuleBasedReportParser::new();
        let text = "Nº 123-45678/2024\nVítima\nNome: Ana\nDinâmica do Fato\nRelato";
        let a = serde_json::to_string(&parser.extract(text)).unwrap();
        let b = serde_json::to_string(&parser.extract(text)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_rules() {
        let document = RuleSet::new(vec![FieldRule::capture(
            DocumentField::Precinct,
            Regex::new(r"Unidade: (.*)").unwrap(),
        )])
        .unwrap();
        let party = RuleSet::new(vec![FieldRule::capture(
            PartyField::Name,
            Regex::new(r"Nome completo: (.*)").unwrap(),
        )])
        .unwrap();

        let parser = RuleBasedReportParser::new().with_rules(&document, &party);
        let record = parser.extract("Unidade: DPPA\nVítima\nNome completo: Ana\nDinâmica do Fato\n");

        assert_eq!(record.get(DocumentField::Precinct), Some("DPPA"));
        assert_eq!(record.get(DocumentField::RegistrationNumber), None);
        let victim = record.complainant.unwrap();
        assert_eq!(victim.get(PartyField::Name), Some("Ana"));
        assert_eq!(victim.found_count(), 1);
        assert!(!record.representation_intent);
    }

    #[test]
    fn test_custom_rules_keep_representation_flag() {
        let document = RuleSet::new(vec![FieldRule::capture(
            DocumentField::Precinct,
            Regex::new(r"Unidade: (.*)").unwrap(),
        )])
        .unwrap();

        let parser = RuleBasedReportParser::new().with_rules(&document, party_rules());
        let record = parser.extract(&format!("Unidade: DPPA\n{}", REPRESENTATION_INTENT_PHRASE));

        assert_eq!(record.get(DocumentField::Precinct), Some("DPPA"));
        assert!(record.representation_intent);
    }

    #[test]
    fn test_from_config_uses_markers() {
        let mut config = ExtractionConfig::default();
        config.narrative.section_marker = "Histórico".to_string();
        let record = RuleBasedReportParser::from_config(&config).extract("Histórico\nTexto\nImpresso em: x");
        assert_eq!(record.narrative.as_deref(), Some("Texto"));
    }
}

//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the ocorr pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcorrConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// PDF processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Inserted between the text of consecutive pages.
    pub page_separator: String,

    /// Documents with less extracted text than this are rejected.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            page_separator: String::new(),
            min_text_length: 1,
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Boundary markers of the narrative block.
    pub narrative: NarrativeMarkers,
}

/// Literal markers delimiting the narrative ("Dinâmica do Fato") block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeMarkers {
    /// Label that opens the narrative.
    pub section_marker: String,

    /// Declarant phrases that close the narrative.
    pub terminal_phrases: Vec<String>,

    /// Page footer timestamp labels; they also close the narrative.
    pub footer_markers: Vec<String>,

    /// Lines starting with one of these are dropped from the narrative.
    pub boilerplate_prefixes: Vec<String>,
}

impl Default for NarrativeMarkers {
    fn default() -> Self {
        Self {
            section_marker: "Dinâmica do Fato".to_string(),
            terminal_phrases: vec![
                "QUE a declarante".to_string(),
                "QUE o declarante".to_string(),
            ],
            footer_markers: vec!["Impresso em".to_string()],
            boilerplate_prefixes: vec![
                "Protocolo nº".to_string(),
                "REGISTRO DE OCORRÊNCIA".to_string(),
            ],
        }
    }
}

impl NarrativeMarkers {
    /// Byte offset of the earliest terminal phrase or footer marker in `line`.
    pub fn terminal_position(&self, line: &str) -> Option<usize> {
        self.terminal_phrases
            .iter()
            .chain(self.footer_markers.iter())
            .filter(|m| !m.is_empty())
            .filter_map(|m| line.find(m.as_str()))
            .min()
    }

    /// Whether `line` is page boilerplate (protocol number, document title).
    pub fn is_boilerplate(&self, line: &str) -> bool {
        let line = line.trim_start();
        self.boilerplate_prefixes
            .iter()
            .filter(|p| !p.is_empty())
            .any(|p| line.starts_with(p.as_str()))
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format name (json, csv, xml, sheet, text).
    pub default_format: String,

    /// Label for a true flag in text and tabular output.
    pub yes_label: String,

    /// Label for a false flag in text and tabular output.
    pub no_label: String,

    /// Placeholder printed for missing values in text output.
    pub null_label: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            yes_label: "Sim".to_string(),
            no_label: "Não".to_string(),
            null_label: "None".to_string(),
        }
    }
}

impl OcorrConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: OcorrConfig =
            serde_json::from_str(r#"{"output": {"yes_label": "Yes"}}"#).unwrap();
        assert_eq!(config.output.yes_label, "Yes");
        assert_eq!(config.output.no_label, "Não");
        assert_eq!(config.extraction.narrative, NarrativeMarkers::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = OcorrConfig::default();
        config.pdf.page_separator = "\n".to_string();
        config.save(&path).unwrap();

        assert_eq!(OcorrConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_terminal_position_takes_earliest_marker() {
        let markers = NarrativeMarkers::default();
        let line = "fim do relato. QUE a declarante Impresso em 01/01/2024";
        assert_eq!(markers.terminal_position(line), Some(15));
        assert_eq!(markers.terminal_position("texto comum"), None);
    }

    #[test]
    fn test_boilerplate_detection() {
        let markers = NarrativeMarkers::default();
        assert!(markers.is_boilerplate("  Protocolo nº: 2024/0001"));
        assert!(markers.is_boilerplate("REGISTRO DE OCORRÊNCIA"));
        assert!(!markers.is_boilerplate("o registro de ocorrência foi lavrado"));
    }
}

//! Output formats for an extracted occurrence record.

use clap::ValueEnum;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use ocorr_core::models::config::OutputConfig;
use ocorr_core::{DocumentField, FieldKey, FieldValue, OccurrenceRecord, PartyKind};

/// Root element of the XML document.
const XML_ROOT: &str = "ocorrencia";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON document (nested party records)
    Json,
    /// Delimited table: header row and one value row
    Csv,
    /// XML document, one element per field
    Xml,
    /// Two-column spreadsheet table (campo, valor)
    Sheet,
    /// Human-readable report
    Text,
}

impl OutputFormat {
    /// Parse a format name as used in the configuration file.
    pub fn from_name(name: &str) -> anyhow::Result<Self> {
        <Self as ValueEnum>::from_str(name, true)
            .map_err(|e| anyhow::anyhow!("Invalid output format '{}': {}", name, e))
    }

    /// File extension for outputs in this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Xml => "xml",
            OutputFormat::Sheet => "sheet.csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn format_record(
    record: &OccurrenceRecord,
    format: OutputFormat,
    labels: &OutputConfig,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_csv(record, labels),
        OutputFormat::Xml => format_xml(record),
        OutputFormat::Sheet => format_sheet(record, labels),
        OutputFormat::Text => Ok(format_text(record, labels)),
    }
}

/// Cell content for tabular outputs. Nulls are empty cells.
fn cell(value: &FieldValue, labels: &OutputConfig) -> String {
    match value {
        FieldValue::Null => String::new(),
        FieldValue::Text(text) => text.clone(),
        FieldValue::Flag(flag) => yes_no(*flag, labels).to_string(),
    }
}

fn yes_no(flag: bool, labels: &OutputConfig) -> &str {
    if flag {
        &labels.yes_label
    } else {
        &labels.no_label
    }
}

fn format_csv(record: &OccurrenceRecord, labels: &OutputConfig) -> anyhow::Result<String> {
    let flat = record.flatten();
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(flat.iter().map(|(key, _)| key.as_str()))?;
    wtr.write_record(flat.iter().map(|(_, value)| cell(value, labels)))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_sheet(record: &OccurrenceRecord, labels: &OutputConfig) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["campo", "valor"])?;
    for (key, value) in record.flatten() {
        wtr.write_record([key, cell(&value, labels)])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_xml(record: &OccurrenceRecord) -> anyhow::Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new(XML_ROOT)))?;

    for (key, value) in record.flatten() {
        match value.as_text() {
            Some(text) => {
                writer.write_event(Event::Start(BytesStart::new(key.as_str())))?;
                writer.write_event(Event::Text(BytesText::new(&text)))?;
                writer.write_event(Event::End(BytesEnd::new(key.as_str())))?;
            }
            None => writer.write_event(Event::Empty(BytesStart::new(key.as_str())))?,
        }
    }

    writer.write_event(Event::End(BytesEnd::new(XML_ROOT)))?;

    Ok(String::from_utf8(writer.into_inner())?)
}

fn party_heading(kind: PartyKind) -> &'static str {
    match kind {
        PartyKind::Complainant => "DADOS DA VÍTIMA",
        PartyKind::Accused => "DADOS DO AUTOR",
    }
}

fn push_field(output: &mut String, key: &str, value: Option<&str>, labels: &OutputConfig) {
    let value = value.unwrap_or(&labels.null_label);
    output.push_str(&format!("{}: {}\n", key, value));
}

pub fn format_text(record: &OccurrenceRecord, labels: &OutputConfig) -> String {
    let mut output = String::new();

    output.push_str("===== DADOS DA OCORRÊNCIA =====\n");
    for (field, value) in record.fields() {
        push_field(&mut output, field.key(), value, labels);
    }
    push_field(
        &mut output,
        DocumentField::NARRATIVE_KEY,
        record.narrative.as_deref(),
        labels,
    );
    push_field(
        &mut output,
        DocumentField::RepresentationIntent.key(),
        Some(yes_no(record.representation_intent, labels)),
        labels,
    );

    // Absent sections are left out entirely
    for kind in PartyKind::ALL {
        if let Some(party) = record.party(kind) {
            output.push_str(&format!("\n===== {} =====\n", party_heading(kind)));
            for (field, value) in party.fields() {
                push_field(&mut output, field.key(), value, labels);
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocorr_core::{PartyField, PartyRecord};
    use pretty_assertions::assert_eq;

    fn sample_record() -> OccurrenceRecord {
        let victim = PartyRecord::from_fields([
            (PartyField::Name, Some("Maria Silva".to_string())),
            (PartyField::NationalId, Some("123.456.789-00".to_string())),
        ]);
        OccurrenceRecord::new(
            [
                (DocumentField::RegistrationNumber, Some("123-45678/2024".to_string())),
                (DocumentField::Neighborhood, Some("Centro".to_string())),
            ],
            Some(victim),
            None,
            Some("Relato, com vírgula\nsegunda linha".to_string()),
            true,
        )
    }

    #[test]
    fn test_format_from_name() {
        assert_eq!(OutputFormat::from_name("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_name("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_name("xlsx").is_err());
    }

    #[test]
    fn test_csv_header_follows_flattened_order() {
        let output = format_csv(&sample_record(), &OutputConfig::default()).unwrap();
        let mut reader = csv::Reader::from_reader(output.as_bytes());

        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), 50);
        assert_eq!(&headers[0], "delegacia");
        assert_eq!(&headers[18], "vitima_nome");
        assert_eq!(&headers[49], "desejo_representar");

        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[0], "");
        assert_eq!(&row[1], "123-45678/2024");
        assert_eq!(&row[18], "Maria Silva");
        assert_eq!(&row[48], "Relato, com vírgula\nsegunda linha");
        assert_eq!(&row[49], "Sim");
    }

    #[test]
    fn test_sheet_has_one_row_per_field() {
        let output = format_sheet(&sample_record(), &OutputConfig::default()).unwrap();
        let mut reader = csv::Reader::from_reader(output.as_bytes());

        let headers: Vec<&str> = reader.headers().unwrap().iter().collect();
        assert_eq!(headers, vec!["campo", "valor"]);
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 50);
        assert_eq!(&rows[16][0], "bairro");
        assert_eq!(&rows[16][1], "Centro");
        assert_eq!(&rows[33][0], "autor_nome");
        assert_eq!(&rows[33][1], "");
    }

    #[test]
    fn test_xml_elements() {
        let output = format_xml(&sample_record()).unwrap();
        assert!(output.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(output.contains("<numero_registro>123-45678/2024</numero_registro>"));
        assert!(output.contains("<delegacia/>"));
        assert!(output.contains("<vitima_cpf>123.456.789-00</vitima_cpf>"));
        assert!(output.contains("<desejo_representar>true</desejo_representar>"));
        assert!(output.trim_end().ends_with("</ocorrencia>"));
    }

    #[test]
    fn test_xml_escapes_text() {
        let record = OccurrenceRecord::new(
            [(DocumentField::Origin, Some("A & B <C>".to_string()))],
            None,
            None,
            None,
            false,
        );
        let output = format_xml(&record).unwrap();
        assert!(output.contains("<origem>A &amp; B &lt;C&gt;</origem>"));
    }

    #[test]
    fn test_text_sections_and_labels() {
        let output = format_text(&sample_record(), &OutputConfig::default());

        assert!(output.starts_with("===== DADOS DA OCORRÊNCIA =====\n"));
        assert!(output.contains("numero_registro: 123-45678/2024\n"));
        assert!(output.contains("delegacia: None\n"));
        assert!(output.contains("desejo_representar: Sim\n"));
        assert!(output.contains("===== DADOS DA VÍTIMA =====\nnome: Maria Silva\n"));
        assert!(!output.contains("DADOS DO AUTOR"));
    }

    #[test]
    fn test_text_uses_configured_labels() {
        let labels = OutputConfig {
            yes_label: "Yes".to_string(),
            no_label: "No".to_string(),
            null_label: "-".to_string(),
            ..OutputConfig::default()
        };
        let record = OccurrenceRecord::new([], None, None, None, false);
        let output = format_text(&record, &labels);

        assert!(output.contains("desejo_representar: No\n"));
        assert!(output.contains("dinamica_fato: -\n"));
    }

    #[test]
    fn test_json_nests_parties() {
        let output =
            format_record(&sample_record(), OutputFormat::Json, &OutputConfig::default()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["numero_registro"], "123-45678/2024");
        assert_eq!(json["vitima"]["nome"], "Maria Silva");
        assert_eq!(json["vitima"]["email"], serde_json::Value::Null);
        assert_eq!(json["autor"], serde_json::Value::Null);
        assert_eq!(json["desejo_representar"], true);
    }
}

//! Occurrence report data models.
//!
//! Field keys serialize to the snake_case Portuguese names used by the
//! downstream exports (`numero_registro`, `vitima_nome`, ...). Enum declaration
//! order is the output order.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A key that identifies one extracted field.
pub trait FieldKey: Copy + Ord + fmt::Debug {
    /// Serialized name of the field.
    fn key(self) -> &'static str;
}

/// Document-level fields, in registry declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DocumentField {
    /// Precinct identifier ("15a.Delegacia de Polícia").
    #[serde(rename = "delegacia")]
    Precinct,
    /// Registration number ("152-04567/2024").
    #[serde(rename = "numero_registro")]
    RegistrationNumber,
    #[serde(rename = "data_hora_registro_inicio")]
    RegistrationStart,
    #[serde(rename = "data_hora_registro_final")]
    RegistrationEnd,
    #[serde(rename = "origem")]
    Origin,
    #[serde(rename = "circunscricao")]
    Jurisdiction,
    #[serde(rename = "responsavel_investigacao")]
    Investigator,
    /// Free-form note between the dispatch header and the involved parties.
    #[serde(rename = "despacho_autoridade")]
    AuthorityDispatch,
    #[serde(rename = "data_procedimento")]
    ProcedureDate,
    #[serde(rename = "ultimo_documento_ra")]
    LastDocument,
    #[serde(rename = "protocolo_numero")]
    ProtocolNumber,
    #[serde(rename = "tipo_ocorrencia")]
    OccurrenceType,
    /// Legal classification (article of the penal code).
    #[serde(rename = "capitulacao")]
    LegalClassification,
    #[serde(rename = "motivo_presumido")]
    PresumedMotive,
    #[serde(rename = "data_hora_fato")]
    FactDateTime,
    #[serde(rename = "local_fato")]
    FactLocation,
    #[serde(rename = "bairro")]
    Neighborhood,
    #[serde(rename = "municipio")]
    Municipality,
    /// Existence flag: the complainant wishes to press charges.
    #[serde(rename = "desejo_representar")]
    RepresentationIntent,
}

impl DocumentField {
    /// Fields extracted as text, in output order.
    pub const CAPTURED: [DocumentField; 18] = [
        DocumentField::Precinct,
        DocumentField::RegistrationNumber,
        DocumentField::RegistrationStart,
        DocumentField::RegistrationEnd,
        DocumentField::Origin,
        DocumentField::Jurisdiction,
        DocumentField::Investigator,
        DocumentField::AuthorityDispatch,
        DocumentField::ProcedureDate,
        DocumentField::LastDocument,
        DocumentField::ProtocolNumber,
        DocumentField::OccurrenceType,
        DocumentField::LegalClassification,
        DocumentField::PresumedMotive,
        DocumentField::FactDateTime,
        DocumentField::FactLocation,
        DocumentField::Neighborhood,
        DocumentField::Municipality,
    ];

    /// Key of the narrative text in serialized output.
    pub const NARRATIVE_KEY: &'static str = "dinamica_fato";
}

impl FieldKey for DocumentField {
    fn key(self) -> &'static str {
        match self {
            DocumentField::Precinct => "delegacia",
            DocumentField::RegistrationNumber => "numero_registro",
            DocumentField::RegistrationStart => "data_hora_registro_inicio",
            DocumentField::RegistrationEnd => "data_hora_registro_final",
            DocumentField::Origin => "origem",
            DocumentField::Jurisdiction => "circunscricao",
            DocumentField::Investigator => "responsavel_investigacao",
            DocumentField::AuthorityDispatch => "despacho_autoridade",
            DocumentField::ProcedureDate => "data_procedimento",
            DocumentField::LastDocument => "ultimo_documento_ra",
            DocumentField::ProtocolNumber => "protocolo_numero",
            DocumentField::OccurrenceType => "tipo_ocorrencia",
            DocumentField::LegalClassification => "capitulacao",
            DocumentField::PresumedMotive => "motivo_presumido",
            DocumentField::FactDateTime => "data_hora_fato",
            DocumentField::FactLocation => "local_fato",
            DocumentField::Neighborhood => "bairro",
            DocumentField::Municipality => "municipio",
            DocumentField::RepresentationIntent => "desejo_representar",
        }
    }
}

/// Fields of an involved party, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PartyField {
    #[serde(rename = "nome")]
    Name,
    /// National ID (CPF), kept with its original punctuation.
    #[serde(rename = "cpf")]
    NationalId,
    #[serde(rename = "endereco")]
    Address,
    #[serde(rename = "bairro")]
    Neighborhood,
    #[serde(rename = "municipio")]
    Municipality,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "pai")]
    FatherName,
    #[serde(rename = "mae")]
    MotherName,
    #[serde(rename = "data_nascimento")]
    BirthDate,
    #[serde(rename = "naturalidade")]
    Birthplace,
    #[serde(rename = "nacionalidade")]
    Nationality,
    #[serde(rename = "sexo")]
    Sex,
    #[serde(rename = "cor")]
    RaceColor,
    #[serde(rename = "estado_civil")]
    MaritalStatus,
    #[serde(rename = "ocupacao")]
    Occupation,
}

impl PartyField {
    pub const ALL: [PartyField; 15] = [
        PartyField::Name,
        PartyField::NationalId,
        PartyField::Address,
        PartyField::Neighborhood,
        PartyField::Municipality,
        PartyField::Email,
        PartyField::FatherName,
        PartyField::MotherName,
        PartyField::BirthDate,
        PartyField::Birthplace,
        PartyField::Nationality,
        PartyField::Sex,
        PartyField::RaceColor,
        PartyField::MaritalStatus,
        PartyField::Occupation,
    ];
}

impl FieldKey for PartyField {
    fn key(self) -> &'static str {
        match self {
            PartyField::Name => "nome",
            PartyField::NationalId => "cpf",
            PartyField::Address => "endereco",
            PartyField::Neighborhood => "bairro",
            PartyField::Municipality => "municipio",
            PartyField::Email => "email",
            PartyField::FatherName => "pai",
            PartyField::MotherName => "mae",
            PartyField::BirthDate => "data_nascimento",
            PartyField::Birthplace => "naturalidade",
            PartyField::Nationality => "nacionalidade",
            PartyField::Sex => "sexo",
            PartyField::RaceColor => "cor",
            PartyField::MaritalStatus => "estado_civil",
            PartyField::Occupation => "ocupacao",
        }
    }
}

/// Role of an involved party in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyKind {
    /// The victim ("Vítima").
    Complainant,
    /// The accused ("Autor").
    Accused,
}

impl PartyKind {
    pub const ALL: [PartyKind; 2] = [PartyKind::Complainant, PartyKind::Accused];

    /// Section label as printed in the report.
    pub fn label(self) -> &'static str {
        match self {
            PartyKind::Complainant => "Vítima",
            PartyKind::Accused => "Autor",
        }
    }

    /// Prefix used for this party's keys in flattened output.
    pub fn key(self) -> &'static str {
        match self {
            PartyKind::Complainant => "vitima",
            PartyKind::Accused => "autor",
        }
    }

    /// The opposite party.
    pub fn other(self) -> Self {
        match self {
            PartyKind::Complainant => PartyKind::Accused,
            PartyKind::Accused => PartyKind::Complainant,
        }
    }
}

impl fmt::Display for PartyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Details of one involved party.
///
/// A record always carries every [`PartyField`]; fields that were not found
/// are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PartyRecord {
    fields: BTreeMap<PartyField, Option<String>>,
}

impl PartyRecord {
    /// Build a record, filling unspecified fields with `None`.
    pub fn from_fields(values: impl IntoIterator<Item = (PartyField, Option<String>)>) -> Self {
        let mut fields: BTreeMap<_, _> = PartyField::ALL.iter().map(|f| (*f, None)).collect();
        fields.extend(values);
        Self { fields }
    }

    /// Value of a field, if found.
    pub fn get(&self, field: PartyField) -> Option<&str> {
        self.fields.get(&field).and_then(|v| v.as_deref())
    }

    /// All fields in output order.
    pub fn fields(&self) -> impl Iterator<Item = (PartyField, Option<&str>)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_deref()))
    }

    /// Number of fields that were found.
    pub fn found_count(&self) -> usize {
        self.fields.values().filter(|v| v.is_some()).count()
    }
}

/// Structured result of extracting one occurrence report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OccurrenceRecord {
    #[serde(flatten)]
    fields: BTreeMap<DocumentField, Option<String>>,

    /// Victim section, `None` when the section was not found.
    #[serde(rename = "vitima")]
    pub complainant: Option<PartyRecord>,

    /// Accused section, `None` when the section was not found.
    #[serde(rename = "autor")]
    pub accused: Option<PartyRecord>,

    /// Narrative text ("Dinâmica do Fato").
    #[serde(rename = "dinamica_fato")]
    pub narrative: Option<String>,

    /// Whether the complainant declared the wish to press charges.
    #[serde(rename = "desejo_representar")]
    pub representation_intent: bool,
}

impl OccurrenceRecord {
    /// Build a record. Captured fields missing from `values` are `None`, and
    /// non-text keys are ignored.
    pub fn new(
        values: impl IntoIterator<Item = (DocumentField, Option<String>)>,
        complainant: Option<PartyRecord>,
        accused: Option<PartyRecord>,
        narrative: Option<String>,
        representation_intent: bool,
    ) -> Self {
        let mut fields: BTreeMap<_, _> =
            DocumentField::CAPTURED.iter().map(|f| (*f, None)).collect();
        for (field, value) in values {
            if fields.contains_key(&field) {
                fields.insert(field, value);
            }
        }

        Self {
            fields,
            complainant,
            accused,
            narrative,
            representation_intent,
        }
    }

    /// Value of a document-level field, if found.
    pub fn get(&self, field: DocumentField) -> Option<&str> {
        self.fields.get(&field).and_then(|v| v.as_deref())
    }

    /// Document-level text fields in output order.
    pub fn fields(&self) -> impl Iterator<Item = (DocumentField, Option<&str>)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_deref()))
    }

    /// Record of the given party, if its section was found.
    pub fn party(&self, kind: PartyKind) -> Option<&PartyRecord> {
        match kind {
            PartyKind::Complainant => self.complainant.as_ref(),
            PartyKind::Accused => self.accused.as_ref(),
        }
    }

    /// Flatten into a single ordered list of `(key, value)` pairs.
    ///
    /// Party fields are prefixed with the party key (`vitima_nome`). A missing
    /// party section still contributes all its keys, with null values, so the
    /// column set is stable across documents.
    pub fn flatten(&self) -> Vec<(String, FieldValue)> {
        let mut flat = Vec::with_capacity(
            DocumentField::CAPTURED.len() + 2 * PartyField::ALL.len() + 2,
        );

        for (field, value) in self.fields() {
            flat.push((field.key().to_string(), FieldValue::from(value)));
        }

        for kind in PartyKind::ALL {
            let party = self.party(kind);
            for field in PartyField::ALL {
                let value = party.and_then(|p| p.get(field));
                flat.push((
                    format!("{}_{}", kind.key(), field.key()),
                    FieldValue::from(value),
                ));
            }
        }

        flat.push((
            DocumentField::NARRATIVE_KEY.to_string(),
            FieldValue::from(self.narrative.as_deref()),
        ));
        flat.push((
            DocumentField::RepresentationIntent.key().to_string(),
            FieldValue::Flag(self.representation_intent),
        ));

        flat
    }

    /// Flattened keys whose value is null.
    pub fn missing_fields(&self) -> Vec<String> {
        self.flatten()
            .into_iter()
            .filter(|(_, v)| v.is_null())
            .map(|(k, _)| k)
            .collect()
    }
}

/// A single value in a flattened record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Null,
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Plain text form; flags render as `true`/`false`.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Null => None,
            FieldValue::Text(s) => Some(Cow::Borrowed(s)),
            FieldValue::Flag(b) => Some(Cow::Owned(b.to_string())),
        }
    }
}

impl From<Option<&str>> for FieldValue {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(s) => FieldValue::Text(s.to_string()),
            None => FieldValue::Null,
        }
    }
}

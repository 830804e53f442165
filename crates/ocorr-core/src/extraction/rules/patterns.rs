//! Regex patterns for occurrence report extraction.
//!
//! Every pattern is anchored on a literal label from the report layout.
//! Capture patterns have exactly one capturing group.

use lazy_static::lazy_static;
use regex::Regex;

/// Phrase declaring the complainant's wish to press charges.
pub const REPRESENTATION_INTENT_PHRASE: &str =
    "QUE MANIFESTA O DESEJO DE REPRESENTAR CRIMINALMENTE CONTRA OS AUTORES DO FATO.";

lazy_static! {
    // Administrative header
    pub static ref PRECINCT: Regex = Regex::new(
        r"(?i)(\d+a\.Delegacia de Polícia)"
    ).unwrap();

    pub static ref REGISTRATION_NUMBER: Regex = Regex::new(
        r"N[º°]\.?\s*(\d{3}-\d{5}/\d{4})"
    ).unwrap();

    pub static ref REGISTRATION_START: Regex = Regex::new(
        r"Data/Hora Início do Registro:\s*(\d{2}/\d{2}/\d{4} \d{2}:\d{2})"
    ).unwrap();

    pub static ref REGISTRATION_END: Regex = Regex::new(
        r"Final do Registro:\s*(\d{2}/\d{2}/\d{4} \d{2}:\d{2})"
    ).unwrap();

    pub static ref ORIGIN: Regex = Regex::new(
        r"Origem: (.*?)\."
    ).unwrap();

    pub static ref JURISDICTION: Regex = Regex::new(
        r"Circunscrição: (.*)"
    ).unwrap();

    pub static ref INVESTIGATOR: Regex = Regex::new(
        r"Responsável p/ Investigação: (.*)"
    ).unwrap();

    pub static ref AUTHORITY_DISPATCH: Regex = Regex::new(
        r"(?s)Despacho da Autoridade\s*(.*?)\s*Envolvido\(s\)"
    ).unwrap();

    pub static ref PROCEDURE_DATE: Regex = Regex::new(
        r"Data do Procedimento:\s*(\d{2}/\d{2}/\d{4} \d{2}:\d{2})"
    ).unwrap();

    pub static ref LAST_DOCUMENT: Regex = Regex::new(
        r"Último documento de RA: (.*)"
    ).unwrap();

    pub static ref PROTOCOL_NUMBER: Regex = Regex::new(
        r"Protocolo nº: (.*)"
    ).unwrap();

    // Occurrence details
    pub static ref OCCURRENCE_TYPE: Regex = Regex::new(
        r"Ocorrências\s*(.*)\s*Capitulação"
    ).unwrap();

    pub static ref LEGAL_CLASSIFICATION: Regex = Regex::new(
        r"Capitulação: (.*)"
    ).unwrap();

    pub static ref PRESUMED_MOTIVE: Regex = Regex::new(
        r"Motivo Presumido: (.*)"
    ).unwrap();

    pub static ref FACT_DATE_TIME: Regex = Regex::new(
        r"Data e Hora do fato: (.*)"
    ).unwrap();

    pub static ref FACT_LOCATION: Regex = Regex::new(
        r"(?s)Local: (.*?)\s*Bairro:"
    ).unwrap();

    pub static ref NEIGHBORHOOD: Regex = Regex::new(
        r"Bairro: (.*?)\s*Municipio:"
    ).unwrap();

    // Stops at the state suffix ("Porto Alegre-RS")
    pub static ref MUNICIPALITY: Regex = Regex::new(
        r"Municipio: (.*?)-"
    ).unwrap();

    pub static ref REPRESENTATION_INTENT: Regex = Regex::new(
        &regex::escape(REPRESENTATION_INTENT_PHRASE)
    ).unwrap();

    // Section boundaries
    pub static ref COMPLAINANT_LABEL: Regex = Regex::new(
        r"(?i)\bVítima\b"
    ).unwrap();

    pub static ref ACCUSED_LABEL: Regex = Regex::new(
        r"(?i)\bAutor\b"
    ).unwrap();

    pub static ref NARRATIVE_LABEL: Regex = Regex::new(
        r"(?i)Dinâmica do Fato"
    ).unwrap();

    // Party details, matched inside an isolated party section
    pub static ref PARTY_NAME: Regex = Regex::new(
        r"(?s)Nome: (.*?)(?:\s*-|\n|$)"
    ).unwrap();

    pub static ref PARTY_NATIONAL_ID: Regex = Regex::new(
        r"CPF/CIC\s*N[°º]\s*(\d{3}\.?\d{3}\.?\d{3}-?\d{2})"
    ).unwrap();

    pub static ref PARTY_ADDRESS: Regex = Regex::new(
        r"(?s)Residente na (.*?)(?:\s*Bairro:|\n|$)"
    ).unwrap();

    pub static ref PARTY_NEIGHBORHOOD: Regex = Regex::new(
        r"(?s)Bairro: (.*?)(?:\s*Municipio:|\n|$)"
    ).unwrap();

    pub static ref PARTY_MUNICIPALITY: Regex = Regex::new(
        r"(?s)Municipio: (.*?)(?:-|\n|$)"
    ).unwrap();

    pub static ref PARTY_EMAIL: Regex = Regex::new(
        r"e-mail: (\S*)"
    ).unwrap();

    // "Filho de: <pai> e <mae>" on a single line
    pub static ref PARTY_FATHER: Regex = Regex::new(
        r"Filho de: ([^\n]*?)(?:\s+e\s+|\s*Data de nascimento:|\n|$)"
    ).unwrap();

    pub static ref PARTY_MOTHER: Regex = Regex::new(
        r"Filho de: [^\n]*?\s+e\s+([^\n]*?)(?:\s*Data de nascimento:|\n|$)"
    ).unwrap();

    pub static ref PARTY_BIRTH_DATE: Regex = Regex::new(
        r"Data de nascimento: ([\d/]+)"
    ).unwrap();

    pub static ref PARTY_BIRTHPLACE: Regex = Regex::new(
        r"(?s)Naturalidade: (.*?)(?:-|\n|$)"
    ).unwrap();

    pub static ref PARTY_NATIONALITY: Regex = Regex::new(
        r"(?s)Nacionalidade: (.*?)(?:\s*Sexo:|\n|$)"
    ).unwrap();

    pub static ref PARTY_SEX: Regex = Regex::new(
        r"(?s)Sexo: (.*?)(?:\s*Cor:|\n|$)"
    ).unwrap();

    pub static ref PARTY_RACE_COLOR: Regex = Regex::new(
        r"(?s)Cor: (.*?)(?:\s*Estado Civil:|\n|$)"
    ).unwrap();

    pub static ref PARTY_MARITAL_STATUS: Regex = Regex::new(
        r"(?s)Estado Civil: (.*?)(?:\s*Ocupação|\n|$)"
    ).unwrap();

    pub static ref PARTY_OCCUPATION: Regex = Regex::new(
        r"Ocupação Principal: ([^\n]*)"
    ).unwrap();
}

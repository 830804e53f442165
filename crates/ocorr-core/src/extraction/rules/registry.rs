//! Built-in rule tables.
//!
//! Document-level and party-level rules are kept in two separate tables: the
//! same label ("Bairro:", "Municipio:") means different things at each scope.

use lazy_static::lazy_static;

use super::patterns::*;
use super::{FieldRule, RuleSet};
use crate::models::occurrence::{DocumentField, PartyField};

lazy_static! {
    static ref DOCUMENT_RULES: RuleSet<DocumentField> = RuleSet::new(vec![
        FieldRule::capture(DocumentField::Precinct, PRECINCT.clone()),
        FieldRule::capture(DocumentField::RegistrationNumber, REGISTRATION_NUMBER.clone()),
        FieldRule::capture(DocumentField::RegistrationStart, REGISTRATION_START.clone()),
        FieldRule::capture(DocumentField::RegistrationEnd, REGISTRATION_END.clone()),
        FieldRule::capture(DocumentField::Origin, ORIGIN.clone()),
        FieldRule::capture(DocumentField::Jurisdiction, JURISDICTION.clone()),
        FieldRule::capture(DocumentField::Investigator, INVESTIGATOR.clone()),
        FieldRule::capture(DocumentField::AuthorityDispatch, AUTHORITY_DISPATCH.clone()),
        FieldRule::capture(DocumentField::ProcedureDate, PROCEDURE_DATE.clone()),
        FieldRule::capture(DocumentField::LastDocument, LAST_DOCUMENT.clone()),
        FieldRule::capture(DocumentField::ProtocolNumber, PROTOCOL_NUMBER.clone()),
        FieldRule::capture(DocumentField::OccurrenceType, OCCURRENCE_TYPE.clone()),
        FieldRule::capture(DocumentField::LegalClassification, LEGAL_CLASSIFICATION.clone()),
        FieldRule::capture(DocumentField::PresumedMotive, PRESUMED_MOTIVE.clone()),
        FieldRule::capture(DocumentField::FactDateTime, FACT_DATE_TIME.clone()),
        FieldRule::capture(DocumentField::FactLocation, FACT_LOCATION.clone()),
        FieldRule::capture(DocumentField::Neighborhood, NEIGHBORHOOD.clone()),
        FieldRule::capture(DocumentField::Municipality, MUNICIPALITY.clone()),
        FieldRule::exists(DocumentField::RepresentationIntent, REPRESENTATION_INTENT.clone()),
    ])
    .unwrap();

    static ref PARTY_RULES: RuleSet<PartyField> = RuleSet::new(vec![
        FieldRule::capture(PartyField::Name, PARTY_NAME.clone()),
        FieldRule::capture(PartyField::NationalId, PARTY_NATIONAL_ID.clone()),
        FieldRule::capture(PartyField::Address, PARTY_ADDRESS.clone()),
        FieldRule::capture(PartyField::Neighborhood, PARTY_NEIGHBORHOOD.clone()),
        FieldRule::capture(PartyField::Municipality, PARTY_MUNICIPALITY.clone()),
        FieldRule::capture(PartyField::Email, PARTY_EMAIL.clone()),
        FieldRule::capture(PartyField::FatherName, PARTY_FATHER.clone()),
        FieldRule::capture(PartyField::MotherName, PARTY_MOTHER.clone()),
        FieldRule::capture(PartyField::BirthDate, PARTY_BIRTH_DATE.clone()),
        FieldRule::capture(PartyField::Birthplace, PARTY_BIRTHPLACE.clone()),
        FieldRule::capture(PartyField::Nationality, PARTY_NATIONALITY.clone()),
        FieldRule::capture(PartyField::Sex, PARTY_SEX.clone()),
        FieldRule::capture(PartyField::RaceColor, PARTY_RACE_COLOR.clone()),
        FieldRule::capture(PartyField::MaritalStatus, PARTY_MARITAL_STATUS.clone()),
        FieldRule::capture(PartyField::Occupation, PARTY_OCCUPATION.clone()),
    ])
    .unwrap();
}

/// Document-level rules, in output order.
pub fn document_rules() -> &'static RuleSet<DocumentField> {
    &DOCUMENT_RULES
}

/// Rules applied inside an isolated party section.
pub fn party_rules() -> &'static RuleSet<PartyField> {
    &PARTY_RULES
}

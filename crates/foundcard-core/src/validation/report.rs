//! Field rules of the report form that the derive attributes cannot express

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use validator::{ValidationError, ValidationErrors};

use crate::models::ReportField;

static CARD_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("card number pattern is valid"));

const FOUND_DATE_FORMAT: &str = "%Y-%m-%d";

/// Card numbers contain digits only. Emptiness is reported by the length rule.
pub fn validate_card_number(card_number: &str) -> Result<(), ValidationError> {
    if card_number.is_empty() || CARD_NUMBER_PATTERN.is_match(card_number) {
        return Ok(());
    }
    let mut err = ValidationError::new("digits_only");
    err.message = Some(Cow::from(
        "Le numéro du document ne doit contenir que des chiffres",
    ));
    Err(err)
}

/// Found dates come from a date input and must read as `YYYY-MM-DD`.
pub fn validate_found_date(found_date: &str) -> Result<(), ValidationError> {
    if found_date.is_empty() || parse_found_date(found_date).is_some() {
        return Ok(());
    }
    let mut err = ValidationError::new("invalid_date");
    err.message = Some(Cow::from("La date de découverte est invalide"));
    Err(err)
}

pub fn parse_found_date(found_date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(found_date.trim(), FOUND_DATE_FORMAT).ok()
}

/// First message of each failing field, keyed by field
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<ReportField, String> {
    let mut messages = BTreeMap::new();
    for (name, field_errors) in errors.field_errors() {
        let Some(field) = ReportField::from_name(name.as_ref()) else {
            continue;
        };
        if let Some(first) = field_errors.first() {
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| first.code.to_string());
            messages.insert(field, message);
        }
    }
    messages
}

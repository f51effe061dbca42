use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

/// Field-to-messages map rendered inside the 422 `errors` envelope.
/// BTreeMap keeps field order stable across responses.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FieldErrors(pub BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn single(field: &str, message: &str) -> Self {
        let mut map = BTreeMap::new();
        map.insert(field.to_owned(), vec![message.to_owned()]);
        Self(map)
    }

    pub fn push(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_owned())
            .or_default()
            .push(message.to_owned());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Add a Laravel-style "field is required" message for every listed
    /// field that was absent from the request body.
    pub fn require(&mut self, fields: &[(&str, bool)]) {
        for &(field, present) in fields {
            if !present {
                self.push(field, &format!("The {field} field is required."));
            }
        }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut map = BTreeMap::new();
        for (field, errs) in errors.field_errors() {
            let messages = errs
                .iter()
                .map(|e| match e.message {
                    Some(ref message) => message.to_string(),
                    None => format!("The {field} field is invalid."),
                })
                .collect();
            map.insert(field.to_string(), messages);
        }
        Self(map)
    }
}

// ── Custom field rules ───────────────────────────────────────────────────────

/// Phone number as accepted by OTP requests: 9 to 12 digits.
pub fn phone_number(value: &str) -> Result<(), ValidationError> {
    if (9..=12).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone_number");
        err.message = Some("The phone no must be between 9 and 12 digits.".into());
        Err(err)
    }
}

/// Phone number as accepted by registration: exactly 10 digits.
pub fn phone_number_exact(value: &str) -> Result<(), ValidationError> {
    if value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone_number_exact");
        err.message = Some("The phone no must be 10 digits.".into());
        Err(err)
    }
}

/// Four-digit OTP code.
pub fn otp_code(value: &str) -> Result<(), ValidationError> {
    if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("otp_code");
        err.message = Some("The otp must be 4 digits.".into());
        Err(err)
    }
}

/// ISO `YYYY-MM-DD` date.
pub fn iso_date(value: &str) -> Result<(), ValidationError> {
    if parse_date(value).is_some() {
        Ok(())
    } else {
        let mut err = ValidationError::new("iso_date");
        err.message = Some("The dob is not a valid date.".into());
        Err(err)
    }
}

/// Parse the date grammar accepted by `iso_date`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

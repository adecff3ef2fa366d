use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EnquiryField {
    Name,
    Email,
    Subject,
    Message,
}

/// Contact form fields exactly as submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquiryForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub type FieldErrors = BTreeMap<EnquiryField, Vec<String>>;

impl EnquiryForm {
    /// Checks every field and reports all failures together.
    pub fn validate(&self) -> std::result::Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut check = |field, ok: bool, message: &str| {
            if !ok {
                errors.entry(field).or_default().push(message.to_string());
            }
        };

        check(
            EnquiryField::Name,
            self.name.chars().count() >= 2,
            "Name must be at least 2 characters.",
        );
        check(EnquiryField::Email, EMAIL.is_match(&self.email), "Invalid email address.");
        check(
            EnquiryField::Subject,
            self.subject.chars().count() >= 5,
            "Subject must be at least 5 characters.",
        );
        check(
            EnquiryField::Message,
            self.message.chars().count() >= 10,
            "Message must be at least 10 characters.",
        );

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EnquiryStatus {
    Success,
    Error,
}

/// What the contact form shows after a submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryOutcome {
    pub message: String,
    pub status: EnquiryStatus,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: FieldErrors,
    /// Values to repopulate the form with; cleared after a success.
    pub field_values: EnquiryForm,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid_form() -> EnquiryForm {
        EnquiryForm {
            name: "Ann".to_string(),
            email: "ann@example.gy".to_string(),
            subject: "Investment".to_string(),
            message: "Looking for advice on agriculture.".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let actual = valid_form().validate();
        assert_eq!(actual, Ok(()));
    }

    #[test]
    fn test_all_field_errors_reported_together() {
        let fixture = EnquiryForm {
            name: "A".to_string(),
            email: "not-an-email".to_string(),
            subject: "Hi".to_string(),
            message: "Short".to_string(),
        };
        let actual = fixture.validate().unwrap_err();
        let expected = FieldErrors::from([
            (EnquiryField::Name, vec!["Name must be at least 2 characters.".to_string()]),
            (EnquiryField::Email, vec!["Invalid email address.".to_string()]),
            (EnquiryField::Subject, vec!["Subject must be at least 5 characters.".to_string()]),
            (EnquiryField::Message, vec!["Message must be at least 10 characters.".to_string()]),
        ]);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_email_with_spaces_rejected() {
        let fixture = EnquiryForm { email: "ann @example.gy".to_string(), ..valid_form() };
        let actual = fixture.validate().unwrap_err();
        assert_eq!(actual.keys().copied().collect::<Vec<_>>(), vec![EnquiryField::Email]);
    }
}

//! Participant identity captured during onboarding.
//!
//! The record gates entry into the core questions and is carried into
//! exports. Scoring never reads it.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Youngest accepted participant age.
pub const MIN_AGE: u8 = 10;

/// Oldest accepted participant age.
pub const MAX_AGE: u8 = 120;

/// Maximum length for the participant name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Raw onboarding input, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: Option<u8>,
}

/// Validated participant record.
///
/// # Invariants
///
/// - `name` is non-empty after trimming and at most 200 characters
/// - `email` has a non-empty local part and a domain containing a dot
/// - `age` is within 10..=120
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    name: String,
    email: String,
    age: u8,
}

impl Participant {
    /// Validates onboarding input.
    ///
    /// # Errors
    ///
    /// The first failing field, checked in the order name, email, age.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: Option<u8>,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        let email = email.into().trim().to_string();

        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::invalid_format(
                "name",
                format!("must be {} characters or less", MAX_NAME_LENGTH),
            ));
        }

        Self::validate_email(&email)?;

        let age = age.ok_or_else(|| ValidationError::empty_field("age"))?;
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(ValidationError::out_of_range(
                "age",
                i32::from(MIN_AGE),
                i32::from(MAX_AGE),
                i32::from(age),
            ));
        }

        Ok(Self { name, email, age })
    }

    pub fn from_form(form: &OnboardingForm) -> Result<Self, ValidationError> {
        Self::new(form.name.clone(), form.email.clone(), form.age)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    fn validate_email(email: &str) -> Result<(), ValidationError> {
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        let (local, domain) = email
            .split_once('@')
            .ok_or_else(|| ValidationError::invalid_format("email", "missing @ symbol"))?;
        if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
            return Err(ValidationError::invalid_format("email", "malformed address"));
        }
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(ValidationError::invalid_format("email", "malformed domain"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_complete_input_and_trims() {
        let p = Participant::new("  Ada  ", " ada@uni.edu ", Some(20)).unwrap();
        assert_eq!(p.name(), "Ada");
        assert_eq!(p.email(), "ada@uni.edu");
        assert_eq!(p.age(), 20);
    }

    #[test]
    fn rejects_blank_name() {
        let err = Participant::new("   ", "ada@uni.edu", Some(20)).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("name"));
    }

    #[test]
    fn rejects_missing_email() {
        let err = Participant::new("Ada", "", Some(20)).unwrap_err();
        assert_eq!(err.field(), "email");
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["ada", "@uni.edu", "ada@uni", "ada@@uni.edu", "ada@.edu", "a da@uni.edu"] {
            let err = Participant::new("Ada", email, Some(20)).unwrap_err();
            assert_eq!(err.field(), "email", "{}", email);
        }
    }

    #[test]
    fn rejects_missing_age() {
        let err = Participant::new("Ada", "ada@uni.edu", None).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("age"));
    }

    #[test]
    fn rejects_out_of_range_age() {
        assert!(Participant::new("Ada", "ada@uni.edu", Some(9)).is_err());
        assert!(Participant::new("Ada", "ada@uni.edu", Some(121)).is_err());
        assert!(Participant::new("Ada", "ada@uni.edu", Some(10)).is_ok());
        assert!(Participant::new("Ada", "ada@uni.edu", Some(120)).is_ok());
    }

    #[test]
    fn from_form_uses_form_fields() {
        let form = OnboardingForm {
            name: "Lin".to_string(),
            email: "lin@college.org".to_string(),
            age: Some(19),
        };
        assert_eq!(Participant::from_form(&form).unwrap().name(), "Lin");
    }
}

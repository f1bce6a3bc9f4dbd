//! Account creation input and its schema.

use std::fmt;
use std::sync::LazyLock;

use crate::error::ValidationFailure;
use crate::records::SubmissionRecord;
use crate::validation::{text_len, FieldValue, Rule, ValidationSchema};
use crate::value_objects::ExperienceYears;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Inline message shown while the password is too short.
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "Password must be at least 6 characters long.";

/// Live check run on every password change, independent of the schema.
pub fn password_too_short(password: &str) -> bool {
    text_len(password) < MIN_PASSWORD_LENGTH
}

static SCHEMA: LazyLock<ValidationSchema<AccountCreationInput>> = LazyLock::new(|| {
    ValidationSchema::<AccountCreationInput>::new()
        .field(|i| FieldValue::Text(&i.email), [Rule::Email])
        .field(
            |i| FieldValue::Text(&i.password),
            [Rule::MinLength(MIN_PASSWORD_LENGTH)],
        )
        .field(
            |i| FieldValue::Text(&i.experience_years),
            [Rule::OneOf(ExperienceYears::TOKENS)],
        )
        .field(|i| FieldValue::Flag(i.remember), [Rule::Boolean])
});

/// Snapshot of the creation form at submit time.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct AccountCreationInput {
    pub email: String,
    pub password: String,
    /// Raw select value; empty until the user picks an option
    pub experience_years: String,
    pub remember: bool,
}

impl AccountCreationInput {
    pub fn schema() -> &'static ValidationSchema<AccountCreationInput> {
        &SCHEMA
    }

    pub fn validate(&self) -> Result<(), ValidationFailure> {
        Self::schema().validate(self)
    }

    /// Validate and convert into the record handed to the log sink.
    pub fn into_record(self) -> Result<SubmissionRecord, ValidationFailure> {
        self.validate()?;
        let experience_years = self
            .experience_years
            .parse::<ExperienceYears>()
            .map_err(|e| ValidationFailure::new(vec![e.to_string()]))?;
        Ok(SubmissionRecord::AccountCreated {
            email: self.email,
            password: self.password,
            experience_years,
            remember: self.remember,
        })
    }
}

impl fmt::Debug for AccountCreationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountCreationInput")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("experience_years", &self.experience_years)
            .field("remember", &self.remember)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> AccountCreationInput {
        AccountCreationInput {
            email: "linalouati99@gmail.com".into(),
            password: "linalo".into(),
            experience_years: "1".into(),
            remember: false,
        }
    }

    #[test]
    fn test_password_too_short_boundary() {
        assert!(password_too_short(""));
        assert!(password_too_short("123"));
        assert!(password_too_short("12345"));
        assert!(!password_too_short("123456"));
        assert!(!password_too_short("a much longer password"));
    }

    #[test]
    fn test_valid_input_passes() {
        assert_eq!(valid_input().validate(), Ok(()));
    }

    #[test]
    fn test_every_experience_token_is_accepted() {
        for token in ExperienceYears::TOKENS {
            let input = AccountCreationInput {
                experience_years: token.to_string(),
                ..valid_input()
            };
            assert!(input.validate().is_ok(), "token {token:?}");
        }
    }

    #[test]
    fn test_empty_form_reports_all_failures_in_field_order() {
        let failure = AccountCreationInput::default().validate().unwrap_err();
        assert_eq!(
            failure.reasons(),
            [
                "Invalid email".to_string(),
                "String must contain at least 6 character(s)".to_string(),
                "Invalid enum value. Expected '0' | '1' | '2' | '3' | '>3', received ''"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_single_bad_field() {
        let input = AccountCreationInput {
            password: "123".into(),
            ..valid_input()
        };
        assert_eq!(
            input.validate().unwrap_err().joined(),
            "String must contain at least 6 character(s)"
        );
    }

    #[test]
    fn test_into_record() {
        let record = valid_input().into_record().unwrap();
        assert_eq!(
            record,
            SubmissionRecord::AccountCreated {
                email: "linalouati99@gmail.com".into(),
                password: "linalo".into(),
                experience_years: ExperienceYears::One,
                remember: false,
            }
        );
    }

    #[test]
    fn test_into_record_rejects_invalid_input() {
        let input = AccountCreationInput {
            email: "nope".into(),
            ..valid_input()
        };
        assert!(input.into_record().is_err());
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", valid_input());
        assert!(debug.contains("[redacted]"));
        assert!(!debug.contains("\"linalo\""));
    }
}

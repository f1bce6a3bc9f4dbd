//! Account deletion input and its schema.

use std::sync::LazyLock;

use crate::error::ValidationFailure;
use crate::records::SubmissionRecord;
use crate::validation::{text_len, FieldValue, Rule, ValidationSchema};
use crate::value_objects::{ReasonCatalog, SelectedReasons};

/// Maximum comment length, in characters.
pub const MAX_COMMENT_LENGTH: usize = 2000;

/// Inline message shown while the comment is too long.
pub const COMMENT_TOO_LONG_MESSAGE: &str = "Comment should not exceed 2000 characters.";

/// Live check run on every comment change, independent of the schema.
pub fn comment_too_long(comment: &str) -> bool {
    text_len(comment) > MAX_COMMENT_LENGTH
}

static SCHEMA: LazyLock<ValidationSchema<AccountDeletionInput>> = LazyLock::new(|| {
    ValidationSchema::<AccountDeletionInput>::new()
        .field(
            |i| FieldValue::Text(&i.comment),
            [Rule::MaxLength(MAX_COMMENT_LENGTH)],
        )
        .field(
            |i| FieldValue::Items(i.selected_reasons.len()),
            [Rule::MinItems(1)],
        )
});

/// Snapshot of the deletion form at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountDeletionInput {
    /// Optional free text; empty when not given
    pub comment: String,
    pub selected_reasons: SelectedReasons,
}

impl AccountDeletionInput {
    pub fn schema() -> &'static ValidationSchema<AccountDeletionInput> {
        &SCHEMA
    }

    pub fn validate(&self) -> Result<(), ValidationFailure> {
        Self::schema().validate(self)
    }

    /// Validate and convert into the record handed to the log sink,
    /// resolving reason indices through the catalog.
    pub fn into_record(self) -> Result<SubmissionRecord, ValidationFailure> {
        self.validate()?;
        Ok(SubmissionRecord::AccountDeleted {
            reasons: ReasonCatalog.resolve(&self.selected_reasons),
            comment: self.comment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_reasons(comment: &str, reasons: &[usize]) -> AccountDeletionInput {
        let mut selected_reasons = SelectedReasons::new();
        for &index in reasons {
            selected_reasons.toggle(index).unwrap();
        }
        AccountDeletionInput {
            comment: comment.to_string(),
            selected_reasons,
        }
    }

    #[test]
    fn test_comment_too_long_boundary() {
        assert!(!comment_too_long(""));
        assert!(!comment_too_long(&"a".repeat(2000)));
        assert!(comment_too_long(&"a".repeat(2001)));
    }

    #[test]
    fn test_no_reason_selected() {
        let failure = with_reasons("Test comment", &[]).validate().unwrap_err();
        assert_eq!(failure.joined(), "Array must contain at least 1 element(s)");
    }

    #[test]
    fn test_long_comment_fails_regardless_of_reasons() {
        let long = "a".repeat(2001);

        let failure = with_reasons(&long, &[0]).validate().unwrap_err();
        assert_eq!(
            failure.reasons(),
            ["String must contain at most 2000 character(s)".to_string()]
        );

        let failure = with_reasons(&long, &[]).validate().unwrap_err();
        assert_eq!(
            failure.joined(),
            "String must contain at most 2000 character(s), Array must contain at least 1 element(s)"
        );
    }

    #[test]
    fn test_empty_comment_is_allowed() {
        assert_eq!(with_reasons("", &[2]).validate(), Ok(()));
    }

    #[test]
    fn test_into_record_resolves_reasons() {
        let record = with_reasons("bye", &[3, 0]).into_record().unwrap();
        assert_eq!(
            record,
            SubmissionRecord::AccountDeleted {
                comment: "bye".into(),
                reasons: vec![
                    "I'm getting too many emails.".into(),
                    "I have privacy concerns.".into(),
                ],
            }
        );
    }
}

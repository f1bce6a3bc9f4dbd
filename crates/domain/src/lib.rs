//! Account Forms domain: inputs, validation schemas, and value objects.
//!
//! Everything here is pure. Forms and adapters live in `accountforms-client`.

pub mod error;
pub mod inputs;
pub mod records;
pub mod validation;
pub mod value_objects;

pub use error::{DomainError, ValidationFailure};
pub use inputs::{
    comment_too_long, password_too_short, AccountCreationInput, AccountDeletionInput,
    COMMENT_TOO_LONG_MESSAGE, MAX_COMMENT_LENGTH, MIN_PASSWORD_LENGTH,
    PASSWORD_TOO_SHORT_MESSAGE,
};
pub use records::SubmissionRecord;
pub use validation::{FieldValue, Rule, ValidationSchema};
pub use value_objects::{ExperienceYears, ReasonCatalog, SelectedReasons};

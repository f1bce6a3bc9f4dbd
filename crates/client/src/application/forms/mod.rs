//! The two account forms.
//!
//! Each form owns its field state and reports to the notifier and log sink
//! ports. Handlers are synchronous and never fail: validation problems are
//! shown to the user, not returned as errors.

mod create_account;
mod delete_account;

pub use create_account::{CreateAccountForm, ACCOUNT_CREATED_MESSAGE, VALIDATION_ERROR_TITLE};
pub use delete_account::{DeleteAccountForm, ACCOUNT_DELETED_MESSAGE};

use accountforms_domain::ValidationFailure;

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input passed validation and was handed to the log sink
    Accepted,
    /// Input failed validation; the reasons were shown to the user
    Rejected(ValidationFailure),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

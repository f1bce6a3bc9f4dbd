//! Accepted submissions, as handed to the log sink.

use serde::Serialize;
use std::fmt;

use crate::value_objects::ExperienceYears;

/// A submission that passed validation.
///
/// The password travels with the record so a sink sees exactly what was
/// accepted, but it is never serialized or printed.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmissionRecord {
    AccountCreated {
        email: String,
        #[serde(skip_serializing)]
        password: String,
        experience_years: ExperienceYears,
        remember: bool,
    },
    AccountDeleted {
        comment: String,
        /// Reason texts, in the order they were selected
        reasons: Vec<String>,
    },
}

impl SubmissionRecord {
    /// Short name of the record kind, for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AccountCreated { .. } => "account_created",
            Self::AccountDeleted { .. } => "account_deleted",
        }
    }
}

impl fmt::Debug for SubmissionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccountCreated {
                email,
                experience_years,
                remember,
                ..
            } => f
                .debug_struct("AccountCreated")
                .field("email", email)
                .field("password", &"[redacted]")
                .field("experience_years", experience_years)
                .field("remember", remember)
                .finish(),
            Self::AccountDeleted { comment, reasons } => f
                .debug_struct("AccountDeleted")
                .field("comment", comment)
                .field("reasons", reasons)
                .finish(),
        }
    }
}

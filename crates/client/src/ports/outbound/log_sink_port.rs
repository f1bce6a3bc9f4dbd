//! LogSinkPort - diagnostic recording of accepted submissions

use accountforms_domain::SubmissionRecord;

/// Receives every submission that passed validation. Accept-and-return.
#[cfg_attr(test, mockall::automock)]
pub trait LogSinkPort {
    fn record(&self, submission: &SubmissionRecord);
}

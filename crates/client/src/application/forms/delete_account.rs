//! Account deletion form state

use std::rc::Rc;

use accountforms_domain::{
    comment_too_long, AccountDeletionInput, DomainError, SelectedReasons,
    COMMENT_TOO_LONG_MESSAGE,
};

use super::SubmitOutcome;
use crate::ports::outbound::{LogSinkPort, NotifierPort};

/// Title of the success dialog.
pub const ACCOUNT_DELETED_MESSAGE: &str = "Account successfully destroyed";

/// Selected reasons and optional comment, plus the live comment check.
pub struct DeleteAccountForm {
    comment: String,
    comment_too_long: bool,
    selected_reasons: SelectedReasons,
    notifier: Rc<dyn NotifierPort>,
    log_sink: Rc<dyn LogSinkPort>,
}

impl DeleteAccountForm {
    pub fn new(notifier: Rc<dyn NotifierPort>, log_sink: Rc<dyn LogSinkPort>) -> Self {
        Self {
            comment: String::new(),
            comment_too_long: false,
            selected_reasons: SelectedReasons::new(),
            notifier,
            log_sink,
        }
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn comment_too_long(&self) -> bool {
        self.comment_too_long
    }

    /// Inline error under the comment field, if any.
    pub fn comment_error(&self) -> Option<&'static str> {
        self.comment_too_long.then_some(COMMENT_TOO_LONG_MESSAGE)
    }

    pub fn selected_reasons(&self) -> &SelectedReasons {
        &self.selected_reasons
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_reasons.contains(index)
    }

    /// Select `index` if unselected, unselect it otherwise.
    ///
    /// Indices come from the rendered catalog, so an unknown index is a
    /// caller bug; it is rejected and the selection stays as it was.
    pub fn on_reason_toggle(&mut self, index: usize) -> Result<(), DomainError> {
        self.selected_reasons.toggle(index).inspect_err(|e| {
            tracing::warn!("Ignoring reason toggle: {}", e);
        })
    }

    /// Update the comment and re-run the live length check.
    pub fn on_comment_change(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.comment_too_long = comment_too_long(&value);
        self.comment = value;
    }

    /// Current field values as a fresh input.
    pub fn input(&self) -> AccountDeletionInput {
        AccountDeletionInput {
            comment: self.comment.clone(),
            selected_reasons: self.selected_reasons.clone(),
        }
    }

    /// Validate and report the result; accepted input goes to the log sink.
    ///
    /// The error dialog carries no heading.
    pub fn on_submit(&self) -> SubmitOutcome {
        match self.input().into_record() {
            Ok(record) => {
                tracing::info!(
                    "Account deletion accepted with {} reason(s)",
                    self.selected_reasons.len()
                );
                self.notifier.show_success(ACCOUNT_DELETED_MESSAGE);
                self.log_sink.record(&record);
                SubmitOutcome::Accepted
            }
            Err(failure) => {
                tracing::debug!("Account deletion rejected: {}", failure);
                self.notifier.show_error(&failure.joined());
                SubmitOutcome::Rejected(failure)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{MockLogSinkPort, MockNotifierPort};
    use accountforms_domain::SubmissionRecord;
    use mockall::predicate::*;
    use mockall::Sequence;

    fn form(notifier: MockNotifierPort, log_sink: MockLogSinkPort) -> DeleteAccountForm {
        DeleteAccountForm::new(Rc::new(notifier), Rc::new(log_sink))
    }

    #[test]
    fn long_comment_shows_inline_error_while_typing() {
        let mut form = form(MockNotifierPort::new(), MockLogSinkPort::new());

        form.on_comment_change("a".repeat(2001));
        assert!(form.comment_too_long());
        assert_eq!(
            form.comment_error(),
            Some("Comment should not exceed 2000 characters.")
        );

        form.on_comment_change("a".repeat(2000));
        assert_eq!(form.comment_error(), None);
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut form = form(MockNotifierPort::new(), MockLogSinkPort::new());
        form.on_reason_toggle(2).unwrap();
        let before = form.selected_reasons().clone();

        form.on_reason_toggle(0).unwrap();
        assert!(form.is_selected(0));
        form.on_reason_toggle(0).unwrap();

        assert_eq!(form.selected_reasons(), &before);
        assert!(!form.is_selected(0));
    }

    #[test]
    fn unknown_reason_is_rejected_without_changing_selection() {
        let mut form = form(MockNotifierPort::new(), MockLogSinkPort::new());
        form.on_reason_toggle(1).unwrap();

        assert!(form.on_reason_toggle(42).is_err());
        assert_eq!(form.selected_reasons().as_slice(), [1]);
    }

    #[test]
    fn submit_without_reasons_shows_one_error() {
        let mut notifier = MockNotifierPort::new();
        let mut log_sink = MockLogSinkPort::new();

        notifier
            .expect_show_error()
            .with(eq("Array must contain at least 1 element(s)"))
            .times(1)
            .return_const(());
        notifier.expect_show_titled_error().never();
        notifier.expect_show_success().never();
        notifier.expect_show_loading().never();
        log_sink.expect_record().never();

        let mut form = form(notifier, log_sink);
        form.on_comment_change("Test comment");

        assert!(!form.on_submit().is_accepted());
    }

    #[test]
    fn long_comment_fails_even_with_a_reason() {
        let mut notifier = MockNotifierPort::new();
        notifier
            .expect_show_error()
            .with(eq("String must contain at most 2000 character(s)"))
            .times(1)
            .return_const(());

        let mut form = form(notifier, MockLogSinkPort::new());
        form.on_reason_toggle(0).unwrap();
        form.on_comment_change("a".repeat(2001));

        assert!(!form.on_submit().is_accepted());
    }

    #[test]
    fn valid_submission_shows_success_then_records_resolved_reasons() {
        let mut notifier = MockNotifierPort::new();
        let mut log_sink = MockLogSinkPort::new();
        let mut seq = Sequence::new();

        notifier
            .expect_show_success()
            .with(eq("Account successfully destroyed"))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        notifier.expect_show_loading().never();
        notifier.expect_show_error().never();
        notifier.expect_show_titled_error().never();

        let expected = SubmissionRecord::AccountDeleted {
            comment: "So long".into(),
            reasons: vec!["Others".into(), "I have privacy concerns.".into()],
        };
        log_sink
            .expect_record()
            .withf(move |record| *record == expected)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut form = form(notifier, log_sink);
        form.on_reason_toggle(4).unwrap();
        form.on_reason_toggle(0).unwrap();
        form.on_comment_change("So long");

        assert_eq!(form.on_submit(), SubmitOutcome::Accepted);
    }

    #[test]
    fn empty_comment_is_accepted() {
        let mut notifier = MockNotifierPort::new();
        let mut log_sink = MockLogSinkPort::new();
        notifier.expect_show_success().times(1).return_const(());
        log_sink.expect_record().times(1).return_const(());

        let mut form = form(notifier, log_sink);
        form.on_reason_toggle(1).unwrap();

        assert!(form.on_submit().is_accepted());
    }
}

//! Account creation form state

use std::rc::Rc;

use accountforms_domain::{password_too_short, AccountCreationInput, PASSWORD_TOO_SHORT_MESSAGE};

use super::SubmitOutcome;
use crate::ports::outbound::{LogSinkPort, NotifierPort};

/// Title of the success dialog.
pub const ACCOUNT_CREATED_MESSAGE: &str = "Account created successfully";

/// Heading of the error dialog.
pub const VALIDATION_ERROR_TITLE: &str = "Validation Error";

/// Email, password, experience and remember-me, plus the live password check.
pub struct CreateAccountForm {
    email: String,
    password: String,
    experience_years: String,
    remember: bool,
    password_too_short: bool,
    notifier: Rc<dyn NotifierPort>,
    log_sink: Rc<dyn LogSinkPort>,
}

impl CreateAccountForm {
    pub fn new(notifier: Rc<dyn NotifierPort>, log_sink: Rc<dyn LogSinkPort>) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            experience_years: String::new(),
            remember: false,
            password_too_short: false,
            notifier,
            log_sink,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn experience_years(&self) -> &str {
        &self.experience_years
    }

    pub fn remember(&self) -> bool {
        self.remember
    }

    /// Result of the last live password check.
    pub fn password_too_short(&self) -> bool {
        self.password_too_short
    }

    /// Inline error under the password field, if any.
    pub fn password_error(&self) -> Option<&'static str> {
        self.password_too_short.then_some(PASSWORD_TOO_SHORT_MESSAGE)
    }

    pub fn on_email_change(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Update the password and re-run the live length check.
    pub fn on_password_change(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.password_too_short = password_too_short(&value);
        self.password = value;
    }

    pub fn on_experience_change(&mut self, value: impl Into<String>) {
        self.experience_years = value.into();
    }

    pub fn on_remember_change(&mut self, checked: bool) {
        self.remember = checked;
    }

    /// Current field values as a fresh input.
    pub fn input(&self) -> AccountCreationInput {
        AccountCreationInput {
            email: self.email.clone(),
            password: self.password.clone(),
            experience_years: self.experience_years.clone(),
            remember: self.remember,
        }
    }

    /// Validate everything and report the result.
    ///
    /// On success the loading dialog is requested before the success dialog,
    /// then the accepted record goes to the log sink. Field state is kept.
    pub fn on_submit(&self) -> SubmitOutcome {
        match self.input().into_record() {
            Ok(record) => {
                tracing::info!("Account creation accepted for {}", self.email);
                self.notifier.show_loading();
                self.notifier.show_success(ACCOUNT_CREATED_MESSAGE);
                self.log_sink.record(&record);
                SubmitOutcome::Accepted
            }
            Err(failure) => {
                tracing::debug!("Account creation rejected: {}", failure);
                self.notifier
                    .show_titled_error(VALIDATION_ERROR_TITLE, &failure.joined());
                SubmitOutcome::Rejected(failure)
            }
        }
    }
}

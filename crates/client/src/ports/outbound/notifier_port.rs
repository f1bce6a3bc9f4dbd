//! NotifierPort - transient feedback dialogs
//!
//! Implementations own presentation and timing entirely. Calls are
//! fire-and-forget: nothing is returned to the caller and there is no way to
//! cancel a dialog once requested.

/// User feedback for form submissions.
///
/// A new dialog replaces the one on screen, except that a success dialog
/// waits for a progress dialog to close. None of them has a confirm button.
#[cfg_attr(test, mockall::automock)]
pub trait NotifierPort {
    /// Show an untitled error dialog that closes itself after 5000 ms.
    fn show_error(&self, message: &str);

    /// Same as [`NotifierPort::show_error`], with a heading above the message.
    fn show_titled_error(&self, title: &str, message: &str);

    /// Show an indeterminate progress dialog.
    ///
    /// A success dialog requested while this one is up is displayed once the
    /// progress dialog has closed.
    fn show_loading(&self);

    /// Show a success dialog that closes itself after 1500 ms.
    fn show_success(&self, message: &str);
}

//! Dioxus notifier adapter
//!
//! Pushes notices into a signal-held [`NotificationQueue`]; the
//! `NotificationHost` component renders the current notice and runs its timer.

use dioxus::prelude::*;

use super::notifications::NotificationQueue;
use crate::ports::outbound::NotifierPort;

/// `NotifierPort` backed by a Dioxus signal.
///
/// Must be created inside an active Dioxus runtime.
#[derive(Clone, Copy)]
pub struct SignalNotifier {
    queue: Signal<NotificationQueue>,
}

impl SignalNotifier {
    pub fn new(queue: Signal<NotificationQueue>) -> Self {
        Self { queue }
    }

    pub fn queue(&self) -> Signal<NotificationQueue> {
        self.queue
    }
}

impl NotifierPort for SignalNotifier {
    fn show_error(&self, message: &str) {
        let mut queue = self.queue;
        queue.write().push_error(None, message);
    }

    fn show_titled_error(&self, title: &str, message: &str) {
        let mut queue = self.queue;
        queue.write().push_error(Some(title), message);
    }

    fn show_loading(&self) {
        let mut queue = self.queue;
        queue.write().push_loading();
    }

    fn show_success(&self, message: &str) {
        let mut queue = self.queue;
        queue.write().push_success(message);
    }
}

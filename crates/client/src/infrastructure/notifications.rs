//! Notification slot backing the notifier adapter
//!
//! One notice is visible at a time. A new error, loading or success request
//! replaces whatever is on screen, with one exception: a success requested
//! while a loading notice is showing waits behind it as the single pending
//! follow-up, so "loading, then success" plays out in order.

use std::time::Duration;

/// Auto-dismiss delays per notice kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifierTimings {
    pub error: Duration,
    pub loading: Duration,
    pub success: Duration,
}

impl Default for NotifierTimings {
    fn default() -> Self {
        Self {
            error: Duration::from_millis(5000),
            loading: Duration::from_millis(1500),
            success: Duration::from_millis(1500),
        }
    }
}

/// Identifies one requested notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Loading,
    Success,
}

/// A single modal notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub kind: NoticeKind,
    pub title: Option<String>,
    pub text: Option<String>,
    pub dismiss_after: Duration,
    /// Always false for the notices the forms request
    pub show_confirm_button: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationQueue {
    current: Option<Notice>,
    follow_up: Option<Notice>,
    next_id: u64,
    timings: NotifierTimings,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(NotifierTimings::default())
    }
}

impl NotificationQueue {
    pub fn new(timings: NotifierTimings) -> Self {
        Self {
            current: None,
            follow_up: None,
            next_id: 0,
            timings,
        }
    }

    /// Show an error now, dropping anything on screen or pending.
    pub fn push_error(&mut self, title: Option<&str>, message: &str) -> NoticeId {
        let notice = self.notice(
            NoticeKind::Error,
            title.map(str::to_string),
            Some(message.to_string()),
            self.timings.error,
        );
        self.replace(notice)
    }

    pub fn push_loading(&mut self) -> NoticeId {
        let notice = self.notice(NoticeKind::Loading, None, None, self.timings.loading);
        self.replace(notice)
    }

    /// Show a success notice, or park it behind a loading notice on screen.
    pub fn push_success(&mut self, message: &str) -> NoticeId {
        let notice = self.notice(
            NoticeKind::Success,
            Some(message.to_string()),
            None,
            self.timings.success,
        );
        let behind_loading = self
            .current
            .as_ref()
            .is_some_and(|n| n.kind == NoticeKind::Loading);
        if behind_loading {
            let id = notice.id;
            self.follow_up = Some(notice);
            id
        } else {
            self.replace(notice)
        }
    }

    fn notice(
        &mut self,
        kind: NoticeKind,
        title: Option<String>,
        text: Option<String>,
        dismiss_after: Duration,
    ) -> Notice {
        let id = NoticeId(self.next_id);
        self.next_id += 1;
        Notice {
            id,
            kind,
            title,
            text,
            dismiss_after,
            show_confirm_button: false,
        }
    }

    fn replace(&mut self, notice: Notice) -> NoticeId {
        let id = notice.id;
        self.follow_up = None;
        self.current = Some(notice);
        id
    }

    /// The notice currently on screen.
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Close the current notice if it is `id`, promoting the follow-up.
    ///
    /// Returns false for stale ids, so a late timer never closes a notice it
    /// was not scheduled for.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        if self.current().map(|n| n.id) == Some(id) {
            self.current = self.follow_up.take();
            true
        } else {
            false
        }
    }

    /// Notices on screen or pending; never more than two.
    pub fn len(&self) -> usize {
        usize::from(self.current.is_some()) + usize::from(self.follow_up.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

//! Modal overlay for queued notices
//!
//! Shows the notifier's current notice and closes it after its own delay.
//! There is no confirm button and clicks do not dismiss it.

use dioxus::prelude::*;

use crate::infrastructure::platform::sleep;
use crate::infrastructure::{spawn_task, NoticeKind, SignalNotifier};

/// Notification modal component
#[component]
pub fn NotificationHost() -> Element {
    let queue = use_context::<SignalNotifier>().queue();
    let notice = queue.read().current().cloned();

    // Auto-dismiss the current notice. Re-runs whenever the queue changes; a
    // timer only ever closes the notice it was started for.
    use_effect(move || {
        let shown = queue.read().current().map(|n| (n.id, n.dismiss_after));
        if let Some((id, dismiss_after)) = shown {
            spawn_task(async move {
                sleep(dismiss_after).await;
                let mut queue = queue;
                if queue.write().dismiss(id) {
                    tracing::debug!("Notice {:?} dismissed", id);
                }
            });
        }
    });

    let Some(notice) = notice else {
        return rsx! {};
    };

    let id = notice.id;
    let (icon, accent) = match notice.kind {
        NoticeKind::Error => ("✕", "#dc2626"),
        NoticeKind::Success => ("✓", "#16a34a"),
        NoticeKind::Loading => ("", "#0072B5"),
    };

    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center z-50",
            style: "position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.4); z-index: 1000;",
            div {
                class: "bg-white rounded-lg shadow-lg p-6 text-center",
                style: "background: white; border-radius: 0.5rem; padding: 1.5rem; min-width: 18rem; text-align: center;",

                if notice.kind == NoticeKind::Loading {
                    div {
                        class: "animate-spin",
                        style: "margin: 0 auto; width: 2.5rem; height: 2.5rem; border: 4px solid #e5e7eb; border-top-color: {accent}; border-radius: 9999px;",
                    }
                } else {
                    div {
                        style: "font-size: 2rem; color: {accent};",
                        "{icon}"
                    }
                }

                if let Some(title) = notice.title.as_ref() {
                    h2 {
                        class: "text-lg font-semibold",
                        style: "margin-top: 0.75rem;",
                        "{title}"
                    }
                }
                if let Some(text) = notice.text.as_ref() {
                    p {
                        class: "text-sm",
                        style: "margin-top: 0.5rem;",
                        "{text}"
                    }
                }
                if notice.show_confirm_button {
                    button {
                        class: "mt-4 px-4 py-2 rounded-lg",
                        onclick: move |_| {
                            let mut queue = queue;
                            queue.write().dismiss(id);
                        },
                        "OK"
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use std::rc::Rc;

use crate::infrastructure::{ClientConfig, NotificationQueue, SignalNotifier, TracingLogSink};
use crate::ports::outbound::{LogSinkPort, NotifierPort};
use presentation::components::{CreateAccountCard, DeleteAccountCard, NotificationHost};

pub mod presentation;

pub use crate::infrastructure::ShellKind;

/// Type alias for the notifier port used throughout the UI
pub type Notifier = Rc<dyn NotifierPort>;

/// Type alias for the log sink port used throughout the UI
pub type LogSink = Rc<dyn LogSinkPort>;

/// Hook to access the Notifier from Dioxus context
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>()
}

/// Hook to access the LogSink from Dioxus context
pub fn use_log_sink() -> LogSink {
    use_context::<LogSink>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/client/src/main.rs`).
    let config = use_context::<ClientConfig>();

    // These must be created inside an active Dioxus runtime.
    let queue = use_signal(|| NotificationQueue::new(config.timings));
    let notifier = use_context_provider(|| SignalNotifier::new(queue));
    use_context_provider(|| -> Notifier { Rc::new(notifier) });
    use_context_provider(|| -> LogSink { Rc::new(TracingLogSink::new()) });

    rsx! {
        document::Stylesheet {
            href: asset!("/assets/css/forms.css"),
        }

        {
            match config.shell {
                ShellKind::Desktop => rsx! {
                    DesktopShell {
                        CreateAccountCard {}
                        DeleteAccountCard {}
                    }
                },
                ShellKind::Mobile => rsx! {
                    MobileShell {
                        CreateAccountCard {}
                        DeleteAccountCard {}
                    }
                },
            }
        }

        NotificationHost {}
    }
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        div {
            class: "h-screen flex flex-row",
            style: "display: flex; flex-direction: row; min-height: 100vh; gap: 2rem; align-items: center; justify-content: center;",
            {children}
        }
    }
}

#[component]
fn MobileShell(children: Element) -> Element {
    rsx! {
        div {
            class: "flex flex-col",
            style: "display: flex; flex-direction: column; gap: 2rem; padding: 1rem;",
            {children}
        }
    }
}

//! Outbound ports - Interfaces for the collaborators the forms report to
//!
//! The forms only see these traits; the Dioxus notifier and the tracing log
//! sink in `infrastructure` are the production implementations.

pub mod log_sink_port;
pub mod notifier_port;

pub use log_sink_port::LogSinkPort;
pub use notifier_port::NotifierPort;

#[cfg(test)]
pub use log_sink_port::MockLogSinkPort;
#[cfg(test)]
pub use notifier_port::MockNotifierPort;

//! Account Forms client.
//!
//! This crate contains UI, application logic, and infrastructure adapters.
//! Multi-platform support is provided via compile-time `cfg` selection.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod ui;

// Re-export commonly used entrypoints
pub use ui::app;
pub use ui::{use_log_sink, use_notifier, LogSink, Notifier, ShellKind};

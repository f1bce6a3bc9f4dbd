pub mod config;
pub mod log_sink;
pub mod notifications;
pub mod platform;
pub mod signal_notifier;

pub use config::{ClientConfig, ConfigError, ShellKind};
pub use log_sink::TracingLogSink;
pub use notifications::{Notice, NoticeId, NoticeKind, NotificationQueue, NotifierTimings};
pub use platform::spawn_task;
pub use signal_notifier::SignalNotifier;

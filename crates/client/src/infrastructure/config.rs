//! Client configuration from the environment

use std::str::FromStr;

use thiserror::Error;

use super::notifications::NotifierTimings;

/// Environment variable selecting the layout shell.
pub const SHELL_ENV: &str = "ACCOUNTFORMS_SHELL";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown shell kind '{0}', expected 'desktop' or 'mobile'")]
    UnknownShell(String),
}

/// Shell variant for UI layout selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    /// Forms side by side
    #[default]
    Desktop,
    /// Forms stacked
    Mobile,
}

impl FromStr for ShellKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "mobile" => Ok(Self::Mobile),
            _ => Err(ConfigError::UnknownShell(s.to_string())),
        }
    }
}

/// Everything the composition root hands to the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub shell: ShellKind,
    /// Fixed; not read from the environment
    pub timings: NotifierTimings,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Invalid values fall back to the
    /// defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let shell = lookup(SHELL_ENV)
            .map(|raw| {
                raw.parse::<ShellKind>().unwrap_or_else(|e| {
                    tracing::warn!("{}; using desktop layout", e);
                    ShellKind::default()
                })
            })
            .unwrap_or_default();

        Self {
            shell,
            timings: NotifierTimings::default(),
        }
    }
}

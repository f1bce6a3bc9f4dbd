//! Unified error types for the domain layer
//!
//! `ValidationFailure` is the only error a user ever sees: it carries every
//! violated rule, in schema order. `DomainError` covers the contract errors
//! the value objects can raise.

use thiserror::Error;

/// Separator used when validation reasons are shown as one message.
pub const REASON_SEPARATOR: &str = ", ";

/// All reasons an input failed its schema, in field then rule order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .reasons.join(REASON_SEPARATOR))]
pub struct ValidationFailure {
    reasons: Vec<String>,
}

impl ValidationFailure {
    /// Create a failure from collected reasons.
    ///
    /// Callers only build this when at least one rule failed; an empty list
    /// is still accepted and renders as an empty message.
    pub fn new(reasons: Vec<String>) -> Self {
        Self { reasons }
    }

    /// Individual reasons, in the order the schema produced them.
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    /// Reasons joined into the single line shown to the user.
    pub fn joined(&self) -> String {
        self.reasons.join(REASON_SEPARATOR)
    }
}

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Reason index outside the fixed catalog
    #[error("Unknown deletion reason {index} (catalog has {catalog_len} entries)")]
    UnknownReason { index: usize, catalog_len: usize },
}

impl DomainError {
    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for ExperienceYears {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "0" => Ok(Self::None),
    ///             _ => Err(DomainError::parse(format!("Unknown experience: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an unknown reason error
    pub fn unknown_reason(index: usize, catalog_len: usize) -> Self {
        Self::UnknownReason { index, catalog_len }
    }
}

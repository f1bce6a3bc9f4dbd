//! Years of experience, as offered by the account creation form.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Self-reported years of experience.
///
/// Serialized as the literal form token (`"0"` .. `"3"`, `">3"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceYears {
    #[serde(rename = "0")]
    None,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = ">3")]
    MoreThanThree,
}

impl ExperienceYears {
    /// Literal tokens accepted by the form, in display order.
    pub const TOKENS: &'static [&'static str] = &["0", "1", "2", "3", ">3"];

    pub fn all() -> &'static [ExperienceYears] {
        &[
            ExperienceYears::None,
            ExperienceYears::One,
            ExperienceYears::Two,
            ExperienceYears::Three,
            ExperienceYears::MoreThanThree,
        ]
    }

    /// The literal token submitted by the form.
    pub fn token(&self) -> &'static str {
        match self {
            Self::None => "0",
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::MoreThanThree => ">3",
        }
    }

    /// Label shown in the select box.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MoreThanThree => "more than 3",
            other => other.token(),
        }
    }
}

impl fmt::Display for ExperienceYears {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ExperienceYears {
    type Err = DomainError;

    /// Parses the exact form token. No trimming or aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|e| e.token() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown experience value: '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_match_variants() {
        let tokens: Vec<_> = ExperienceYears::all().iter().map(|e| e.token()).collect();
        assert_eq!(tokens, ExperienceYears::TOKENS);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("1".parse::<ExperienceYears>(), Ok(ExperienceYears::One));
        assert_eq!(
            ">3".parse::<ExperienceYears>(),
            Ok(ExperienceYears::MoreThanThree)
        );
        assert!("".parse::<ExperienceYears>().is_err());
        assert!("4".parse::<ExperienceYears>().is_err());
        assert!(" 1".parse::<ExperienceYears>().is_err());
    }

    #[test]
    fn test_label() {
        assert_eq!(ExperienceYears::MoreThanThree.label(), "more than 3");
        assert_eq!(ExperienceYears::Two.label(), "2");
    }

    #[test]
    fn test_serializes_as_token() {
        let json = serde_json::to_string(&ExperienceYears::MoreThanThree).unwrap();
        assert_eq!(json, "\">3\"");
    }
}

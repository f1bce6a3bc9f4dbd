//! Field rules and the values they are evaluated against.

use validator::ValidateEmail;

/// A field value projected out of an input for rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// A text field
    Text(&'a str),
    /// A checkbox
    Flag(bool),
    /// A collection, represented by its element count
    Items(usize),
}

impl FieldValue<'_> {
    /// Name of the value's shape, as used in type mismatch reasons.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Flag(_) => "boolean",
            Self::Items(_) => "array",
        }
    }
}

/// A single declarative rule attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Text is a syntactically valid email address
    Email,
    /// Text has at least this many characters
    MinLength(usize),
    /// Text has at most this many characters
    MaxLength(usize),
    /// Text is one of the listed literal tokens
    OneOf(&'static [&'static str]),
    /// Value is a boolean
    Boolean,
    /// Collection has at least this many elements
    MinItems(usize),
}

impl Rule {
    /// Evaluate the rule, returning the human-readable reason on failure.
    pub fn check(&self, value: &FieldValue<'_>) -> Result<(), String> {
        match (self, value) {
            (Self::Email, FieldValue::Text(s)) => {
                if is_email(s) {
                    Ok(())
                } else {
                    Err("Invalid email".to_string())
                }
            }
            (Self::MinLength(min), FieldValue::Text(s)) => {
                if text_len(s) < *min {
                    Err(format!("String must contain at least {} character(s)", min))
                } else {
                    Ok(())
                }
            }
            (Self::MaxLength(max), FieldValue::Text(s)) => {
                if text_len(s) > *max {
                    Err(format!("String must contain at most {} character(s)", max))
                } else {
                    Ok(())
                }
            }
            (Self::OneOf(options), FieldValue::Text(s)) => {
                if options.iter().any(|option| option == s) {
                    Ok(())
                } else {
                    let expected = options
                        .iter()
                        .map(|o| format!("'{}'", o))
                        .collect::<Vec<_>>()
                        .join(" | ");
                    Err(format!(
                        "Invalid enum value. Expected {}, received '{}'",
                        expected, s
                    ))
                }
            }
            (Self::Boolean, FieldValue::Flag(_)) => Ok(()),
            (Self::MinItems(min), FieldValue::Items(count)) => {
                if count < min {
                    Err(format!("Array must contain at least {} element(s)", min))
                } else {
                    Ok(())
                }
            }
            (rule, value) => Err(format!(
                "Expected {}, received {}",
                rule.expected_kind(),
                value.kind()
            )),
        }
    }

    fn expected_kind(&self) -> &'static str {
        match self {
            Self::Email | Self::MinLength(_) | Self::MaxLength(_) | Self::OneOf(_) => "string",
            Self::Boolean => "boolean",
            Self::MinItems(_) => "array",
        }
    }
}

/// Length in characters, the unit every length rule and live check uses.
pub fn text_len(s: &str) -> usize {
    s.chars().count()
}

/// local-part@domain, where the domain has a dot that is neither first nor last.
fn is_email(s: &str) -> bool {
    if !s.validate_email() {
        return false;
    }
    match s.rsplit_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_rule() {
        assert!(Rule::Email
            .check(&FieldValue::Text("linalouati99@gmail.com"))
            .is_ok());
        assert!(Rule::Email.check(&FieldValue::Text("a.b@sub.example.org")).is_ok());

        for bad in ["", "plain", "@example.com", "user@", "user@localhost", "user@example."] {
            assert_eq!(
                Rule::Email.check(&FieldValue::Text(bad)),
                Err("Invalid email".to_string()),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_min_length_boundary() {
        let rule = Rule::MinLength(6);
        assert!(rule.check(&FieldValue::Text("linalo")).is_ok());
        assert_eq!(
            rule.check(&FieldValue::Text("12345")),
            Err("String must contain at least 6 character(s)".to_string())
        );
    }

    #[test]
    fn test_max_length_boundary() {
        let rule = Rule::MaxLength(3);
        assert!(rule.check(&FieldValue::Text("")).is_ok());
        assert!(rule.check(&FieldValue::Text("abc")).is_ok());
        assert_eq!(
            rule.check(&FieldValue::Text("abcd")),
            Err("String must contain at most 3 character(s)".to_string())
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Six characters, twelve bytes
        assert!(Rule::MinLength(6).check(&FieldValue::Text("éééééé")).is_ok());
        assert!(Rule::MaxLength(6).check(&FieldValue::Text("éééééé")).is_ok());
    }

    #[test]
    fn test_one_of_message_lists_options() {
        let rule = Rule::OneOf(&["0", ">3"]);
        assert!(rule.check(&FieldValue::Text(">3")).is_ok());
        assert_eq!(
            rule.check(&FieldValue::Text("")),
            Err("Invalid enum value. Expected '0' | '>3', received ''".to_string())
        );
    }

    #[test]
    fn test_min_items() {
        let rule = Rule::MinItems(1);
        assert!(rule.check(&FieldValue::Items(2)).is_ok());
        assert_eq!(
            rule.check(&FieldValue::Items(0)),
            Err("Array must contain at least 1 element(s)".to_string())
        );
    }

    #[test]
    fn test_shape_mismatch_is_a_reason_not_a_panic() {
        assert_eq!(
            Rule::MinItems(1).check(&FieldValue::Text("x")),
            Err("Expected array, received string".to_string())
        );
        assert_eq!(
            Rule::Boolean.check(&FieldValue::Items(0)),
            Err("Expected boolean, received array".to_string())
        );
        assert!(Rule::Boolean.check(&FieldValue::Flag(false)).is_ok());
    }
}

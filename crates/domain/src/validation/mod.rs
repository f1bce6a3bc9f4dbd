//! Declarative validation schemas.
//!
//! A [`ValidationSchema`] is an ordered list of fields, each with an accessor
//! that projects a [`FieldValue`] out of the input and the [`Rule`]s that value
//! must satisfy. Every rule of every field is evaluated; reasons are reported
//! in declaration order so the joined message is stable.

mod rules;

pub use rules::{text_len, FieldValue, Rule};

use crate::error::ValidationFailure;

/// Projects one field out of an input.
pub type Accessor<T> = for<'a> fn(&'a T) -> FieldValue<'a>;

struct FieldRules<T> {
    accessor: Accessor<T>,
    rules: Vec<Rule>,
}

/// Ordered per-field rules for inputs of type `T`.
pub struct ValidationSchema<T> {
    fields: Vec<FieldRules<T>>,
}

impl<T> Default for ValidationSchema<T> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<T> ValidationSchema<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field and its rules. Fields are evaluated in the order added.
    pub fn field(mut self, accessor: Accessor<T>, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push(FieldRules {
            accessor,
            rules: rules.into_iter().collect(),
        });
        self
    }

    /// Check `input` against every rule, collecting all failure reasons.
    pub fn validate(&self, input: &T) -> Result<(), ValidationFailure> {
        let reasons: Vec<String> = self
            .fields
            .iter()
            .flat_map(|field| {
                let value = (field.accessor)(input);
                field
                    .rules
                    .iter()
                    .filter_map(move |rule| rule.check(&value).err())
            })
            .collect();

        if reasons.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure::new(reasons))
        }
    }
}

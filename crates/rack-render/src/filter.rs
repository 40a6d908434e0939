//! Ad hoc `field=value` filtering over scan results.

use std::str::FromStr;

use crate::error::RenderError;

/// Items that expose the rendered string form of their named fields.
pub trait Queryable {
    /// The rendered value of `field`, or `None` if the item does not
    /// expose a field of that name.
    fn field_value(&self, field: &str) -> Option<String>;
}

/// A single equality condition parsed from user input.
///
/// A predicate naming a field the items do not expose matches nothing,
/// so filtering with it yields an empty collection rather than an
/// error; callers validate field names up front if they want to reject
/// typos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    field: String,
    value: String,
}

impl Predicate {
    /// The field name being tested.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The value the field must equal.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Exact string match against the item's rendered field value.
    pub fn matches<T: Queryable>(&self, item: &T) -> bool {
        item.field_value(&self.field)
            .is_some_and(|value| value == self.value)
    }
}

impl FromStr for Predicate {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, value) = s
            .split_once('=')
            .ok_or_else(|| RenderError::Predicate(s.to_string()))?;
        if field.is_empty() || value.is_empty() {
            return Err(RenderError::Predicate(s.to_string()));
        }
        Ok(Self {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

/// Retain only items matching every predicate, preserving input order.
#[must_use]
pub fn apply<T: Queryable>(predicates: &[Predicate], items: Vec<T>) -> Vec<T> {
    if predicates.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| predicates.iter().all(|predicate| predicate.matches(item)))
        .collect()
}

//! Predicates evaluated by the store against the current record, atomically
//! with a write or delete.

use crate::item::core::Item;
use std::fmt;

/// Attributes of a stored item that conditions can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Id,
    OwnerId,
    Name,
    Description,
}

impl Attribute {
    /// Attribute name as it appears in the persisted record.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::Id => "id",
            Attribute::OwnerId => "ownerId",
            Attribute::Name => "name",
            Attribute::Description => "description",
        }
    }

    fn read(self, item: &Item) -> Option<&str> {
        match self {
            Attribute::Id => Some(item.id.as_str()),
            Attribute::OwnerId => Some(item.owner_id.as_str()),
            Attribute::Name => item.name.as_deref(),
            Attribute::Description => item.description.as_deref(),
        }
    }
}

/// Boolean predicate over the stored record. A missing record has no
/// attributes: `Exists` is false, `NotExists` is true and `Equals` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Unconditional write; only used to seed tables in tests.
    #[cfg(test)]
    Always,
    Equals(Attribute, String),
    Exists(Attribute),
    NotExists(Attribute),
    And(Box<Condition>, Box<Condition>),
}

impl Condition {
    #[must_use]
    pub fn equals(attribute: Attribute, value: impl Into<String>) -> Self {
        Condition::Equals(attribute, value.into())
    }

    #[must_use]
    pub fn exists(attribute: Attribute) -> Self {
        Condition::Exists(attribute)
    }

    #[must_use]
    pub fn not_exists(attribute: Attribute) -> Self {
        Condition::NotExists(attribute)
    }

    /// Conjunction of `self` and `other`.
    #[must_use]
    pub fn and(self, other: Condition) -> Self {
        Condition::And(Box::new(self), Box::new(other))
    }

    /// Evaluate against the current record (`None` when the key is absent).
    #[must_use]
    pub fn evaluate(&self, current: Option<&Item>) -> bool {
        match self {
            #[cfg(test)]
            Condition::Always => true,
            Condition::Equals(attr, expected) => current
                .and_then(|item| attr.read(item))
                .is_some_and(|actual| actual == expected),
            Condition::Exists(attr) => current.and_then(|item| attr.read(item)).is_some(),
            Condition::NotExists(attr) => current.and_then(|item| attr.read(item)).is_none(),
            Condition::And(left, right) => left.evaluate(current) && right.evaluate(current),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(test)]
            Condition::Always => f.write_str("true"),
            Condition::Equals(attr, value) => write!(f, "{} = {value:?}", attr.as_str()),
            Condition::Exists(attr) => write!(f, "attribute_exists({})", attr.as_str()),
            Condition::NotExists(attr) => write!(f, "attribute_not_exists({})", attr.as_str()),
            Condition::And(left, right) => write!(f, "({left}) AND ({right})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(owner: &str) -> Item {
        let now = Utc::now();
        Item {
            id: "niner".to_string(),
            owner_id: owner.to_string(),
            name: Some("Niner".to_string()),
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_equals_matches_owner() {
        let cond = Condition::equals(Attribute::OwnerId, "owner");
        assert!(cond.evaluate(Some(&item("owner"))));
        assert!(!cond.evaluate(Some(&item("someone-else"))));
    }

    #[test]
    fn test_missing_record_has_no_attributes() {
        assert!(!Condition::equals(Attribute::OwnerId, "owner").evaluate(None));
        assert!(!Condition::exists(Attribute::Id).evaluate(None));
        assert!(Condition::not_exists(Attribute::Id).evaluate(None));
        assert!(Condition::Always.evaluate(None));
    }

    #[test]
    fn test_optional_attributes() {
        let stored = item("owner");
        assert!(Condition::exists(Attribute::Name).evaluate(Some(&stored)));
        assert!(Condition::not_exists(Attribute::Description).evaluate(Some(&stored)));
    }

    #[test]
    fn test_and_requires_both_sides() {
        let cond = Condition::equals(Attribute::OwnerId, "owner").and(Condition::exists(Attribute::Id));
        assert!(cond.evaluate(Some(&item("owner"))));
        assert!(!cond.evaluate(Some(&item("other"))));
        assert!(!cond.evaluate(None));
    }

    #[test]
    fn test_display_renders_expression() {
        let cond = Condition::equals(Attribute::OwnerId, "owner").and(Condition::exists(Attribute::Id));
        assert_eq!(cond.to_string(), "(ownerId = \"owner\") AND (attribute_exists(id))");
    }
}

//! Item identifier generation.
//!
//! Ids are opaque strings minted by the controller at creation time. The
//! controller never retries on collision, so generators must draw from a
//! space large enough that collisions are negligible.

use std::fmt;

/// Source of fresh item identifiers.
pub trait IdGenerator: Send + Sync + fmt::Debug {
    /// Return a new identifier that has never been returned before.
    fn next_id(&self) -> String;
}

/// Random UUID v4 identifiers (122 random bits), rendered as 32 lowercase
/// hex characters without hyphens.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        new_item_id()
    }
}

/// Mint a new random item id.
#[must_use]
pub fn new_item_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Check whether a string has the shape of an id produced by [`new_item_id`].
#[cfg(test)]
#[must_use]
pub(crate) fn is_generated_id(s: &str) -> bool {
    s.len() == 32 && uuid::Uuid::try_parse(s).is_ok()
}

//! Error types for item operations.
use crate::item::store::StoreError;
use thiserror::Error;

/// Message shared by update and delete condition failures. It does not say
/// whether the item is missing or owned by someone else.
pub const OWNERSHIP_CONFLICT_MESSAGE: &str = "Item deleted or owned by another user";

/// Unified error type for item domain operations.
#[derive(Error, Debug)]
pub enum ItemError {
    /// A mutation was attempted without an owner identity.
    #[error("Unauthorized")]
    Unauthorized,
    /// The update condition (owner match and existence) did not hold.
    #[error("{}", OWNERSHIP_CONFLICT_MESSAGE)]
    OwnershipConflict,
    /// The delete condition (owner match) did not hold.
    #[error("{}", OWNERSHIP_CONFLICT_MESSAGE)]
    DeleteConflict,
    /// A create collided with an existing primary key.
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    /// Any other store failure, passed through untouched.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ItemError {
    /// Whether the error is the caller's fault (as opposed to an
    /// infrastructure failure).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ItemError::Store(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_message() {
        assert_eq!(ItemError::Unauthorized.to_string(), "Unauthorized");
    }

    #[test]
    fn test_conflict_messages_are_ambiguous() {
        assert_eq!(
            ItemError::OwnershipConflict.to_string(),
            "Item deleted or owned by another user"
        );
        assert_eq!(
            ItemError::DeleteConflict.to_string(),
            ItemError::OwnershipConflict.to_string()
        );
    }

    #[test]
    fn test_store_error_passes_through_verbatim() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "store offline");
        let store_err = StoreError::from(io);
        let expected = store_err.to_string();
        let err = ItemError::from(store_err);
        assert_eq!(err.to_string(), expected);
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_already_exists_is_client_error() {
        let err = ItemError::AlreadyExists("niner".to_string());
        assert!(err.to_string().contains("niner"));
        assert!(err.is_client_error());
    }
}

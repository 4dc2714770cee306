//! Mapping of domain errors to structured codes and gRPC statuses.

use crate::item::core::ItemError;
use crate::item::store::StoreError;
use crate::server::structured_error::to_error_json;
use tonic::codegen::Bytes;
use tonic::metadata::{MetadataMap, MetadataValue};
use tonic::{Code, Status};
use tracing::{error, warn};

/// Metadata key carrying the structured error code of a failed call.
pub const ERROR_CODE_METADATA_KEY: &str = "x-error-code";
/// Metadata key echoing the request id of a failed call.
pub const REQUEST_ID_METADATA_KEY: &str = "x-request-id";

/// Trait for mapping domain errors to structured error codes and optional tips.
pub trait ToStructuredError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>);
}

impl ToStructuredError for StoreError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>) {
        ("STORE_ERROR", None)
    }
}

impl ToStructuredError for ItemError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>) {
        match self {
            ItemError::Unauthorized => (
                "UNAUTHORIZED",
                Some("Requests that modify items must carry the caller's identity"),
            ),
            ItemError::OwnershipConflict => ("OWNERSHIP_CONFLICT", None),
            ItemError::DeleteConflict => ("DELETE_CONFLICT", None),
            ItemError::AlreadyExists(_) => ("ALREADY_EXISTS", None),
            ItemError::Store(e) => e.error_code_and_tip(),
        }
    }
}

/// gRPC status code for an item error.
#[must_use]
pub fn grpc_code(err: &ItemError) -> Code {
    match err {
        ItemError::Unauthorized => Code::Unauthenticated,
        ItemError::OwnershipConflict | ItemError::DeleteConflict => Code::FailedPrecondition,
        ItemError::AlreadyExists(_) => Code::AlreadyExists,
        ItemError::Store(StoreError::Io(_)) => Code::Unavailable,
        ItemError::Store(_) => Code::Internal,
    }
}

/// Convert an item error into a `Status` for the caller of `operation`.
///
/// The message is the error's display text. The structured code goes into
/// the `x-error-code` metadata entry and the JSON error body into the
/// status details.
#[must_use]
pub fn item_error_to_status(operation: &str, request_id: &str, err: &ItemError) -> Status {
    let (code, _) = err.error_code_and_tip();
    if err.is_client_error() {
        warn!(operation, request_id, error_code = code, "{err}");
    } else {
        error!(operation, request_id, error_code = code, "{err}");
    }

    let mut metadata = MetadataMap::new();
    if let Ok(value) = MetadataValue::try_from(code) {
        metadata.insert(ERROR_CODE_METADATA_KEY, value);
    }
    if let Ok(value) = MetadataValue::try_from(request_id) {
        metadata.insert(REQUEST_ID_METADATA_KEY, value);
    }

    Status::with_details_and_metadata(
        grpc_code(err),
        err.to_string(),
        Bytes::from(to_error_json(request_id, err)),
        metadata,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_header(status: &Status) -> Option<&str> {
        status
            .metadata()
            .get(ERROR_CODE_METADATA_KEY)
            .and_then(|v| v.to_str().ok())
    }

    #[test]
    fn test_unauthorized_maps_to_unauthenticated() {
        let status = item_error_to_status("CreateItem", "r1", &ItemError::Unauthorized);
        assert_eq!(status.code(), Code::Unauthenticated);
        assert_eq!(status.message(), "Unauthorized");
        assert_eq!(code_header(&status), Some("UNAUTHORIZED"));
    }

    #[test]
    fn test_conflicts_share_message_but_not_code() {
        let update = item_error_to_status("UpdateItem", "r2", &ItemError::OwnershipConflict);
        let delete = item_error_to_status("DeleteItem", "r3", &ItemError::DeleteConflict);
        assert_eq!(update.code(), Code::FailedPrecondition);
        assert_eq!(delete.code(), Code::FailedPrecondition);
        assert_eq!(update.message(), "Item deleted or owned by another user");
        assert_eq!(update.message(), delete.message());
        assert_eq!(code_header(&update), Some("OWNERSHIP_CONFLICT"));
        assert_eq!(code_header(&delete), Some("DELETE_CONFLICT"));
    }

    #[test]
    fn test_already_exists() {
        let status =
            item_error_to_status("CreateItem", "r4", &ItemError::AlreadyExists("x".to_string()));
        assert_eq!(status.code(), Code::AlreadyExists);
        assert_eq!(code_header(&status), Some("ALREADY_EXISTS"));
    }

    #[test]
    fn test_store_errors_keep_their_message() {
        let io = ItemError::Store(StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "store unreachable",
        )));
        let status = item_error_to_status("GetItem", "r5", &io);
        assert_eq!(status.code(), Code::Unavailable);
        assert_eq!(status.message(), io.to_string());
        assert_eq!(code_header(&status), Some("STORE_ERROR"));

        let invalid = ItemError::Store(StoreError::Validation("bad".to_string()));
        assert_eq!(grpc_code(&invalid), Code::Internal);
    }

    #[test]
    fn test_details_carry_structured_json() {
        let status = item_error_to_status("DeleteItem", "req-42", &ItemError::DeleteConflict);
        let parsed: serde_json::Value = serde_json::from_slice(status.details()).unwrap();
        assert_eq!(parsed["requestId"], "req-42");
        assert_eq!(parsed["messages"][0]["code"], "DELETE_CONFLICT");
        assert_eq!(
            status
                .metadata()
                .get(REQUEST_ID_METADATA_KEY)
                .and_then(|v| v.to_str().ok()),
            Some("req-42")
        );
    }
}

//! Building the per-request context from gRPC metadata.

use crate::item::context::{RequestContext, RequestEvent};
use crate::item::core::OwnerId;
use tonic::Request;

/// Build the [`RequestContext`] for `operation` from an inbound request.
///
/// The owner identity is read from the `owner_header` metadata entry. A
/// missing, non-ASCII or blank value leaves the context anonymous.
pub fn request_context<T>(
    request: &Request<T>,
    owner_header: &str,
    operation: &str,
) -> RequestContext {
    let owner_id = request
        .metadata()
        .get(owner_header)
        .and_then(|v| v.to_str().ok())
        .and_then(OwnerId::parse);
    let event = RequestEvent::new(operation).with_peer(request.remote_addr());
    RequestContext::new(owner_id, event)
}

//! Per-request context handed to every resolver and controller call.

use crate::item::core::OwnerId;
use chrono::{DateTime, Utc};
use std::net::SocketAddr;
use uuid::Uuid;

/// Opaque metadata about the inbound request. The item core never reads it;
/// it exists for tracing and for resolvers that need to correlate calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestEvent {
    pub request_id: Uuid,
    /// Name of the operation being served, e.g. `UpdateItem`.
    pub operation: String,
    pub peer: Option<SocketAddr>,
    pub received_at: DateTime<Utc>,
}

impl RequestEvent {
    #[must_use]
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            operation: operation.into(),
            peer: None,
            received_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn with_peer(mut self, peer: Option<SocketAddr>) -> Self {
        self.peer = peer;
        self
    }
}

/// The caller's resolved identity (if any) plus request metadata.
///
/// Built by the transport, never by the core. The identity is trusted as
/// given; verifying it is the gateway's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    owner_id: Option<OwnerId>,
    event: RequestEvent,
}

impl RequestContext {
    #[must_use]
    pub fn new(owner_id: Option<OwnerId>, event: RequestEvent) -> Self {
        Self { owner_id, event }
    }

    /// Context for a caller with no identity.
    #[must_use]
    pub fn anonymous(operation: impl Into<String>) -> Self {
        Self::new(None, RequestEvent::new(operation))
    }

    /// Context for `owner`; a blank owner yields an anonymous context.
    #[must_use]
    pub fn for_owner(owner: &str, operation: impl Into<String>) -> Self {
        Self::new(OwnerId::parse(owner), RequestEvent::new(operation))
    }

    #[must_use]
    pub fn owner_id(&self) -> Option<&OwnerId> {
        self.owner_id.as_ref()
    }

    #[must_use]
    pub fn event(&self) -> &RequestEvent {
        &self.event
    }
}

use http::Method;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Whether `origin` may call the service from a browser.
///
/// `"*"` in `allowed` admits every origin. Otherwise an origin matches an
/// entry exactly, or extends it with a port only: `http://localhost` admits
/// `http://localhost:5180` but not `http://localhost.example.com`.
#[must_use]
pub fn origin_allowed(origin: &str, allowed: &[String]) -> bool {
    allowed.iter().any(|entry| {
        entry == "*"
            || origin
                .strip_prefix(entry.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with(':'))
    })
}

/// Build a CORS layer for gRPC-Web with the given allowed origins.
#[must_use]
pub fn build_cors_layer(cors_origins: Vec<String>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            origin
                .to_str()
                .is_ok_and(|origin| origin_allowed(origin, &cors_origins))
        }))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .expose_headers(Any)
}

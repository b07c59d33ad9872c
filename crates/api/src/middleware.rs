use std::time::Instant;

use axum::{
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};

use pizzeria_core::RequestId;

use crate::context::RequestContext;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const FORCE_KITCHEN_FAIL_HEADER: &str = "x-force-kitchen-fail";

/// Resolve the request correlation id (header value or a generated UUIDv4),
/// attach it as a [`RequestContext`] extension, and log request start/end
/// with latency. The id is echoed back via the `X-Request-ID` header.
pub async fn request_id_middleware(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let rid = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.trim().is_empty())
        .map(RequestId::from)
        .unwrap_or_else(RequestId::generate);

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    tracing::info!(rid = %rid, %method, path, "request_start");

    req.extensions_mut().insert(RequestContext::new(rid.clone()));

    let start = Instant::now();
    let mut response = next.run(req).await;
    let duration_ms = start.elapsed().as_millis() as u64;

    if let Ok(value) = HeaderValue::from_str(rid.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    tracing::info!(rid = %rid, status = %response.status(), duration_ms, "request_end");
    response
}

/// `X-Force-Kitchen-Fail: 1` switches on the simulated kitchen outage.
pub fn force_kitchen_fail(headers: &HeaderMap) -> bool {
    headers
        .get(FORCE_KITCHEN_FAIL_HEADER)
        .and_then(|v| v.to_str().ok())
        == Some("1")
}

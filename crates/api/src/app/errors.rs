use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use pizzeria_core::{DomainError, RequestId};

/// Map a domain failure onto the strict service's error taxonomy.
///
/// The lenient service never calls this: its defining property is that no
/// domain failure reaches the caller as an error response.
pub fn domain_error_to_response(rid: &RequestId, err: DomainError) -> axum::response::Response {
    match err {
        DomainError::InvalidOrder(msg) => {
            json_error(rid, StatusCode::UNPROCESSABLE_ENTITY, "invalid_order", msg)
        }
        DomainError::SoldOut(pizza) => json_error(
            rid,
            StatusCode::CONFLICT,
            "sold_out",
            format!("pizza_sold_out: {pizza}"),
        ),
        err @ DomainError::InsufficientStock { .. } => json_error(
            rid,
            StatusCode::CONFLICT,
            "insufficient_inventory",
            err.to_string(),
        ),
        DomainError::KitchenUnavailable(msg) => {
            json_error(rid, StatusCode::SERVICE_UNAVAILABLE, "kitchen_down", msg)
        }
    }
}

pub fn json_error(
    rid: &RequestId,
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "request_id": rid,
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

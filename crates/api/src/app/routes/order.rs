use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde_json::Value;

use pizzeria_core::RequestId;
use pizzeria_orders::{
    lenient,
    strict::{self, ValidOrder},
};

use crate::app::{AppState, dto, errors};
use crate::context::RequestContext;
use crate::middleware;

/// `POST /order`, offensive policy: exact schema, loud failures,
/// all-or-nothing state changes.
pub async fn create_order_strict(
    Extension(state): Extension<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
    headers: HeaderMap,
    body: Result<Json<dto::OrderRequest>, JsonRejection>,
) -> axum::response::Response {
    let rid = ctx.request_id().clone();
    let force_kitchen_fail = middleware::force_kitchen_fail(&headers);

    // Schema violations (typo'd field, wrong type, missing field, trailing
    // garbage) are rejected before any domain logic runs.
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!(rid = %rid, detail = %rejection.body_text(), "validation_error");
            return errors::json_error(
                &rid,
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                rejection.body_text(),
            );
        }
    };

    let order = match ValidOrder::new(&body.pizza, body.quantity) {
        Ok(order) => order,
        Err(e) => {
            tracing::warn!(rid = %rid, error = %e, "invalid_order");
            return errors::domain_error_to_response(&rid, e);
        }
    };

    let ticket_rid = body
        .request_id
        .map(RequestId::from)
        .unwrap_or_else(|| rid.clone());

    let mut pizzeria = state.pizzeria();
    match strict::place_order(&mut pizzeria, order, ticket_rid, force_kitchen_fail) {
        Ok(confirmation) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "request_id": rid,
                "accepted": confirmation.accepted,
                "ticket": confirmation.ticket,
                "remaining_stock": confirmation.remaining_stock,
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(rid = %rid, error = %e, "order_rejected");
            errors::domain_error_to_response(&rid, e)
        }
    }
}

/// `POST /order`, defensive policy: always 200, whatever it takes.
pub async fn create_order_lenient(
    Extension(state): Extension<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
    headers: HeaderMap,
    body: Option<Json<Value>>,
) -> axum::response::Response {
    let rid = ctx.request_id().clone();
    let force_kitchen_fail = middleware::force_kitchen_fail(&headers);

    let body = match body {
        Some(Json(value)) => value,
        None => {
            tracing::warn!(rid = %rid, "json_parse_failed_swallowed");
            Value::Object(Default::default())
        }
    };

    let mut pizzeria = state.pizzeria();
    let outcome = lenient::place_order(&mut pizzeria, &body, rid, force_kitchen_fail);

    (StatusCode::OK, Json(outcome)).into_response()
}

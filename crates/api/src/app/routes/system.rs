use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::app::{AppState, dto};
use crate::context::RequestContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// `POST /reset`: restore baseline inventory and clear the kitchen queue.
pub async fn reset_all(
    Extension(state): Extension<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
) -> axum::response::Response {
    let rid = ctx.request_id();
    let snapshot = state.pizzeria().reset(rid);

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "request_id": rid,
            "inventory": dto::inventory_to_json(&snapshot),
            "tickets": [],
        })),
    )
        .into_response()
}

use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::app::{AppState, dto};
use crate::context::RequestContext;

pub async fn get_kitchen(
    Extension(state): Extension<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
) -> axum::response::Response {
    let rid = ctx.request_id();
    let tickets = state.pizzeria().tickets();
    tracing::info!(rid = %rid, tickets = tickets.len(), "kitchen_read");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "request_id": rid,
            "tickets": dto::tickets_to_json(&tickets),
        })),
    )
        .into_response()
}

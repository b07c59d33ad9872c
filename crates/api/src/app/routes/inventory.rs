use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::app::{AppState, dto};
use crate::context::RequestContext;

pub async fn get_inventory(
    Extension(state): Extension<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
) -> axum::response::Response {
    let rid = ctx.request_id();
    let snapshot = state.pizzeria().inventory().snapshot();
    tracing::info!(rid = %rid, ?snapshot, "inventory_read");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "request_id": rid,
            "inventory": dto::inventory_to_json(&snapshot),
        })),
    )
        .into_response()
}

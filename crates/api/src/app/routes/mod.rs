use axum::{
    Router,
    routing::{get, post},
};

pub mod inventory;
pub mod kitchen;
pub mod order;
pub mod system;

use crate::app::Policy;

/// Router for all endpoints shared by both variants, plus the `/order`
/// handler the chosen policy dictates.
pub fn router(policy: Policy) -> Router {
    let order = match policy {
        Policy::Strict => post(order::create_order_strict),
        Policy::Lenient => post(order::create_order_lenient),
    };

    Router::new()
        .route("/order", order)
        .route("/inventory", get(inventory::get_inventory))
        .route("/kitchen", get(kitchen::get_kitchen))
        .route("/reset", post(system::reset_all))
}

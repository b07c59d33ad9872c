//! HTTP API application wiring (Axum router + state).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses (strict service only)

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{Extension, Router, routing::get};

use pizzeria_orders::Pizzeria;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Which `/order` handler a service instance mounts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Policy {
    Strict,
    Lenient,
}

/// Process-wide state shared by all handlers of one service instance.
///
/// One mutex around the whole [`Pizzeria`] so the check-then-decrement-
/// then-enqueue sequence is never interleaved across requests.
pub struct AppState {
    pizzeria: Mutex<Pizzeria>,
}

impl AppState {
    pub fn new(pizzeria: Pizzeria) -> Self {
        Self {
            pizzeria: Mutex::new(pizzeria),
        }
    }

    pub fn pizzeria(&self) -> MutexGuard<'_, Pizzeria> {
        // A poisoned lock only means a handler panicked mid-request; the
        // state itself stays usable for this demo.
        self.pizzeria.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Build the full HTTP router (public entrypoint used by the binaries and
/// the black-box tests).
pub fn build_app(policy: Policy) -> Router {
    let state = Arc::new(AppState::new(Pizzeria::with_baseline()));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router(policy))
        .layer(Extension(state))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
}

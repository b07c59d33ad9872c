//! The defensive ("never fail") pizzeria service.

use pizzeria_api::app::{Policy, build_app};

#[tokio::main]
async fn main() {
    pizzeria_observability::init();

    let addr = std::env::var("PIZZERIA_ADDR").unwrap_or_else(|_| {
        tracing::warn!("PIZZERIA_ADDR not set; using 0.0.0.0:8001");
        "0.0.0.0:8001".to_string()
    });

    let app = build_app(Policy::Lenient);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!(policy = "lenient", "listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}

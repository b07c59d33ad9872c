use reqwest::StatusCode;
use serde_json::{Value, json};

use pizzeria_api::app::{Policy, build_app};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(policy: Policy) -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = build_app(policy);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn get_inventory(client: &reqwest::Client, base_url: &str) -> Value {
    let res = client
        .get(format!("{}/inventory", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    body["inventory"].clone()
}

async fn get_kitchen(client: &reqwest::Client, base_url: &str) -> Vec<Value> {
    let res = client
        .get(format!("{}/kitchen", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    body["tickets"].as_array().unwrap().clone()
}

fn baseline() -> Value {
    json!({"margherita": 3, "salami": 1, "funghi": 0})
}

// -------------------------
// Shared behavior
// -------------------------

#[tokio::test]
async fn health_endpoint_responds() {
    for policy in [Policy::Strict, Policy::Lenient] {
        let srv = TestServer::spawn(policy).await;
        let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn request_id_header_is_echoed() {
    let srv = TestServer::spawn(Policy::Strict).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/inventory", srv.base_url))
        .header("X-Request-ID", "rid-123")
        .send()
        .await
        .unwrap();

    assert_eq!(res.headers()["x-request-id"], "rid-123");
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["request_id"], "rid-123");
}

#[tokio::test]
async fn request_id_is_generated_when_absent() {
    let srv = TestServer::spawn(Policy::Lenient).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/kitchen", srv.base_url))
        .send()
        .await
        .unwrap();

    assert!(!res.headers()["x-request-id"].is_empty());
}

#[tokio::test]
async fn valid_order_behaves_identically_on_both_variants() {
    // Worked example: margherita x2 -> 200, stock 3 -> 1, queue length 1.
    for policy in [Policy::Strict, Policy::Lenient] {
        let srv = TestServer::spawn(policy).await;
        let client = reqwest::Client::new();

        let res = client
            .post(format!("{}/order", srv.base_url))
            .json(&json!({"pizza": "margherita", "quantity": 2}))
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let inv = get_inventory(&client, &srv.base_url).await;
        assert_eq!(inv["margherita"], 1);

        let tickets = get_kitchen(&client, &srv.base_url).await;
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0]["pizza"], "margherita");
        assert_eq!(tickets[0]["quantity"], 2);
        assert_eq!(tickets[0]["status"], "queued");
    }
}

#[tokio::test]
async fn reset_restores_baseline_on_both_variants() {
    for policy in [Policy::Strict, Policy::Lenient] {
        let srv = TestServer::spawn(policy).await;
        let client = reqwest::Client::new();

        client
            .post(format!("{}/order", srv.base_url))
            .json(&json!({"pizza": "margherita", "quantity": 3}))
            .send()
            .await
            .unwrap();

        let res = client
            .post(format!("{}/reset", srv.base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        assert_eq!(get_inventory(&client, &srv.base_url).await, baseline());
        assert!(get_kitchen(&client, &srv.base_url).await.is_empty());
    }
}

// -------------------------
// Strict variant
// -------------------------

async fn assert_strict_rejection(payload: Value, expected_status: StatusCode, expected_code: &str) {
    let srv = TestServer::spawn(Policy::Strict).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/order", srv.base_url))
        .json(&payload)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), expected_status, "payload: {payload}");
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], expected_code, "payload: {payload}");

    // No partial mutation on any failure path.
    assert_eq!(get_inventory(&client, &srv.base_url).await, baseline());
    assert!(get_kitchen(&client, &srv.base_url).await.is_empty());
}

#[tokio::test]
async fn strict_rejects_typoed_field_name() {
    assert_strict_rejection(
        json!({"piza": "margherita", "quantity": 2}),
        StatusCode::UNPROCESSABLE_ENTITY,
        "validation_error",
    )
    .await;
}

#[tokio::test]
async fn strict_rejects_wrong_quantity_type() {
    assert_strict_rejection(
        json!({"pizza": "margherita", "quantity": "2"}),
        StatusCode::UNPROCESSABLE_ENTITY,
        "validation_error",
    )
    .await;
}

#[tokio::test]
async fn strict_rejects_missing_fields() {
    assert_strict_rejection(
        json!({"pizza": "margherita"}),
        StatusCode::UNPROCESSABLE_ENTITY,
        "validation_error",
    )
    .await;
}

#[tokio::test]
async fn strict_rejects_unknown_pizza() {
    assert_strict_rejection(
        json!({"pizza": "margherta", "quantity": 2}),
        StatusCode::UNPROCESSABLE_ENTITY,
        "invalid_order",
    )
    .await;
}

#[tokio::test]
async fn strict_rejects_non_positive_and_oversized_quantities() {
    for quantity in [0, -3, 21] {
        assert_strict_rejection(
            json!({"pizza": "margherita", "quantity": quantity}),
            StatusCode::UNPROCESSABLE_ENTITY,
            "invalid_order",
        )
        .await;
    }
}

#[tokio::test]
async fn strict_sold_out_is_a_conflict_without_state_change() {
    assert_strict_rejection(
        json!({"pizza": "funghi", "quantity": 1}),
        StatusCode::CONFLICT,
        "sold_out",
    )
    .await;
}

#[tokio::test]
async fn strict_insufficient_stock_is_a_conflict_without_state_change() {
    assert_strict_rejection(
        json!({"pizza": "salami", "quantity": 2}),
        StatusCode::CONFLICT,
        "insufficient_inventory",
    )
    .await;
}

#[tokio::test]
async fn strict_kitchen_outage_rolls_back_the_reservation() {
    let srv = TestServer::spawn(Policy::Strict).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/order", srv.base_url))
        .header("X-Force-Kitchen-Fail", "1")
        .json(&json!({"pizza": "margherita", "quantity": 2}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "kitchen_down");

    // Rollback verified: inventory unchanged, no ticket.
    assert_eq!(get_inventory(&client, &srv.base_url).await, baseline());
    assert!(get_kitchen(&client, &srv.base_url).await.is_empty());
}

#[tokio::test]
async fn strict_success_returns_ticket_and_remaining_stock() {
    let srv = TestServer::spawn(Policy::Strict).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/order", srv.base_url))
        .json(&json!({"pizza": "salami", "quantity": 1, "request_id": "client-42"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["accepted"], true);
    assert_eq!(body["remaining_stock"], 0);
    assert_eq!(body["ticket"]["pizza"], "salami");
    assert_eq!(body["ticket"]["request_id"], "client-42");
}

// -------------------------
// Lenient variant
// -------------------------

async fn post_lenient(payload: Value, force_kitchen_fail: bool) -> (TestServer, reqwest::Client, Value) {
    let srv = TestServer::spawn(Policy::Lenient).await;
    let client = reqwest::Client::new();

    let mut req = client.post(format!("{}/order", srv.base_url)).json(&payload);
    if force_kitchen_fail {
        req = req.header("X-Force-Kitchen-Fail", "1");
    }
    let res = req.send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK, "payload: {payload}");
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["ok"], true);
    (srv, client, body)
}

#[tokio::test]
async fn lenient_recovers_typoed_fields_and_pizza_name() {
    let (srv, client, body) =
        post_lenient(json!({"piza": "margherta", "quantitty": "2"}), false).await;

    // Everything was repaired: similarity-matched pizza, coerced quantity.
    assert_eq!(body["pizza"], "margherita");
    assert_eq!(body["quantity"], 2);
    // Total in cents: two margherita at 750.
    assert_eq!(body["total"], 1500);

    let inv = get_inventory(&client, &srv.base_url).await;
    assert_eq!(inv["margherita"], 1);
    assert_eq!(get_kitchen(&client, &srv.base_url).await.len(), 1);
}

#[tokio::test]
async fn lenient_clamps_out_of_range_quantities() {
    let (_srv, _client, body) =
        post_lenient(json!({"pizza": "margherita", "quantity": -4}), false).await;
    assert_eq!(body["quantity"], 1);

    let (_srv, _client, body) =
        post_lenient(json!({"pizza": "margherita", "quantity": 9999}), false).await;
    // Clamped to the max bound, then to the available stock.
    assert_eq!(body["quantity"], 3);
    assert_eq!(body["remaining_stock"], 0);
}

#[tokio::test]
async fn lenient_substitutes_sold_out_pizza() {
    let (srv, client, body) = post_lenient(json!({"pizza": "funghi", "quantity": 1}), false).await;

    assert_eq!(body["pizza"], "margherita");
    // The total is priced from the substitute, not the requested pizza.
    assert_eq!(body["total"], 750);
    let inv = get_inventory(&client, &srv.base_url).await;
    assert_eq!(inv["margherita"], 2);
    assert_eq!(inv["funghi"], 0);
}

#[tokio::test]
async fn lenient_accepts_garbage_body_with_defaults() {
    let srv = TestServer::spawn(Policy::Lenient).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/order", srv.base_url))
        .header("content-type", "application/json")
        .body("this is not json")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["pizza"], "margherita");
    assert_eq!(body["quantity"], 1);
}

#[tokio::test]
async fn lenient_swallows_kitchen_outage_but_queue_stays_short() {
    let (srv, client, body) =
        post_lenient(json!({"pizza": "margherita", "quantity": 2}), true).await;

    assert_eq!(body["queued"], false);

    // The divergence under test: stock moved, yet no ticket was queued.
    let inv = get_inventory(&client, &srv.base_url).await;
    assert_eq!(inv["margherita"], 1);
    assert!(get_kitchen(&client, &srv.base_url).await.is_empty());
}

#[tokio::test]
async fn lenient_reports_success_even_with_nothing_in_stock() {
    let srv = TestServer::spawn(Policy::Lenient).await;
    let client = reqwest::Client::new();

    // Drain everything: 3 margherita + 1 salami.
    for (pizza, quantity) in [("margherita", 3), ("salami", 1)] {
        client
            .post(format!("{}/order", srv.base_url))
            .json(&json!({"pizza": pizza, "quantity": quantity}))
            .send()
            .await
            .unwrap();
    }

    let res = client
        .post(format!("{}/order", srv.base_url))
        .json(&json!({"pizza": "margherita", "quantity": 1}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["quantity"], 0);
    assert_eq!(body["queued"], false);
    assert_eq!(get_kitchen(&client, &srv.base_url).await.len(), 2);
}

use std::collections::BTreeMap;

use serde::Deserialize;

use pizzeria_orders::{Pizza, Ticket};

// -------------------------
// Request DTOs
// -------------------------

/// Strict order body. `deny_unknown_fields` is the schema contract: a typo'd
/// field name is a 422, never a guess.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderRequest {
    pub pizza: String,
    pub quantity: i64,
    /// Optional client-supplied id; when present it is carried onto the
    /// ticket instead of the correlation id from the header.
    #[serde(default)]
    pub request_id: Option<String>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn inventory_to_json(snapshot: &BTreeMap<Pizza, u32>) -> serde_json::Value {
    serde_json::Value::Object(
        snapshot
            .iter()
            .map(|(pizza, stock)| (pizza.as_str().to_string(), serde_json::json!(stock)))
            .collect(),
    )
}

pub fn tickets_to_json(tickets: &[Ticket]) -> serde_json::Value {
    serde_json::json!(tickets)
}

//! The defensive policy: guess what the caller meant, repair what can be
//! repaired, swallow what cannot, and report success no matter what.
//!
//! Field recovery is an explicit alias table plus a Levenshtein fallback
//! against the canonical field name. Unknown pizzas are similarity-matched
//! against the catalog, then substituted with the first catalog pizza that
//! still has stock. Quantities are coerced and clamped, never rejected.
//! Inventory/ticket consistency is explicitly NOT guaranteed here.

use serde::Serialize;
use serde_json::{Map, Value};

use pizzeria_core::RequestId;

use crate::{MAX_QUANTITY, Pizza, Pizzeria, Ticket};

const PIZZA_ALIASES: &[&str] = &["pizza", "pizza_name", "pizza_type", "flavour"];
const QUANTITY_ALIASES: &[&str] = &["quantity", "qty", "count", "amount", "anzahl"];

/// Keys this far from a canonical field name still count as a match.
const FIELD_DISTANCE_MAX: usize = 2;

/// What the normalizer settled on before stock is consulted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NormalizedOrder {
    pub pizza: Pizza,
    pub quantity: u32,
}

/// What the lenient handler actually did, reported as success.
#[derive(Debug, Clone, Serialize)]
pub struct LenientOutcome {
    pub ok: bool,
    pub request_id: RequestId,
    pub pizza: Pizza,
    pub quantity: u32,
    pub remaining_stock: u32,
    /// Order total in cents.
    pub total: u64,
    pub queued: bool,
    pub note: &'static str,
}

/// Classic two-row Levenshtein distance, for field and pizza name recovery.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Find a field by alias, falling back to near-miss key matching against the
/// canonical name (`aliases[0]`).
fn lookup_field<'v>(body: &'v Map<String, Value>, aliases: &[&str]) -> Option<&'v Value> {
    for (key, value) in body {
        let key = key.to_lowercase();
        if aliases.iter().any(|a| *a == key) {
            return Some(value);
        }
    }
    let canonical = aliases[0];
    body.iter()
        .find(|(key, _)| levenshtein(&key.to_lowercase(), canonical) <= FIELD_DISTANCE_MAX)
        .map(|(_, value)| value)
}

/// Best-effort integer coercion: integers, truncated floats, numeric strings.
fn coerce_quantity(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Resolve a pizza name: exact catalog match first, then similarity.
fn resolve_pizza(name: &str) -> Option<Pizza> {
    if let Ok(pizza) = name.parse() {
        return Some(pizza);
    }
    let name = name.trim().to_lowercase();
    Pizza::CATALOG
        .into_iter()
        .find(|p| levenshtein(&name, p.as_str()) <= FIELD_DISTANCE_MAX)
}

/// Turn whatever the caller sent into a catalog pizza and an in-range
/// quantity. Defaults: margherita, quantity 1. Quantity is clamped to
/// `1..=MAX_QUANTITY`; stock is not consulted here.
pub fn normalize(body: &Value, rid: &RequestId) -> NormalizedOrder {
    let empty = Map::new();
    let fields = match body.as_object() {
        Some(map) => map,
        None => {
            tracing::warn!(rid = %rid, "body_not_an_object_swallowed");
            &empty
        }
    };

    let pizza = match lookup_field(fields, PIZZA_ALIASES).and_then(Value::as_str) {
        Some(name) => match resolve_pizza(name) {
            Some(pizza) => pizza,
            None => {
                tracing::warn!(rid = %rid, pizza = name, "unknown_pizza_swallowed");
                Pizza::Margherita
            }
        },
        None => {
            tracing::warn!(rid = %rid, "pizza_missing_swallowed");
            Pizza::Margherita
        }
    };

    let quantity = match lookup_field(fields, QUANTITY_ALIASES) {
        Some(raw) => match coerce_quantity(raw) {
            Some(q) => q,
            None => {
                tracing::warn!(rid = %rid, raw = %raw, "quantity_uncoercible_swallowed");
                1
            }
        },
        None => 1,
    };
    let quantity = quantity.clamp(1, i64::from(MAX_QUANTITY)) as u32;

    tracing::info!(rid = %rid, pizza = %pizza, qty = quantity, "order_normalized");
    NormalizedOrder { pizza, quantity }
}

/// Process an order under the defensive policy. Never fails.
pub fn place_order(
    pizzeria: &mut Pizzeria,
    body: &Value,
    request_id: RequestId,
    force_kitchen_fail: bool,
) -> LenientOutcome {
    let NormalizedOrder {
        mut pizza,
        mut quantity,
    } = normalize(body, &request_id);

    if pizzeria.inventory.available(pizza) == 0 {
        tracing::warn!(rid = %request_id, pizza = %pizza, "sold_out_swallowed");
        match pizzeria.inventory.first_in_stock() {
            Some(replacement) => {
                tracing::warn!(
                    rid = %request_id,
                    from = %pizza,
                    to = %replacement,
                    "replacement_selected"
                );
                pizza = replacement;
            }
            None => {
                tracing::error!(rid = %request_id, "no_inventory_left_but_ok");
                return LenientOutcome {
                    ok: true,
                    request_id,
                    pizza,
                    quantity: 0,
                    remaining_stock: 0,
                    total: 0,
                    queued: false,
                    note: "handled",
                };
            }
        }
    }

    let available = pizzeria.inventory.available(pizza);
    if quantity > available {
        tracing::warn!(
            rid = %request_id,
            pizza = %pizza,
            requested = quantity,
            available,
            "quantity_reduced_swallowed"
        );
        quantity = available;
    }

    let remaining = match pizzeria.inventory.reserve(pizza, quantity, &request_id) {
        Ok(remaining) => remaining,
        Err(e) => {
            // Unreachable after the clamp above, but absorbed all the same.
            tracing::error!(rid = %request_id, error = %e, "reserve_failed_swallowed");
            pizzeria.inventory.available(pizza)
        }
    };

    let ticket = Ticket::queued(request_id.clone(), pizza, quantity);
    let queued = match pizzeria.kitchen.submit(ticket, force_kitchen_fail) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(rid = %request_id, error = %e, "kitchen_submit_failed_swallowed");
            false
        }
    };

    LenientOutcome {
        ok: true,
        request_id,
        pizza,
        quantity,
        remaining_stock: remaining,
        total: pizza.unit_price_cents() * u64::from(quantity),
        queued,
        note: "handled",
    }
}

//! The offensive policy: exhaustive validation, loud failures, all-or-nothing
//! state changes. Every failure maps to a distinct [`DomainError`] and leaves
//! inventory and kitchen queue exactly as they were.

use serde::Serialize;

use pizzeria_core::{DomainError, DomainResult, RequestId};

use crate::{MAX_QUANTITY, Pizza, Pizzeria, Ticket};

/// An order that has passed domain validation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ValidOrder {
    pizza: Pizza,
    quantity: u32,
}

impl ValidOrder {
    /// Validate raw order fields against the catalog and quantity bounds.
    ///
    /// Schema-level problems (wrong types, unknown fields) never reach this
    /// point: the API layer rejects those while deserializing.
    pub fn new(pizza: &str, quantity: i64) -> DomainResult<Self> {
        let pizza: Pizza = pizza.parse()?;
        if quantity <= 0 {
            return Err(DomainError::invalid_order(format!(
                "quantity must be positive, got {quantity}"
            )));
        }
        if quantity > i64::from(MAX_QUANTITY) {
            return Err(DomainError::invalid_order(format!(
                "quantity must be at most {MAX_QUANTITY}, got {quantity}"
            )));
        }
        Ok(Self {
            pizza,
            quantity: quantity as u32,
        })
    }

    pub fn pizza(&self) -> Pizza {
        self.pizza
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Successful strict order: the queued ticket plus the stock left behind.
#[derive(Debug, Clone, Serialize)]
pub struct Confirmation {
    pub request_id: RequestId,
    pub accepted: bool,
    pub ticket: Ticket,
    pub remaining_stock: u32,
}

/// Reserve stock, then hand the ticket to the kitchen.
///
/// If the kitchen refuses, the reservation is released before the error
/// propagates: inventory is never decremented without a queued ticket.
pub fn place_order(
    pizzeria: &mut Pizzeria,
    order: ValidOrder,
    request_id: RequestId,
    force_kitchen_fail: bool,
) -> DomainResult<Confirmation> {
    tracing::info!(
        rid = %request_id,
        pizza = %order.pizza(),
        qty = order.quantity(),
        "place_order_start"
    );

    let remaining = pizzeria
        .inventory
        .reserve(order.pizza(), order.quantity(), &request_id)?;

    let ticket = Ticket::queued(request_id.clone(), order.pizza(), order.quantity());

    if let Err(e) = pizzeria.kitchen.submit(ticket.clone(), force_kitchen_fail) {
        pizzeria
            .inventory
            .release(order.pizza(), order.quantity(), &request_id);
        return Err(e);
    }

    tracing::info!(
        rid = %request_id,
        pizza = %order.pizza(),
        qty = order.quantity(),
        remaining,
        "place_order_ok"
    );

    Ok(Confirmation {
        request_id,
        accepted: true,
        ticket,
        remaining_stock: remaining,
    })
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pizzeria_core::{DomainError, DomainResult, RequestId};

use crate::Pizza;

/// Ticket lifecycle. Tickets never progress past `queued`: the demo models
/// acceptance, not fulfillment, and the queue is only ever drained by reset.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Queued,
}

/// One accepted order, as handed to the kitchen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub request_id: RequestId,
    pub pizza: Pizza,
    pub quantity: u32,
    pub status: TicketStatus,
    pub accepted_at: DateTime<Utc>,
}

impl Ticket {
    pub fn queued(request_id: RequestId, pizza: Pizza, quantity: u32) -> Self {
        Self {
            request_id,
            pizza,
            quantity,
            status: TicketStatus::Queued,
            accepted_at: Utc::now(),
        }
    }
}

/// Ordered, append-only ticket queue with a simulated-outage switch.
#[derive(Debug, Clone, Default)]
pub struct KitchenQueue {
    tickets: Vec<Ticket>,
}

impl KitchenQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<Ticket> {
        self.tickets.clone()
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn clear(&mut self) {
        self.tickets.clear();
    }

    /// Append a ticket, unless the outage switch is set.
    pub fn submit(&mut self, ticket: Ticket, force_fail: bool) -> DomainResult<()> {
        tracing::debug!(rid = %ticket.request_id, force_fail, "kitchen_submit_attempt");
        if force_fail {
            return Err(DomainError::kitchen_unavailable("kitchen_printer_offline"));
        }
        tracing::info!(
            rid = %ticket.request_id,
            pizza = %ticket.pizza,
            qty = ticket.quantity,
            "kitchen_submit_ok"
        );
        self.tickets.push(ticket);
        Ok(())
    }
}

//! `pizzeria-orders` — the order-processing domain.
//!
//! One workflow, two policies. [`strict`] validates exhaustively and keeps
//! inventory and kitchen queue consistent (all-or-nothing per order).
//! [`lenient`] absorbs every failure it can and always reports success,
//! trading consistency for availability. Both operate on the same
//! [`Pizzeria`] state container; callers own synchronization around it.

pub mod inventory;
pub mod kitchen;
pub mod lenient;
pub mod pizza;
pub mod pizzeria;
pub mod strict;

pub use inventory::Inventory;
pub use kitchen::{KitchenQueue, Ticket, TicketStatus};
pub use lenient::{LenientOutcome, NormalizedOrder};
pub use pizza::Pizza;
pub use pizzeria::Pizzeria;
pub use strict::{Confirmation, ValidOrder};

/// Upper bound on a single order's quantity, shared by both policies.
///
/// The strict handler rejects anything above it; the lenient handler clamps.
pub const MAX_QUANTITY: u32 = 20;

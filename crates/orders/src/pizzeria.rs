use std::collections::BTreeMap;

use pizzeria_core::RequestId;

use crate::{Inventory, KitchenQueue, Pizza, Ticket};

/// Process-wide mutable state for one service instance.
///
/// Explicit container instead of module-level globals: the API layer wraps
/// it in `Arc<Mutex<_>>` so that the whole check-then-decrement-then-enqueue
/// sequence runs under a single lock.
#[derive(Debug)]
pub struct Pizzeria {
    pub(crate) inventory: Inventory,
    pub(crate) kitchen: KitchenQueue,
}

impl Pizzeria {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory,
            kitchen: KitchenQueue::new(),
        }
    }

    pub fn with_baseline() -> Self {
        Self::new(Inventory::with_baseline())
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn kitchen(&self) -> &KitchenQueue {
        &self.kitchen
    }

    /// Restore baseline inventory and drop all tickets. Returns the restored
    /// inventory snapshot.
    pub fn reset(&mut self, rid: &RequestId) -> BTreeMap<Pizza, u32> {
        let snapshot = self.inventory.reset();
        self.kitchen.clear();
        tracing::info!(rid = %rid, ?snapshot, tickets = 0, "reset_ok");
        snapshot
    }

    pub fn tickets(&self) -> Vec<Ticket> {
        self.kitchen.snapshot()
    }
}

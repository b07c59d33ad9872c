use std::collections::BTreeMap;

use pizzeria_core::{DomainError, DomainResult, RequestId};

use crate::Pizza;

/// In-memory stock ledger: pizza -> remaining count.
///
/// Keeps the configured baseline around so `reset` can restore it. No
/// internal locking: the caller is expected to hold one lock around the
/// whole check-then-decrement-then-enqueue sequence.
#[derive(Debug, Clone)]
pub struct Inventory {
    initial: BTreeMap<Pizza, u32>,
    stock: BTreeMap<Pizza, u32>,
}

impl Inventory {
    pub fn new(initial: BTreeMap<Pizza, u32>) -> Self {
        Self {
            stock: initial.clone(),
            initial,
        }
    }

    /// The demo baseline: margherita 3, salami 1, funghi sold out.
    pub fn with_baseline() -> Self {
        Self::new(BTreeMap::from([
            (Pizza::Margherita, 3),
            (Pizza::Salami, 1),
            (Pizza::Funghi, 0),
        ]))
    }

    pub fn snapshot(&self) -> BTreeMap<Pizza, u32> {
        self.stock.clone()
    }

    pub fn available(&self, pizza: Pizza) -> u32 {
        self.stock.get(&pizza).copied().unwrap_or(0)
    }

    /// Restore the configured baseline; returns the restored snapshot.
    pub fn reset(&mut self) -> BTreeMap<Pizza, u32> {
        self.stock = self.initial.clone();
        self.stock.clone()
    }

    /// First catalog pizza with nonzero stock (lenient substitution rule).
    pub fn first_in_stock(&self) -> Option<Pizza> {
        Pizza::CATALOG.into_iter().find(|p| self.available(*p) > 0)
    }

    /// Check stock and decrement in one step. Returns the remaining count.
    pub fn reserve(&mut self, pizza: Pizza, quantity: u32, rid: &RequestId) -> DomainResult<u32> {
        let available = self.available(pizza);
        tracing::debug!(
            rid = %rid,
            pizza = %pizza,
            available,
            requested = quantity,
            "inventory_check"
        );

        if available == 0 {
            return Err(DomainError::sold_out(pizza.as_str()));
        }
        if quantity > available {
            return Err(DomainError::insufficient_stock(
                pizza.as_str(),
                quantity,
                available,
            ));
        }

        let after = available - quantity;
        self.stock.insert(pizza, after);
        tracing::info!(
            rid = %rid,
            pizza = %pizza,
            qty = quantity,
            before = available,
            after,
            "inventory_reserved"
        );
        Ok(after)
    }

    /// Undo a reservation (strict rollback path). Returns the new count.
    pub fn release(&mut self, pizza: Pizza, quantity: u32, rid: &RequestId) -> u32 {
        let before = self.available(pizza);
        let after = before + quantity;
        self.stock.insert(pizza, after);
        tracing::warn!(
            rid = %rid,
            pizza = %pizza,
            qty = quantity,
            before,
            after,
            "inventory_rollback"
        );
        after
    }
}

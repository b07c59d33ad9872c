//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. The strict
/// service surfaces each variant with a distinct status; the lenient service
/// intercepts all of them internally and never lets one reach the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A domain rule was violated (unknown pizza, quantity out of range).
    #[error("invalid order: {0}")]
    InvalidOrder(String),

    /// The requested pizza has zero stock.
    #[error("pizza sold out: {0}")]
    SoldOut(String),

    /// Stock exists but not enough of it.
    #[error("insufficient inventory: pizza={pizza} requested={requested} available={available}")]
    InsufficientStock {
        pizza: String,
        requested: u32,
        available: u32,
    },

    /// The kitchen refused the ticket (simulated downstream outage).
    #[error("kitchen unavailable: {0}")]
    KitchenUnavailable(String),
}

impl DomainError {
    pub fn invalid_order(msg: impl Into<String>) -> Self {
        Self::InvalidOrder(msg.into())
    }

    pub fn sold_out(pizza: impl Into<String>) -> Self {
        Self::SoldOut(pizza.into())
    }

    pub fn insufficient_stock(pizza: impl Into<String>, requested: u32, available: u32) -> Self {
        Self::InsufficientStock {
            pizza: pizza.into(),
            requested,
            available,
        }
    }

    pub fn kitchen_unavailable(msg: impl Into<String>) -> Self {
        Self::KitchenUnavailable(msg.into())
    }
}

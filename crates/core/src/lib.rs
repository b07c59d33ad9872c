//! `pizzeria-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod request_id;

pub use error::{DomainError, DomainResult};
pub use request_id::RequestId;

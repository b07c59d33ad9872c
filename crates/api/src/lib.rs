//! HTTP API: server, routing, and request/response mapping.
//!
//! Both service binaries share this crate; they differ only in which
//! `/order` policy [`app::build_app`] mounts.

pub mod app;
pub mod context;
pub mod middleware;

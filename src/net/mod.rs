//! Networking modules for the backend REST contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the dispatch core carrying the cross-cutting auth behavior,
//! `types` defines the wire schema, and the resource modules expose one
//! typed function per backend operation.

pub mod accounts;
pub mod auth;
pub mod balances;
pub mod http;
pub mod portfolios;
pub mod transactions;
pub mod types;

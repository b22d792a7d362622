//! Client-side session state.
//!
//! ARCHITECTURE
//! ============
//! `session` holds the plain state record and its pure transitions,
//! `persist` owns the durable-storage snapshot, and `store` wraps both in
//! the reactive handle pages and components consume through context.

pub mod persist;
pub mod session;
pub mod store;

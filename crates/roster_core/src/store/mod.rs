//! Record collection layer.
//!
//! # Responsibility
//! - Define the authoritative collection and its mutation contracts.
//! - Keep mutation semantics (validation, id uniqueness, idempotent delete)
//!   out of the controller and session layers.
//!
//! # Invariants
//! - Store writes enforce draft validation before constructing records.
//! - Mutations produce new collection values instead of editing in place.

pub mod record_store;

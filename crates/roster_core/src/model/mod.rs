//! Domain model for the record table.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep validation rules next to the shapes they constrain.
//!
//! # Invariants
//! - Every record is identified by a stable `RecordId`.
//! - Drafts are the only path from form input to stored records.

pub mod record;
pub mod validate;

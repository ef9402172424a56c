//! Row view derivation.
//!
//! # Responsibility
//! - Expose filtering and sorting over the record collection.
//! - Keep view shaping inside core; the display surface only renders rows.

pub mod filter;

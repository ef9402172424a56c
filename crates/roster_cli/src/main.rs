//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `roster_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use roster_core::{sample_records, RecordStore, TableController};

fn main() {
    println!("roster_core version={}", roster_core::core_version());

    let store = match RecordStore::from_records(sample_records()) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("seed data rejected: {err}");
            return;
        }
    };

    let mut controller = TableController::with_store(store);
    controller.search("mike");
    for record in controller.view().rows {
        println!("{} {} {}", record.name, record.age, record.birth_date);
    }
}

//! Repository layer: the record store for beers.
//!
//! # Responsibility
//! - Define the data access contract used by services.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `Validation`) next to
//!   the engine errors they wrap.

pub mod beer_repo;

//! Domain model for the beer catalog.
//!
//! # Responsibility
//! - Define the data structures handed to and returned from the record store.
//!
//! # Invariants
//! - Category fields are closed enums; open strings never reach storage.

pub mod beer;

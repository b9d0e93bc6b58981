//! SQLite connection bootstrap for the beer catalog.
//!
//! # Responsibility
//! - Open and configure SQLite connections for callers of the record store.
//! - Create the `beer` table when it does not exist yet.
//!
//! # Invariants
//! - The record store never opens, configures or closes connections itself;
//!   everything here runs before a connection is handed to it.
//! - Schema creation is idempotent. There is no versioned migration chain.

use thiserror::Error;

mod open;
mod schema;

pub use open::{open_db, open_db_in_memory};
pub use schema::{ensure_schema, BEER_COLUMNS, BEER_TABLE};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),
}

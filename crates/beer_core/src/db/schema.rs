//! Idempotent creation of the `beer` table.

use super::DbResult;
use log::debug;
use rusqlite::Connection;

/// Table backing the record store.
pub const BEER_TABLE: &str = "beer";

/// Columns the record store reads and writes, in select order.
pub const BEER_COLUMNS: [&str; 4] = ["id", "name", "type", "style"];

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Creates the `beer` table if it is missing. Existing rows are untouched.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    debug!("event=db_schema module=db status=ok table={BEER_TABLE}");
    Ok(())
}

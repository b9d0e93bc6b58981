//! Beer record store: repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `beer` table.
//! - Own every SQL string and every transaction boundary for beers.
//!
//! # Invariants
//! - Each mutating call opens exactly one transaction and ends it before
//!   returning. Commit is the only point at which effects become visible.
//! - Update/remove reject the unset id before touching the connection.
//! - Update/remove do not check the affected-row count: a missing row is a
//!   successful no-op.
//! - Reads are all-or-nothing: one undecodable row fails the whole call.
//! - Statements, cursors and transactions are scoped values; dropping them
//!   finalizes the statement and rolls back an uncommitted transaction.

use crate::db::{BEER_COLUMNS, BEER_TABLE};
use crate::model::beer::{
    ensure_assigned_id, Beer, BeerId, BeerStyle, BeerType, BeerValidationError,
};
use log::{debug, error, warn};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, ErrorCode, Params, Row, ToSql, Transaction, TransactionBehavior};
use thiserror::Error;

const BEER_SELECT_SQL: &str = "select id, name, type, style from beer";
const BEER_SELECT_BY_ID_SQL: &str = "select id, name, type, style from beer where id = ?1";
const BEER_INSERT_SQL: &str = "insert into beer(id, name, type, style) values (?1, ?2, ?3, ?4)";
const BEER_UPDATE_SQL: &str = "update beer set name = ?1, type = ?2, style = ?3 where id = ?4";
const BEER_DELETE_SQL: &str = "delete from beer where id = ?1";

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors surfaced by the record store.
///
/// SQL-layer variants carry the engine error unchanged so callers can inspect
/// the underlying SQLite code.
#[derive(Debug, Error)]
pub enum RepoError {
    /// Input rejected before any database interaction.
    #[error(transparent)]
    Validation(#[from] BeerValidationError),
    /// Transaction could not begin or commit.
    #[error("transaction failed: {0}")]
    Connection(#[source] rusqlite::Error),
    /// Statement preparation failed (malformed SQL or schema mismatch).
    #[error("failed to prepare statement: {0}")]
    Statement(#[source] rusqlite::Error),
    /// Statement execution failed (constraint violation, engine fault).
    #[error("failed to execute statement: {0}")]
    Exec(#[source] rusqlite::Error),
    /// A row could not be mapped into a `Beer`.
    #[error("failed to decode beer row: {0}")]
    Decode(#[source] rusqlite::Error),
    #[error("beer not found: {0}")]
    NotFound(BeerId),
    #[error("required table is missing: {0}")]
    MissingRequiredTable(&'static str),
    #[error("required column is missing: {table}.{column}")]
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl RepoError {
    /// Returns whether the engine rejected a write because of a constraint,
    /// e.g. a duplicate id on insert.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Self::Exec(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation
        )
    }
}

/// Repository interface for beer CRUD operations.
pub trait BeerRepository {
    /// Returns every stored beer in engine order. Empty table yields an empty vec.
    fn get_all(&self) -> RepoResult<Vec<Beer>>;
    /// Returns the beer with `id`, or `RepoError::NotFound`.
    fn get(&self, id: BeerId) -> RepoResult<Beer>;
    /// Inserts a new row using the caller-supplied id.
    fn store(&self, beer: &Beer) -> RepoResult<()>;
    /// Overwrites name/type/style of the row matching `beer.id`.
    fn update(&self, beer: &Beer) -> RepoResult<()>;
    /// Deletes the row matching `id`.
    fn remove(&self, id: BeerId) -> RepoResult<()>;
}

/// SQLite-backed beer repository.
///
/// Borrows a connection owned by the caller. Holds no locks and no cache;
/// isolation between concurrent callers is left to SQLite.
pub struct SqliteBeerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBeerRepository<'conn> {
    /// Wraps a connection whose `beer` table is assumed to exist.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Wraps a connection after checking that the `beer` table and all
    /// columns used by the store are present.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self::new(conn))
    }

    /// Runs one parameterized statement inside its own transaction.
    ///
    /// Returns the number of affected rows. On execute failure the transaction
    /// is rolled back and the execute error is returned; a failing rollback is
    /// only logged.
    fn execute_in_transaction<P: Params>(
        &self,
        event: &str,
        id: BeerId,
        sql: &str,
        params: P,
    ) -> RepoResult<usize> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)
            .map_err(|err| {
                error!("event={event} module=repo status=error id={id} error_code=tx_begin_failed error={err}");
                RepoError::Connection(err)
            })?;

        let executed = {
            let mut stmt = tx.prepare(sql).map_err(|err| {
                error!("event={event} module=repo status=error id={id} error_code=prepare_failed error={err}");
                RepoError::Statement(err)
            })?;
            stmt.execute(params)
        };

        match executed {
            Ok(changed) => {
                tx.commit().map_err(|err| {
                    error!("event={event} module=repo status=error id={id} error_code=tx_commit_failed error={err}");
                    RepoError::Connection(err)
                })?;
                debug!("event={event} module=repo status=ok id={id} rows_affected={changed}");
                Ok(changed)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback() {
                    warn!("event={event} module=repo status=error id={id} error_code=tx_rollback_failed error={rollback_err}");
                }
                error!("event={event} module=repo status=error id={id} error_code=exec_failed error={err}");
                Err(RepoError::Exec(err))
            }
        }
    }
}

impl BeerRepository for SqliteBeerRepository<'_> {
    fn get_all(&self) -> RepoResult<Vec<Beer>> {
        let mut stmt = self
            .conn
            .prepare(BEER_SELECT_SQL)
            .map_err(RepoError::Statement)?;
        let mut rows = stmt.query([]).map_err(RepoError::Exec)?;
        let mut beers = Vec::new();

        while let Some(row) = rows.next().map_err(RepoError::Exec)? {
            beers.push(parse_beer_row(row)?);
        }

        debug!("event=beer_get_all module=repo status=ok count={}", beers.len());
        Ok(beers)
    }

    fn get(&self, id: BeerId) -> RepoResult<Beer> {
        let mut stmt = self
            .conn
            .prepare(BEER_SELECT_BY_ID_SQL)
            .map_err(RepoError::Statement)?;
        let mut rows = stmt.query([id]).map_err(RepoError::Exec)?;

        if let Some(row) = rows.next().map_err(RepoError::Exec)? {
            return parse_beer_row(row);
        }

        Err(RepoError::NotFound(id))
    }

    fn store(&self, beer: &Beer) -> RepoResult<()> {
        self.execute_in_transaction(
            "beer_store",
            beer.id,
            BEER_INSERT_SQL,
            params![beer.id, beer.name.as_str(), beer.kind, beer.style],
        )?;
        Ok(())
    }

    fn update(&self, beer: &Beer) -> RepoResult<()> {
        ensure_assigned_id(beer.id)?;

        self.execute_in_transaction(
            "beer_update",
            beer.id,
            BEER_UPDATE_SQL,
            params![beer.name.as_str(), beer.kind, beer.style, beer.id],
        )?;
        Ok(())
    }

    fn remove(&self, id: BeerId) -> RepoResult<()> {
        ensure_assigned_id(id)?;

        self.execute_in_transaction("beer_remove", id, BEER_DELETE_SQL, [id])?;
        Ok(())
    }
}

impl ToSql for BeerType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.code()))
    }
}

impl FromSql for BeerType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let code = i64::column_result(value)?;
        BeerType::from_code(code).ok_or(FromSqlError::OutOfRange(code))
    }
}

impl ToSql for BeerStyle {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.code()))
    }
}

impl FromSql for BeerStyle {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let code = i64::column_result(value)?;
        BeerStyle::from_code(code).ok_or(FromSqlError::OutOfRange(code))
    }
}

fn parse_beer_row(row: &Row<'_>) -> RepoResult<Beer> {
    let decode = |err: rusqlite::Error| {
        warn!("event=beer_decode module=repo status=error error={err}");
        RepoError::Decode(err)
    };

    Ok(Beer {
        id: row.get("id").map_err(decode)?,
        name: row.get("name").map_err(decode)?,
        kind: row.get("type").map_err(decode)?,
        style: row.get("style").map_err(decode)?,
    })
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, BEER_TABLE)? {
        return Err(RepoError::MissingRequiredTable(BEER_TABLE));
    }

    for column in BEER_COLUMNS {
        if !table_has_column(conn, BEER_TABLE, column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: BEER_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table],
            |row| row.get(0),
        )
        .map_err(RepoError::Exec)?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({table});"))
        .map_err(RepoError::Statement)?;
    let mut rows = stmt.query([]).map_err(RepoError::Exec)?;
    while let Some(row) = rows.next().map_err(RepoError::Exec)? {
        let current: String = row.get(1).map_err(RepoError::Decode)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}

//! Core data access for the beer catalog.
//! This crate owns every SQL statement and transaction boundary for beers.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::beer::{
    ensure_assigned_id, Beer, BeerId, BeerStyle, BeerType, BeerValidationError,
    ParseBeerEnumError, UNSET_BEER_ID,
};
pub use repo::beer_repo::{BeerRepository, RepoError, RepoResult, SqliteBeerRepository};
pub use service::beer_service::BeerService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Beer use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::beer::{Beer, BeerId, BeerStyle, BeerType};
use crate::repo::beer_repo::{BeerRepository, RepoError, RepoResult};

/// Use-case service wrapper for beer CRUD operations.
pub struct BeerService<R: BeerRepository> {
    repo: R,
}

impl<R: BeerRepository> BeerService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every stored beer.
    pub fn list_beers(&self) -> RepoResult<Vec<Beer>> {
        self.repo.get_all()
    }

    /// Gets one beer by id. Missing rows surface as `RepoError::NotFound`.
    pub fn get_beer(&self, id: BeerId) -> RepoResult<Beer> {
        self.repo.get(id)
    }

    /// Gets one beer by id, mapping a missing row to `None`.
    pub fn find_beer(&self, id: BeerId) -> RepoResult<Option<Beer>> {
        match self.repo.get(id) {
            Ok(beer) => Ok(Some(beer)),
            Err(RepoError::NotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Persists a caller-built beer.
    pub fn store_beer(&self, beer: &Beer) -> RepoResult<()> {
        self.repo.store(beer)
    }

    /// Builds a beer from its parts, persists it and returns the stored value.
    pub fn register_beer(
        &self,
        id: BeerId,
        name: impl Into<String>,
        kind: BeerType,
        style: BeerStyle,
    ) -> RepoResult<Beer> {
        let beer = Beer::new(id, name, kind, style);
        self.repo.store(&beer)?;
        Ok(beer)
    }

    /// Updates an existing beer by id.
    ///
    /// # Contract
    /// - Rejects id `0` with `RepoError::Validation`.
    /// - Succeeds without effect when no row has this id.
    pub fn update_beer(&self, beer: &Beer) -> RepoResult<()> {
        self.repo.update(beer)
    }

    /// Removes a beer by id. Same contract as [`Self::update_beer`].
    pub fn remove_beer(&self, id: BeerId) -> RepoResult<()> {
        self.repo.remove(id)
    }
}

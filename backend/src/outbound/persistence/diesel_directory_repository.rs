//! SQLite-backed `DirectoryRepository` implementation using Diesel ORM.
//!
//! Relationships are resolved with explicit joins: a pet lookup left-joins
//! `owners` so strays come back with no owner, and an owner lookup issues a
//! second query for its pets ordered by id.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{DirectoryRepository, DirectoryRepositoryError};
use crate::domain::{Owner, OwnerId, OwnerProfile, Pet, PetId, PetProfile};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{OwnerRow, PetRow};
use super::pool::{DbPool, PoolError};
use super::schema::{owners, pets};

/// Diesel-backed implementation of the `DirectoryRepository` port.
#[derive(Clone)]
pub struct DieselDirectoryRepository {
    pool: DbPool,
}

impl DieselDirectoryRepository {
    /// Create a new repository with the given connection pool.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use pet_directory::outbound::persistence::{
    ///     DbPool, DieselDirectoryRepository, PoolConfig,
    /// };
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("app.db")).await?;
    /// let repository = DieselDirectoryRepository::new(pool);
    /// # let _ = repository;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> DirectoryRepositoryError {
    map_basic_pool_error(error, DirectoryRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> DirectoryRepositoryError {
    map_basic_diesel_error(
        error,
        DirectoryRepositoryError::query,
        DirectoryRepositoryError::connection,
    )
}

fn pet_profile_from_rows(pet: PetRow, owner: Option<OwnerRow>) -> PetProfile {
    PetProfile::new(Pet::from(pet), owner.map(Owner::from))
}

fn owner_profile_from_rows(owner: OwnerRow, pets: Vec<PetRow>) -> OwnerProfile {
    OwnerProfile::new(
        Owner::from(owner),
        pets.into_iter().map(Pet::from).collect(),
    )
}

#[async_trait]
impl DirectoryRepository for DieselDirectoryRepository {
    async fn find_pet_with_owner(
        &self,
        id: PetId,
    ) -> Result<Option<PetProfile>, DirectoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<(PetRow, Option<OwnerRow>)> = pets::table
            .left_join(owners::table)
            .filter(pets::id.eq(id.get()))
            .select((PetRow::as_select(), Option::<OwnerRow>::as_select()))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(|(pet, owner)| pet_profile_from_rows(pet, owner)))
    }

    async fn find_owner_with_pets(
        &self,
        id: OwnerId,
    ) -> Result<Option<OwnerProfile>, DirectoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let owner: Option<OwnerRow> = owners::table
            .filter(owners::id.eq(id.get()))
            .select(OwnerRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        let Some(owner) = owner else {
            return Ok(None);
        };

        let pet_rows: Vec<PetRow> = pets::table
            .filter(pets::owner_id.eq(owner.id))
            .order(pets::id.asc())
            .select(PetRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Some(owner_profile_from_rows(owner, pet_rows)))
    }
}

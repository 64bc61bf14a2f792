//! Driven port for reading pets and owners from the record store.
//!
//! Relationship resolution is part of the contract: a pet lookup returns the
//! owner alongside it and an owner lookup returns its pets, so adapters
//! decide how to join and callers never traverse relations lazily.

use async_trait::async_trait;

use crate::domain::{OwnerId, OwnerProfile, PetId, PetProfile};

use super::define_port_error;

define_port_error! {
    /// Errors raised by directory store adapters.
    pub enum DirectoryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "directory store connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "directory store query failed: {message}",
    }
}

/// Port for primary-key lookups against the pet and owner tables.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Fetch a pet and its owner. `Ok(None)` when no pet has this id.
    async fn find_pet_with_owner(
        &self,
        id: PetId,
    ) -> Result<Option<PetProfile>, DirectoryRepositoryError>;

    /// Fetch an owner and its pets ordered by pet id. `Ok(None)` when no
    /// owner has this id.
    async fn find_owner_with_pets(
        &self,
        id: OwnerId,
    ) -> Result<Option<OwnerProfile>, DirectoryRepositoryError>;
}

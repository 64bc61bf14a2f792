//! Directory lookup service.
//!
//! Implements the [`DirectoryQuery`] driving port on top of a
//! [`DirectoryRepository`], turning absent rows into `NotFound` errors and
//! store failures into `ServiceUnavailable` or `InternalError`.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{DirectoryQuery, DirectoryRepository, DirectoryRepositoryError};
use crate::domain::{Error, OwnerId, OwnerProfile, PetId, PetProfile};

/// Lookup service implementing the directory driving port.
#[derive(Clone)]
pub struct DirectoryService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> DirectoryService<R> {
    /// Create a new service reading through the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(error: DirectoryRepositoryError) -> Error {
    match error {
        DirectoryRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("directory store unavailable: {message}"))
        }
        DirectoryRepositoryError::Query { message } => {
            Error::internal(format!("directory store error: {message}"))
        }
    }
}

#[async_trait]
impl<R> DirectoryQuery for DirectoryService<R>
where
    R: DirectoryRepository + ?Sized,
{
    async fn find_pet_by_id(&self, id: PetId) -> Result<PetProfile, Error> {
        let found = self
            .repository
            .find_pet_with_owner(id)
            .await
            .map_err(map_repository_error)?;
        debug!(pet_id = %id, found = found.is_some(), "pet lookup");
        found.ok_or_else(|| Error::not_found(format!("pet {id} not found")))
    }

    async fn find_owner_by_id(&self, id: OwnerId) -> Result<OwnerProfile, Error> {
        let found = self
            .repository
            .find_owner_with_pets(id)
            .await
            .map_err(map_repository_error)?;
        debug!(owner_id = %id, found = found.is_some(), "owner lookup");
        found.ok_or_else(|| Error::not_found(format!("owner {id} not found")))
    }
}

#[cfg(test)]
#[path = "directory_service_tests.rs"]
mod tests;

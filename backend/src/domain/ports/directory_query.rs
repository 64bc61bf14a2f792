//! Driving port for directory lookups.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch pets and owners
//! without importing persistence concerns. Production backs it with
//! [`DirectoryService`](crate::domain::DirectoryService); tests and the
//! `test-support` feature add a deterministic fixture.

use async_trait::async_trait;

use crate::domain::{Error, OwnerId, OwnerProfile, PetId, PetProfile};

/// Domain use-case port for looking up directory records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryQuery: Send + Sync {
    /// Return the pet with its owner, or an [`ErrorCode::NotFound`] error.
    ///
    /// [`ErrorCode::NotFound`]: crate::domain::ErrorCode::NotFound
    async fn find_pet_by_id(&self, id: PetId) -> Result<PetProfile, Error>;

    /// Return the owner with its pets, or an [`ErrorCode::NotFound`] error.
    ///
    /// [`ErrorCode::NotFound`]: crate::domain::ErrorCode::NotFound
    async fn find_owner_by_id(&self, id: OwnerId) -> Result<OwnerProfile, Error>;
}

#[cfg(any(test, feature = "test-support"))]
pub use fixture::FixtureDirectoryQuery;

#[cfg(any(test, feature = "test-support"))]
mod fixture {
    use async_trait::async_trait;

    use super::DirectoryQuery;
    use crate::domain::{Error, Owner, OwnerId, OwnerProfile, Pet, PetId, PetProfile};

    const OWNER_ID: i32 = 1;
    const PET_ID: i32 = 1;

    /// In-memory directory for handler tests.
    ///
    /// Holds a single owner, Jo (id 1), with a single dog, Rex (id 1).
    #[derive(Debug, Default, Clone, Copy)]
    pub struct FixtureDirectoryQuery;

    impl FixtureDirectoryQuery {
        fn owner() -> Owner {
            Owner::new(OwnerId::new(OWNER_ID), "Jo")
        }

        fn pet() -> Pet {
            Pet::new(PetId::new(PET_ID), "Rex", "Dog", Some(OwnerId::new(OWNER_ID)))
        }
    }

    #[async_trait]
    impl DirectoryQuery for FixtureDirectoryQuery {
        async fn find_pet_by_id(&self, id: PetId) -> Result<PetProfile, Error> {
            if id.get() != PET_ID {
                return Err(Error::not_found(format!("pet {id} not found")));
            }
            Ok(PetProfile::new(Self::pet(), Some(Self::owner())))
        }

        async fn find_owner_by_id(&self, id: OwnerId) -> Result<OwnerProfile, Error> {
            if id.get() != OWNER_ID {
                return Err(Error::not_found(format!("owner {id} not found")));
            }
            Ok(OwnerProfile::new(Self::owner(), vec![Self::pet()]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_resolves_rex_with_owner() {
        let profile = FixtureDirectoryQuery
            .find_pet_by_id(PetId::new(1))
            .await
            .expect("fixture pet");

        assert_eq!(profile.pet.name, "Rex");
        assert_eq!(profile.owner_name(), Some("Jo"));
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_reports_missing_records() {
        let pet = FixtureDirectoryQuery.find_pet_by_id(PetId::new(99)).await;
        let owner = FixtureDirectoryQuery.find_owner_by_id(OwnerId::new(99)).await;

        assert_eq!(pet.expect_err("missing pet").code(), ErrorCode::NotFound);
        assert_eq!(owner.expect_err("missing owner").code(), ErrorCode::NotFound);
    }
}

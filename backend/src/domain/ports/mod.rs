//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod directory_query;
mod directory_repository;
mod directory_seed_repository;

#[cfg(test)]
pub use directory_query::MockDirectoryQuery;
pub use directory_query::DirectoryQuery;
#[cfg(any(test, feature = "test-support"))]
pub use directory_query::FixtureDirectoryQuery;
#[cfg(test)]
pub use directory_repository::MockDirectoryRepository;
pub use directory_repository::{DirectoryRepository, DirectoryRepositoryError};
pub use directory_seed_repository::{
    DirectorySeedRepository, DirectorySeedRepositoryError, SeedSummary,
};

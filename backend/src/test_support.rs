//! Test utilities for the pet directory crate.
//!
//! Integration tests (in `tests/`) use these helpers to stand up a throwaway
//! SQLite database with the schema applied. Compiled only with the
//! `test-support` feature.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::domain::DirectorySeed;
use crate::domain::ports::{DirectorySeedRepository, DirectorySeedRepositoryError, SeedSummary};
use crate::outbound::persistence::{
    DbPool, DieselDirectorySeedRepository, MigrationError, PoolConfig, PoolError,
    run_pending_migrations,
};
use crate::outbound::seed_file::{SeedFileError, read_seed_file};

/// Errors raised while preparing a test database.
#[derive(Debug, thiserror::Error)]
pub enum TestDatabaseError {
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[from] std::io::Error),
    #[error("temporary path is not valid UTF-8: {0}")]
    NonUtf8Path(PathBuf),
    #[error(transparent)]
    Migration(#[from] MigrationError),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Seed(#[from] DirectorySeedRepositoryError),
    #[error(transparent)]
    SeedFile(#[from] SeedFileError),
}

/// Path of the bundled seed fixture: Jo with Rex and Whiskers, Sam with no
/// pets, and Pip the stray sparrow.
pub fn fixture_seed_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("directory-seed.json")
}

/// Parse the bundled seed fixture.
pub fn fixture_seed() -> Result<DirectorySeed, TestDatabaseError> {
    Ok(read_seed_file(&fixture_seed_path())?)
}

/// Migrated SQLite database living in a temporary directory.
///
/// The directory, and the database with it, is removed on drop.
pub struct TestDatabase {
    _dir: TempDir,
    url: String,
}

impl TestDatabase {
    /// Create an empty database with every migration applied.
    ///
    /// # Examples
    /// ```
    /// use pet_directory::test_support::TestDatabase;
    ///
    /// let db = TestDatabase::new()?;
    /// assert!(db.url().ends_with("directory.db"));
    /// # Ok::<(), pet_directory::test_support::TestDatabaseError>(())
    /// ```
    pub fn new() -> Result<Self, TestDatabaseError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("directory.db");
        let url = path
            .to_str()
            .ok_or_else(|| TestDatabaseError::NonUtf8Path(path.clone()))?
            .to_owned();
        run_pending_migrations(&url)?;
        Ok(Self { _dir: dir, url })
    }

    /// Database URL suitable for [`PoolConfig::new`].
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Build a small pool against this database.
    pub async fn pool(&self) -> Result<DbPool, TestDatabaseError> {
        let config = PoolConfig::new(&self.url)
            .with_max_size(2)
            .with_min_idle(None);
        Ok(DbPool::new(config).await?)
    }

    /// Replace the database contents with `seed`.
    pub async fn seed(&self, seed: &DirectorySeed) -> Result<SeedSummary, TestDatabaseError> {
        let repository = DieselDirectorySeedRepository::new(self.pool().await?);
        Ok(repository.replace_all(&seed.owners(), &seed.pets()).await?)
    }
}

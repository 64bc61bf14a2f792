//! Embedded schema migrations.
//!
//! Migrations under `backend/migrations` are compiled into the binary so the
//! server and the seed tool can bring a fresh database file up to date
//! without the Diesel CLI.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying migrations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// The database file could not be opened.
    #[error("failed to open database {database_url}: {message}")]
    Connect {
        database_url: String,
        message: String,
    },
    /// A migration failed to apply.
    #[error("failed to apply migrations: {message}")]
    Apply { message: String },
}

/// Apply all pending migrations and return the versions that ran.
///
/// This opens its own synchronous connection, so call it before the pool
/// starts serving requests or from a blocking task.
///
/// # Errors
///
/// Returns [`MigrationError::Connect`] when the database cannot be opened and
/// [`MigrationError::Apply`] when a migration fails.
pub fn run_pending_migrations(database_url: &str) -> Result<Vec<String>, MigrationError> {
    let mut conn =
        SqliteConnection::establish(database_url).map_err(|err| MigrationError::Connect {
            database_url: database_url.to_owned(),
            message: err.to_string(),
        })?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?;
    Ok(applied.into_iter().map(|version| version.to_string()).collect())
}

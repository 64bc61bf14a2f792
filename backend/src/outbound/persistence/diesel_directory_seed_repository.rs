//! SQLite-backed directory seeding adapter.
//!
//! This adapter implements the `DirectorySeedRepository` port. A seed run
//! clears both tables and inserts the supplied owners and pets inside one
//! transaction, so a failed run leaves the previous contents untouched.

use async_trait::async_trait;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{DirectorySeedRepository, DirectorySeedRepositoryError, SeedSummary};
use crate::domain::{Owner, Pet};

use super::models::{NewOwnerRow, NewPetRow};
use super::pool::{DbPool, PoolError};
use super::schema::{owners, pets};

/// Diesel-backed implementation of the directory seeding repository.
#[derive(Clone)]
pub struct DieselDirectorySeedRepository {
    pool: DbPool,
}

impl DieselDirectorySeedRepository {
    /// Create a new seeding repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> DirectorySeedRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            DirectorySeedRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to domain persistence errors.
///
/// Seed failures keep the database message so operators can see which
/// constraint rejected the document.
fn map_diesel_error(error: diesel::result::Error) -> DirectorySeedRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    let error_message = error.to_string();
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                error = %error_message,
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            error = %error_message,
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            DirectorySeedRepositoryError::connection(info.message().to_owned())
        }
        DieselError::DatabaseError(_, info) => {
            DirectorySeedRepositoryError::query(info.message().to_owned())
        }
        _ => DirectorySeedRepositoryError::query(error_message),
    }
}

#[async_trait]
impl DirectorySeedRepository for DieselDirectorySeedRepository {
    async fn replace_all(
        &self,
        owner_records: &[Owner],
        pet_records: &[Pet],
    ) -> Result<SeedSummary, DirectorySeedRepositoryError> {
        let owner_rows: Vec<NewOwnerRow<'_>> = owner_records.iter().map(NewOwnerRow::from).collect();
        let pet_rows: Vec<NewPetRow<'_>> = pet_records.iter().map(NewPetRow::from).collect();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let summary = conn
            .transaction(|conn| {
                async move {
                    // Pets first: they reference owners.
                    diesel::delete(pets::table).execute(conn).await?;
                    diesel::delete(owners::table).execute(conn).await?;

                    let mut summary = SeedSummary::default();
                    for row in &owner_rows {
                        summary.owners += diesel::insert_into(owners::table)
                            .values(row)
                            .execute(conn)
                            .await?;
                    }
                    for row in &pet_rows {
                        summary.pets += diesel::insert_into(pets::table)
                            .values(row)
                            .execute(conn)
                            .await?;
                    }

                    Ok::<_, diesel::result::Error>(summary)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        debug!(
            owners = summary.owners,
            pets = summary.pets,
            "directory seed applied"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for seed repository error mapping.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_map_to_connection() {
        let mapped = map_pool_error(PoolError::build("unable to open database file"));
        assert_eq!(
            mapped,
            DirectorySeedRepositoryError::connection("unable to open database file")
        );
    }

    #[rstest]
    fn rollback_keeps_diesel_message() {
        let mapped = map_diesel_error(diesel::result::Error::RollbackTransaction);
        let DirectorySeedRepositoryError::Query { message } = mapped else {
            panic!("expected query error");
        };
        assert!(!message.is_empty());
    }
}

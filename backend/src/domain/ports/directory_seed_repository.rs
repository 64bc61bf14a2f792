//! Port abstraction for loading seed documents into the record store.
use async_trait::async_trait;

use crate::domain::{Owner, Pet};

use super::define_port_error;

define_port_error! {
    /// Errors raised while writing seed data.
    pub enum DirectorySeedRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "directory seed connection failed: {message}",
        /// Insert or delete failed; the transaction was rolled back.
        Query { message: String } => "directory seed query failed: {message}",
    }
}

/// Row counts written by a seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    pub owners: usize,
    pub pets: usize,
}

#[async_trait]
pub trait DirectorySeedRepository: Send + Sync {
    /// Replace every owner and pet with the supplied records in one
    /// transaction.
    async fn replace_all(
        &self,
        owners: &[Owner],
        pets: &[Pet],
    ) -> Result<SeedSummary, DirectorySeedRepositoryError>;
}

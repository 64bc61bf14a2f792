//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::DirectoryQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub directory: Arc<dyn DirectoryQuery>,
}

impl HttpState {
    /// Construct state around a directory lookup port.
    ///
    /// # Examples
    /// ```rust,no_run
    /// use std::sync::Arc;
    ///
    /// use pet_directory::domain::DirectoryService;
    /// use pet_directory::inbound::http::state::HttpState;
    /// use pet_directory::outbound::persistence::{
    ///     DbPool, DieselDirectoryRepository, PoolConfig,
    /// };
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("app.db")).await?;
    /// let repository = Arc::new(DieselDirectoryRepository::new(pool));
    /// let state = HttpState::new(Arc::new(DirectoryService::new(repository)));
    /// # let _ = state;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(directory: Arc<dyn DirectoryQuery>) -> Self {
        Self { directory }
    }
}

//! HTTP server configuration object.

use pet_directory::outbound::persistence::DbPool;
use std::net::SocketAddr;

/// Listener address and record store handle for the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Construct a server configuration bound to `bind_addr` and answering
    /// lookups from `db_pool`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self { bind_addr, db_pool }
    }
}

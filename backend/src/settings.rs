//! Server configuration loaded via OrthoConfig.
//!
//! Values come from `DIRECTORY_*` environment variables, command-line flags,
//! or a configuration file, in OrthoConfig's usual precedence order.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 5555;
const DEFAULT_DATABASE_URL: &str = "app.db";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Configuration values for the directory server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DIRECTORY")]
pub struct DirectorySettings {
    /// Socket address to listen on.
    pub bind_addr: Option<SocketAddr>,
    /// SQLite database file (or `:memory:`).
    pub database_url: Option<String>,
    /// Human-readable logs and a `debug` default filter.
    pub debug: Option<bool>,
    /// Upper bound on pooled store connections.
    pub pool_max_size: Option<u32>,
    /// Apply embedded migrations before serving.
    pub run_migrations: Option<bool>,
}

impl DirectorySettings {
    /// Return the configured bind address, falling back to `0.0.0.0:5555`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(SocketAddr::V4(SocketAddrV4::new(
            Ipv4Addr::UNSPECIFIED,
            DEFAULT_PORT,
        )))
    }

    /// Return the configured database URL, falling back to `app.db`.
    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    /// Return the configured pool size, falling back to 10.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Whether debug output is enabled; off unless requested.
    pub fn debug(&self) -> bool {
        self.debug.unwrap_or(false)
    }

    /// Whether embedded migrations run at startup; on unless disabled.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }

    /// Default log filter used when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug() { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> DirectorySettings {
        DirectorySettings::load_from_iter([OsString::from("pet-directory")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("DIRECTORY_BIND_ADDR", None::<String>),
            ("DIRECTORY_DATABASE_URL", None::<String>),
            ("DIRECTORY_DEBUG", None::<String>),
            ("DIRECTORY_POOL_MAX_SIZE", None::<String>),
            ("DIRECTORY_RUN_MIGRATIONS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "0.0.0.0:5555".parse().expect("addr"));
        assert_eq!(settings.database_url(), "app.db");
        assert!(!settings.debug());
        assert_eq!(settings.default_log_filter(), "info");
        assert_eq!(settings.pool_max_size(), 10);
        assert!(settings.run_migrations());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("DIRECTORY_BIND_ADDR", Some("127.0.0.1:8080".to_owned())),
            ("DIRECTORY_DATABASE_URL", Some("/tmp/pets.db".to_owned())),
            ("DIRECTORY_DEBUG", Some("true".to_owned())),
            ("DIRECTORY_POOL_MAX_SIZE", Some("3".to_owned())),
            ("DIRECTORY_RUN_MIGRATIONS", Some("false".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "127.0.0.1:8080".parse().expect("addr"));
        assert_eq!(settings.database_url(), "/tmp/pets.db");
        assert!(settings.debug());
        assert_eq!(settings.default_log_filter(), "debug");
        assert_eq!(settings.pool_max_size(), 3);
        assert!(!settings.run_migrations());
    }
}

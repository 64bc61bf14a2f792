//! SQLite persistence adapters using Diesel ORM.
//!
//! This module provides concrete implementations of the directory ports
//! backed by SQLite via Diesel, with async access through `diesel-async`'s
//! `SyncConnectionWrapper` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: Repository implementations only translate between
//!   Diesel models and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are internal implementation details, never
//!   exposed to the domain layer.
//! - **Strongly typed errors**: All database errors are mapped to domain
//!   port error types.
//!
//! # Example
//!
//! ```ignore
//! use pet_directory::outbound::persistence::{DbPool, DieselDirectoryRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("app.db")).await?;
//! let repo = DieselDirectoryRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_directory_repository;
mod diesel_directory_seed_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_directory_repository::DieselDirectoryRepository;
pub use diesel_directory_seed_repository::DieselDirectorySeedRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbConnection, DbPool, PoolConfig, PoolError};

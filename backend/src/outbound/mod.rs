//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: SQLite-backed repositories using Diesel ORM
//! - **seed_file**: seed documents read from disk through `cap_std`
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod persistence;
pub mod seed_file;

//! HTTP inbound adapter serving the directory pages and health probes.

pub mod directory;
pub mod error;
pub mod health;
pub mod pages;
pub mod state;

pub use error::ApiResult;

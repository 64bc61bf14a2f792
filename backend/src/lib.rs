//! Pet directory library modules.
//!
//! The domain layer holds records, ports, and the lookup service; inbound
//! adapters render HTML over actix-web; outbound adapters read SQLite via
//! Diesel.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(feature = "test-support")]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;

//! Domain primitives, services, and ports.
//!
//! Purpose: define the pet and owner records, the lookup service, and the
//! ports through which inbound and outbound adapters talk to it. Nothing in
//! here depends on actix or Diesel.
//!
//! Public surface:
//! - `Pet`, `Owner` and their integer ids.
//! - `PetProfile`, `OwnerProfile`: lookups with relationships resolved.
//! - `DirectoryService`: the lookup service behind `ports::DirectoryQuery`.
//! - `DirectorySeed`: validated seed documents for the store.
//! - `Error`, `ErrorCode`: transport agnostic failures.

pub mod directory_seed;
pub mod directory_service;
pub mod error;
pub mod owner;
pub mod pet;
pub mod ports;
pub mod profile;
pub mod trace_id;

pub use self::directory_seed::{DirectorySeed, DirectorySeedError, SeedOwner, SeedPet};
pub use self::directory_service::DirectoryService;
pub use self::error::{Error, ErrorCode};
pub use self::owner::{Owner, OwnerId};
pub use self::pet::{Pet, PetId};
pub use self::profile::{OwnerProfile, PetProfile};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

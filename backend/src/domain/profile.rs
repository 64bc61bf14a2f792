//! Lookup results with their relationships resolved.
//!
//! The repository resolves pet → owner and owner → pets explicitly, so the
//! presentation layer never traverses relations on its own.

use serde::Serialize;

use super::{Owner, Pet};

/// A pet together with its owner, if it has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetProfile {
    pub pet: Pet,
    pub owner: Option<Owner>,
}

impl PetProfile {
    /// Pair a pet with its resolved owner.
    pub fn new(pet: Pet, owner: Option<Owner>) -> Self {
        Self { pet, owner }
    }

    /// Owner name when the pet has an owner.
    pub fn owner_name(&self) -> Option<&str> {
        self.owner.as_ref().map(|owner| owner.name.as_str())
    }
}

/// An owner together with every pet that references it.
///
/// ## Invariants
/// - `pets` holds exactly the pets whose `owner_id` equals `owner.id`.
/// - `pets` is ordered by ascending pet id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerProfile {
    pub owner: Owner,
    pub pets: Vec<Pet>,
}

impl OwnerProfile {
    /// Pair an owner with its pets, sorting them by id.
    pub fn new(owner: Owner, mut pets: Vec<Pet>) -> Self {
        pets.sort_by_key(|pet| pet.id);
        Self { owner, pets }
    }

    /// Whether the owner has no pets.
    pub fn has_no_pets(&self) -> bool {
        self.pets.is_empty()
    }
}

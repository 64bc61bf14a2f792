//! Pet records.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::OwnerId;

/// Integer primary key of a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(i32);

impl PetId {
    /// Wrap a raw store identifier.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw identifier as stored.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for PetId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pet listed in the directory.
///
/// `owner_id` is `None` for strays. When set it always names an existing
/// owner; the store enforces this with a foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub species: String,
    pub owner_id: Option<OwnerId>,
}

impl Pet {
    /// Build a pet from its parts.
    ///
    /// # Examples
    /// ```
    /// use pet_directory::domain::{OwnerId, Pet, PetId};
    ///
    /// let rex = Pet::new(PetId::new(1), "Rex", "Dog", Some(OwnerId::new(1)));
    /// assert!(rex.has_owner());
    /// ```
    pub fn new(
        id: PetId,
        name: impl Into<String>,
        species: impl Into<String>,
        owner_id: Option<OwnerId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            species: species.into(),
            owner_id,
        }
    }

    /// Whether the pet references an owner.
    pub fn has_owner(&self) -> bool {
        self.owner_id.is_some()
    }
}

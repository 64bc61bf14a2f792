//! Seed documents used to populate the directory store.
//!
//! A seed lists owners with their pets plus any strays. It is parsed from
//! JSON and validated before anything is written, so a bad document never
//! leaves the store half-populated.
//!
//! ```json
//! {
//!   "owners": [{ "id": 1, "name": "Jo", "pets": [{ "id": 1, "name": "Rex", "species": "Dog" }] }],
//!   "strays": [{ "id": 3, "name": "Pip", "species": "Sparrow" }]
//! }
//! ```

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use super::{Owner, OwnerId, Pet, PetId};

/// Errors raised while reading or validating a seed document.
#[derive(Debug, Error)]
pub enum DirectorySeedError {
    /// The document is not valid seed JSON.
    #[error("seed document is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two owners share an identifier.
    #[error("owner id {id} appears more than once")]
    DuplicateOwnerId { id: i32 },
    /// Two pets share an identifier.
    #[error("pet id {id} appears more than once")]
    DuplicatePetId { id: i32 },
    /// A record has a blank name or species.
    #[error("{record} {id} has an empty {field}")]
    EmptyField {
        record: &'static str,
        id: i32,
        field: &'static str,
    },
}

/// Pet entry inside a seed document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedPet {
    pub id: i32,
    pub name: String,
    pub species: String,
}

/// Owner entry inside a seed document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedOwner {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub pets: Vec<SeedPet>,
}

/// Parsed seed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectorySeed {
    #[serde(default)]
    pub owners: Vec<SeedOwner>,
    #[serde(default)]
    pub strays: Vec<SeedPet>,
}

impl DirectorySeed {
    /// Parse and validate a JSON seed document.
    ///
    /// # Examples
    /// ```
    /// use pet_directory::domain::DirectorySeed;
    ///
    /// let seed = DirectorySeed::from_json(
    ///     r#"{"owners":[{"id":1,"name":"Jo","pets":[{"id":1,"name":"Rex","species":"Dog"}]}]}"#,
    /// )?;
    /// assert_eq!(seed.pets().len(), 1);
    /// # Ok::<(), pet_directory::domain::DirectorySeedError>(())
    /// ```
    pub fn from_json(raw: &str) -> Result<Self, DirectorySeedError> {
        let seed: Self = serde_json::from_str(raw)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Check identifier uniqueness and that every name is non-blank.
    pub fn validate(&self) -> Result<(), DirectorySeedError> {
        let mut owner_ids = HashSet::new();
        for owner in &self.owners {
            if !owner_ids.insert(owner.id) {
                return Err(DirectorySeedError::DuplicateOwnerId { id: owner.id });
            }
            require_text("owner", owner.id, "name", &owner.name)?;
        }

        let mut pet_ids = HashSet::new();
        for pet in self.owned_pets().map(|(_, pet)| pet).chain(&self.strays) {
            if !pet_ids.insert(pet.id) {
                return Err(DirectorySeedError::DuplicatePetId { id: pet.id });
            }
            require_text("pet", pet.id, "name", &pet.name)?;
            require_text("pet", pet.id, "species", &pet.species)?;
        }
        Ok(())
    }

    /// Owner records described by the document.
    pub fn owners(&self) -> Vec<Owner> {
        self.owners
            .iter()
            .map(|owner| Owner::new(OwnerId::new(owner.id), owner.name.clone()))
            .collect()
    }

    /// Pet records described by the document, strays included.
    pub fn pets(&self) -> Vec<Pet> {
        let owned = self
            .owned_pets()
            .map(|(owner_id, pet)| to_pet(pet, Some(OwnerId::new(owner_id))));
        let strays = self.strays.iter().map(|pet| to_pet(pet, None));
        owned.chain(strays).collect()
    }

    fn owned_pets(&self) -> impl Iterator<Item = (i32, &SeedPet)> {
        self.owners
            .iter()
            .flat_map(|owner| owner.pets.iter().map(move |pet| (owner.id, pet)))
    }
}

fn to_pet(pet: &SeedPet, owner_id: Option<OwnerId>) -> Pet {
    Pet::new(
        PetId::new(pet.id),
        pet.name.clone(),
        pet.species.clone(),
        owner_id,
    )
}

fn require_text(
    record: &'static str,
    id: i32,
    field: &'static str,
    value: &str,
) -> Result<(), DirectorySeedError> {
    if value.trim().is_empty() {
        return Err(DirectorySeedError::EmptyField { record, id, field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SAMPLE: &str = r#"{
        "owners": [
            { "id": 1, "name": "Jo", "pets": [
                { "id": 1, "name": "Rex", "species": "Dog" },
                { "id": 2, "name": "Whiskers", "species": "Cat" }
            ] },
            { "id": 2, "name": "Sam" }
        ],
        "strays": [{ "id": 3, "name": "Pip", "species": "Sparrow" }]
    }"#;

    #[rstest]
    fn parses_owners_pets_and_strays() {
        let seed = DirectorySeed::from_json(SAMPLE).expect("valid seed");

        assert_eq!(seed.owners().len(), 2);
        let pets = seed.pets();
        assert_eq!(pets.len(), 3);
        assert_eq!(pets[0].owner_id, Some(OwnerId::new(1)));
        assert_eq!(pets[2].name, "Pip");
        assert!(!pets[2].has_owner());
    }

    #[rstest]
    #[case(
        r#"{"owners":[{"id":1,"name":"Jo"},{"id":1,"name":"Al"}]}"#,
        "owner id 1 appears more than once"
    )]
    #[case(
        r#"{"owners":[{"id":1,"name":"Jo","pets":[{"id":4,"name":"Rex","species":"Dog"}]}],
            "strays":[{"id":4,"name":"Pip","species":"Sparrow"}]}"#,
        "pet id 4 appears more than once"
    )]
    #[case(r#"{"owners":[{"id":2,"name":"  "}]}"#, "owner 2 has an empty name")]
    #[case(
        r#"{"strays":[{"id":5,"name":"Pip","species":""}]}"#,
        "pet 5 has an empty species"
    )]
    fn rejects_invalid_documents(#[case] raw: &str, #[case] expected: &str) {
        let err = DirectorySeed::from_json(raw).expect_err("seed should be rejected");
        assert_eq!(err.to_string(), expected);
    }

    #[rstest]
    fn rejects_unknown_fields() {
        let err = DirectorySeed::from_json(r#"{"owners":[],"cats":[]}"#)
            .expect_err("unknown field should fail");
        assert!(matches!(err, DirectorySeedError::Parse(_)));
    }

    #[rstest]
    fn empty_document_is_valid() {
        let seed = DirectorySeed::from_json("{}").expect("empty seed");
        assert!(seed.owners().is_empty());
        assert!(seed.pets().is_empty());
    }
}

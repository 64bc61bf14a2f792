//! Internal Diesel row types.
//!
//! Rows never leave the persistence module; repositories convert them into
//! domain records before returning.

use diesel::prelude::*;

use crate::domain::{Owner, OwnerId, Pet, PetId};

use super::schema::{owners, pets};

/// Queryable row for the `owners` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = owners)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct OwnerRow {
    pub id: i32,
    pub name: String,
}

/// Insertable struct for creating owner records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = owners)]
pub(crate) struct NewOwnerRow<'a> {
    pub id: i32,
    pub name: &'a str,
}

/// Queryable row for the `pets` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = pets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct PetRow {
    pub id: i32,
    pub name: String,
    pub species: String,
    pub owner_id: Option<i32>,
}

/// Insertable struct for creating pet records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = pets)]
pub(crate) struct NewPetRow<'a> {
    pub id: i32,
    pub name: &'a str,
    pub species: &'a str,
    pub owner_id: Option<i32>,
}

impl From<OwnerRow> for Owner {
    fn from(row: OwnerRow) -> Self {
        Self::new(OwnerId::new(row.id), row.name)
    }
}

impl From<PetRow> for Pet {
    fn from(row: PetRow) -> Self {
        Self::new(
            PetId::new(row.id),
            row.name,
            row.species,
            row.owner_id.map(OwnerId::new),
        )
    }
}

impl<'a> From<&'a Owner> for NewOwnerRow<'a> {
    fn from(owner: &'a Owner) -> Self {
        Self {
            id: owner.id.get(),
            name: owner.name.as_str(),
        }
    }
}

impl<'a> From<&'a Pet> for NewPetRow<'a> {
    fn from(pet: &'a Pet) -> Self {
        Self {
            id: pet.id.get(),
            name: pet.name.as_str(),
            species: pet.species.as_str(),
            owner_id: pet.owner_id.map(OwnerId::get),
        }
    }
}

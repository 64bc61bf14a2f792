//! Owner records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer primary key of an owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(i32);

impl OwnerId {
    /// Wrap a raw store identifier.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw identifier as stored.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for OwnerId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person who may own any number of pets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: OwnerId,
    pub name: String,
}

impl Owner {
    /// Build an owner from its parts.
    pub fn new(id: OwnerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the embedded migrations under
//! `backend/migrations` exactly. When a migration changes a table, update
//! this file by hand or regenerate it with `diesel print-schema`.

diesel::table! {
    /// People who own pets.
    owners (id) {
        /// Primary key.
        id -> Integer,
        /// Display name shown on the owner page.
        name -> Text,
    }
}

diesel::table! {
    /// Pets, each optionally belonging to one owner.
    pets (id) {
        /// Primary key.
        id -> Integer,
        /// Display name shown on the pet page.
        name -> Text,
        /// Free-form species label, for example "Dog".
        species -> Text,
        /// Foreign key into `owners`; `NULL` for strays.
        owner_id -> Nullable<Integer>,
    }
}

diesel::joinable!(pets -> owners (owner_id));

diesel::allow_tables_to_appear_in_same_query!(owners, pets);

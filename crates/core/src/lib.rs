//! Domain rules for the pet catalog.
//!
//! Pure logic only: identifiers, the `Pet` enumerations, field
//! normalization, validation and merge-on-update. No database or HTTP
//! dependencies live here, so the store, the API and the client can all
//! share the same rules.

pub mod error;
pub mod pet;
pub mod types;

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async store
//! operations that accept `&DbPool` as the first argument.

pub mod pet_repo;

pub use pet_repo::PetRepo;

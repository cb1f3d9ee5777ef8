//! Client-side filtering over an already-fetched pet list.

use petcatalog_core::pet::{Gender, PetType};

use crate::models::Pet;

/// Filter values of the pets page. Empty values match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetFilter {
    /// Case-insensitive substring matched against name or description.
    pub search: String,
    pub pet_type: Option<PetType>,
    pub gender: Option<Gender>,
}

impl PetFilter {
    pub fn matches(&self, pet: &Pet) -> bool {
        let matches_type = self.pet_type.map_or(true, |t| pet.pet_type == t);
        let matches_gender = self.gender.map_or(true, |g| pet.gender == g);

        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || pet.name.to_lowercase().contains(&needle)
            || pet.description.to_lowercase().contains(&needle);

        matches_type && matches_gender && matches_search
    }

    /// Pets that pass the filter, in their original order.
    pub fn apply<'a>(&self, pets: &'a [Pet]) -> Vec<&'a Pet> {
        pets.iter().filter(|pet| self.matches(pet)).collect()
    }
}

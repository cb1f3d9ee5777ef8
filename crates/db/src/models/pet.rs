//! Pet entity model.

use chrono::NaiveDate;
use petcatalog_core::pet::{PetFields, BIRTHDATE_FORMAT};
use petcatalog_core::types::{PetId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `pets` table, serialized as the flat API record.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: String,
    pub birthdate: NaiveDate,
    pub gender: String,
    pub description: String,
    pub photo: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The stored record as a full field set, used as the base of a merge.
impl From<&Pet> for PetFields {
    fn from(pet: &Pet) -> Self {
        PetFields {
            name: Some(pet.name.clone()),
            pet_type: Some(pet.pet_type.clone()),
            birthdate: Some(pet.birthdate.format(BIRTHDATE_FORMAT).to_string()),
            gender: Some(pet.gender.clone()),
            description: Some(pet.description.clone()),
            photo: Some(pet.photo.clone()),
        }
    }
}

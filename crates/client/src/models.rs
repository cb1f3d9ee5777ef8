use chrono::NaiveDate;
use petcatalog_core::pet::{Gender, PetType};
use petcatalog_core::types::{PetId, Timestamp};
use serde::{Deserialize, Serialize};

/// A pet record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: PetType,
    pub birthdate: NaiveDate,
    pub gender: Gender,
    pub description: String,
    pub photo: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of a plain `{ "message": ... }` response (deletes and errors).
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

//! Repository for the `pets` table.
//!
//! Validation happens here, on the way in: `insert` validates the submitted
//! fields, `update_by_id` merges the delta onto the stored record and
//! validates the merged result. Rows that reach SQL are always complete.

use chrono::Utc;
use petcatalog_core::error::CoreError;
use petcatalog_core::pet::{PetData, PetFields};
use petcatalog_core::types::{new_pet_id, PetId};

use crate::error::StoreError;
use crate::models::pet::Pet;
use crate::DbPool;

/// Column list for `pets` queries.
const COLUMNS: &str = "\
    id, name, pet_type, birthdate, gender, description, photo, \
    created_at, updated_at";

/// Provides data access for pet records.
pub struct PetRepo;

impl PetRepo {
    /// List every pet in insertion order.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<Pet>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM pets ORDER BY rowid");
        let pets = sqlx::query_as::<_, Pet>(&query).fetch_all(pool).await?;
        Ok(pets)
    }

    /// Find a pet by id, `None` if absent.
    pub async fn find_by_id(pool: &DbPool, id: PetId) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE id = ?");
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a pet by id, failing with `NotFound` if absent.
    pub async fn get_by_id(pool: &DbPool, id: PetId) -> Result<Pet, StoreError> {
        Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| CoreError::pet_not_found(id).into())
    }

    /// Validate and persist a new pet.
    ///
    /// The id and both timestamps are assigned here; nothing is written when
    /// validation fails.
    pub async fn insert(pool: &DbPool, fields: &PetFields) -> Result<Pet, StoreError> {
        let data = fields.validate()?;
        let now = Utc::now();

        let query = format!(
            "INSERT INTO pets \
                 (id, name, pet_type, birthdate, gender, description, photo, \
                  created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        let pet = bind_data(sqlx::query_as::<_, Pet>(&query).bind(new_pet_id()), &data)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await?;

        tracing::debug!(pet_id = %pet.id, "Pet row inserted");
        Ok(pet)
    }

    /// Merge `delta` onto the stored pet, re-validate, and persist.
    ///
    /// Fields absent from `delta` keep their stored values. Concurrent
    /// updates to the same id are last-write-wins.
    pub async fn update_by_id(
        pool: &DbPool,
        id: PetId,
        delta: PetFields,
    ) -> Result<Pet, StoreError> {
        let existing = Self::get_by_id(pool, id).await?;
        let data = PetFields::from(&existing).overlay(delta).validate()?;

        let query = format!(
            "UPDATE pets SET \
                 name = ?, pet_type = ?, birthdate = ?, gender = ?, \
                 description = ?, photo = ?, updated_at = ? \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        let updated = bind_data(sqlx::query_as::<_, Pet>(&query), &data)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(pool)
            .await?;

        // The row can vanish between the read and the write.
        updated.ok_or_else(|| CoreError::pet_not_found(id).into())
    }

    /// Delete a pet, failing with `NotFound` if no row matched.
    pub async fn delete_by_id(pool: &DbPool, id: PetId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM pets WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::pet_not_found(id).into());
        }
        Ok(())
    }
}

type PetQuery<'q> = sqlx::query::QueryAs<'q, sqlx::Sqlite, Pet, sqlx::sqlite::SqliteArguments<'q>>;

/// Bind the six body columns in table order.
fn bind_data<'q>(query: PetQuery<'q>, data: &PetData) -> PetQuery<'q> {
    query
        .bind(data.name.clone())
        .bind(data.pet_type.as_str())
        .bind(data.birthdate)
        .bind(data.gender.as_str())
        .bind(data.description.clone())
        .bind(data.photo.clone())
}

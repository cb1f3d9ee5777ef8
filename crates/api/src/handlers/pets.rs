//! Handlers for the pet resource.
//!
//! Each handler parses the request, calls one store operation and maps the
//! outcome: NotFound to 404, validation failures to 400, anything else to
//! 500 (see [`AppError`]).

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use petcatalog_core::error::CoreError;
use petcatalog_core::pet::PetFields;
use petcatalog_core::types::{parse_pet_id, PetId};
use petcatalog_db::repositories::PetRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Resolve a path id. A malformed id was never issued, so it is a 404.
fn pet_id(raw: &str) -> AppResult<PetId> {
    parse_pet_id(raw).ok_or_else(|| AppError::Core(CoreError::pet_not_found(raw)))
}

/// GET /api/pets
pub async fn list_pets(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pets = PetRepo::list_all(&state.pool).await?;
    Ok(Json(pets))
}

/// GET /api/pets/{id}
pub async fn get_pet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let pet = PetRepo::get_by_id(&state.pool, pet_id(&id)?).await?;
    Ok(Json(pet))
}

/// POST /api/pets
///
/// Create a pet from the submitted fields. Returns 201 with the stored record.
pub async fn create_pet(
    State(state): State<AppState>,
    payload: Result<Json<PetFields>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(fields) = payload?;
    let pet = PetRepo::insert(&state.pool, &fields).await?;

    tracing::info!(
        pet_id = %pet.id,
        name = %pet.name,
        pet_type = %pet.pet_type,
        "Pet created",
    );

    Ok((StatusCode::CREATED, Json(pet)))
}

/// PUT /api/pets/{id}
///
/// Merge the submitted fields onto the stored pet. Omitted fields keep their
/// values; the merged record must still be valid.
pub async fn update_pet(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<PetFields>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = pet_id(&id)?;
    let Json(delta) = payload?;
    let pet = PetRepo::update_by_id(&state.pool, id, delta).await?;

    tracing::info!(pet_id = %pet.id, "Pet updated");

    Ok(Json(pet))
}

/// DELETE /api/pets/{id}
pub async fn delete_pet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = pet_id(&id)?;
    PetRepo::delete_by_id(&state.pool, id).await?;

    tracing::info!(pet_id = %id, "Pet deleted");

    Ok(Json(MessageResponse::new("Pet deleted successfully")))
}

use axum::routing::get;
use axum::Router;

use crate::handlers::pets;
use crate::state::AppState;

/// Pet resource routes.
///
/// ```text
/// GET    /api/pets        -> list_pets
/// POST   /api/pets        -> create_pet
/// GET    /api/pets/{id}   -> get_pet
/// PUT    /api/pets/{id}   -> update_pet
/// DELETE /api/pets/{id}   -> delete_pet
/// ```
///
/// The collection also answers with a trailing slash (`/api/pets/`).
pub fn router() -> Router<AppState> {
    let collection = get(pets::list_pets).post(pets::create_pet);

    Router::new()
        .route("/api/pets", collection.clone())
        .route("/api/pets/", collection)
        .route(
            "/api/pets/{id}",
            get(pets::get_pet)
                .put(pets::update_pet)
                .delete(pets::delete_pet),
        )
}

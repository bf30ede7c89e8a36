//! Handlers for the `/animals` and `/animal` resources.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shelter_core::animal::AnimalPayload;
use shelter_core::types::DbId;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::{AnimalEnvelope, AnimalListResponse, MessageResponse};
use crate::state::AppState;

/// GET /animals
pub async fn list(State(state): State<AppState>) -> AppResult<Json<AnimalListResponse>> {
    let animals = state.animals.list().await?;
    Ok(Json(AnimalListResponse { animals }))
}

/// POST /animal
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<AnimalPayload>,
) -> AppResult<(StatusCode, Json<AnimalEnvelope>)> {
    let animal = state.animals.create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(AnimalEnvelope {
            message: Some("Animal added successfully!"),
            animal,
        }),
    ))
}

/// GET /animal/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<AnimalEnvelope>> {
    let animal = state.animals.retrieve(id).await?;
    Ok(Json(AnimalEnvelope {
        message: None,
        animal,
    }))
}

/// PUT /animal/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<AnimalPayload>,
) -> AppResult<Json<AnimalEnvelope>> {
    let animal = state.animals.update(id, input).await?;
    Ok(Json(AnimalEnvelope {
        message: Some("Animal updated successfully!"),
        animal,
    }))
}

/// DELETE /animal/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    state.animals.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Animal deleted successfully!",
    }))
}

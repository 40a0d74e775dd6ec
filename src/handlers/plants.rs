//! Plant handlers: list, create, read, update, delete, most-expensive.

use crate::error::AppError;
use crate::models::{NewPlant, PlantPatch};
use crate::response::Deleted;
use crate::service::PlantService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a request body that must be a JSON object. Arrays and scalars are a bad request.
fn body_from_object<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    match value {
        Value::Object(map) => serde_json::from_value(Value::Object(map))
            .map_err(|e| AppError::Validation(e.to_string())),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = PlantService::list(&state.pool).await?;
    Ok((StatusCode::OK, Json(rows)))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let body: NewPlant = body_from_object(body)?;
    let row = PlantService::create(&state.pool, &body).await?;
    tracing::info!(id = row.id, "plant created");
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let row = PlantService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::plant_not_found(id))?;
    Ok((StatusCode::OK, Json(row)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let patch: PlantPatch = body_from_object(patch)?;
    let row = PlantService::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| AppError::plant_not_found(id))?;
    Ok((StatusCode::OK, Json(row)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !PlantService::delete(&state.pool, id).await? {
        return Err(AppError::plant_not_found(id));
    }
    tracing::info!(id, "plant deleted");
    Ok((StatusCode::OK, Json(Deleted::plant(id))))
}

pub async fn most_expensive(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let row = PlantService::most_expensive(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("no priced plants".into()))?;
    Ok((StatusCode::OK, Json(row)))
}

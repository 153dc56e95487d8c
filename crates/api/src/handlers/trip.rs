//! Handlers for the `/trips` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tripgenie_core::error::CoreError;
use tripgenie_core::types::DbId;
use tripgenie_db::models::trip::{CreateTrip, Trip, UpdateTrip};
use tripgenie_db::repositories::TripRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_input;
use crate::query::PaginationParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Trip", id })
}

/// POST /api/v1/trips
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTrip>,
) -> AppResult<(StatusCode, Json<Trip>)> {
    validate_input(&input)?;
    let trip = TripRepo::create(&state.pool, &input).await?;
    tracing::info!(trip_id = trip.id, "Trip created");
    Ok((StatusCode::CREATED, Json(trip)))
}

/// GET /api/v1/trips
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Trip>>> {
    let (limit, offset) = params.resolve();
    let trips = TripRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(trips))
}

/// GET /api/v1/trips/{trip_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Trip>> {
    let trip = TripRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(trip))
}

/// PUT /api/v1/trips/{trip_id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTrip>,
) -> AppResult<Json<Trip>> {
    validate_input(&input)?;
    let trip = TripRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(trip))
}

/// DELETE /api/v1/trips/{trip_id}
///
/// Destinations of the trip are removed with it.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if TripRepo::delete(&state.pool, id).await? {
        tracing::info!(trip_id = id, "Trip deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

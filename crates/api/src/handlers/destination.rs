//! Handlers for the `/destinations` resource.
//!
//! Destinations are nested under trips:
//! `/trips/{trip_id}/destinations[/{id}]`
//!
//! AI generation:
//! `/trips/{trip_id}/destinations/ai-generate`

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tripgenie_core::error::CoreError;
use tripgenie_core::types::DbId;
use tripgenie_db::models::destination::{CreateDestination, Destination, UpdateDestination};
use tripgenie_db::repositories::{DestinationRepo, TripRepo};

use crate::engine::generation::{generate_destinations, GenerateDestinationsRequest};
use crate::error::{AppError, AppResult};
use crate::handlers::validate_input;
use crate::query::PaginationParams;
use crate::state::AppState;

/// 404 unless the trip exists.
async fn ensure_trip_exists(state: &AppState, trip_id: DbId) -> AppResult<()> {
    TripRepo::find_by_id(&state.pool, trip_id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Trip",
            id: trip_id,
        }))
}

/// Load a destination, treating one that belongs to another trip as missing.
async fn find_scoped(state: &AppState, trip_id: DbId, id: DbId) -> AppResult<Destination> {
    DestinationRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|d| d.trip_id == trip_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Destination",
            id,
        }))
}

/// POST /api/v1/trips/{trip_id}/destinations
///
/// Overrides `input.trip_id` with the value from the URL path to ensure
/// the destination is created under the correct trip.
pub async fn create(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Json(mut input): Json<CreateDestination>,
) -> AppResult<(StatusCode, Json<Destination>)> {
    validate_input(&input)?;
    ensure_trip_exists(&state, trip_id).await?;
    input.trip_id = trip_id;
    let destination = DestinationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(destination)))
}

/// GET /api/v1/trips/{trip_id}/destinations
pub async fn list_by_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Destination>>> {
    ensure_trip_exists(&state, trip_id).await?;
    let (limit, offset) = params.resolve();
    let destinations = DestinationRepo::list_by_trip(&state.pool, trip_id, limit, offset).await?;
    Ok(Json(destinations))
}

/// GET /api/v1/trips/{trip_id}/destinations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((trip_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Destination>> {
    let destination = find_scoped(&state, trip_id, id).await?;
    Ok(Json(destination))
}

/// PUT /api/v1/trips/{trip_id}/destinations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((trip_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateDestination>,
) -> AppResult<Json<Destination>> {
    validate_input(&input)?;
    find_scoped(&state, trip_id, id).await?;
    let destination = DestinationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Destination",
            id,
        }))?;
    Ok(Json(destination))
}

/// DELETE /api/v1/trips/{trip_id}/destinations/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((trip_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    find_scoped(&state, trip_id, id).await?;
    if DestinationRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Destination",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// AI generation
// ---------------------------------------------------------------------------

/// POST /api/v1/trips/{trip_id}/destinations/ai-generate
///
/// Asks the upstream model for suggestions and persists one destination per
/// suggestion. 404 if the trip is missing (checked before the upstream
/// call), 502 if the upstream call or its payload fails. The body may be
/// omitted entirely.
pub async fn ai_generate(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    request: Option<Json<GenerateDestinationsRequest>>,
) -> AppResult<(StatusCode, Json<Vec<Destination>>)> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let created = generate_destinations(
        &state.pool,
        state.generator.as_ref(),
        &state.pool,
        trip_id,
        &request,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

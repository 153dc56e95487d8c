//! Route definitions for the `/trips` resource.
//!
//! Also nests destination routes under `/trips/{trip_id}/destinations`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{destination, trip};
use crate::state::AppState;

/// Routes mounted at `/trips`.
///
/// ```text
/// GET    /                                      -> list
/// POST   /                                      -> create
/// GET    /{trip_id}                             -> get_by_id
/// PUT    /{trip_id}                             -> update
/// DELETE /{trip_id}                             -> delete
///
/// GET    /{trip_id}/destinations                -> list_by_trip
/// POST   /{trip_id}/destinations                -> create
/// POST   /{trip_id}/destinations/ai-generate    -> ai_generate
/// GET    /{trip_id}/destinations/{id}           -> get_by_id
/// PUT    /{trip_id}/destinations/{id}           -> update
/// DELETE /{trip_id}/destinations/{id}           -> delete
/// ```
pub fn router() -> Router<AppState> {
    let destination_routes = Router::new()
        .route(
            "/",
            get(destination::list_by_trip).post(destination::create),
        )
        .route("/ai-generate", post(destination::ai_generate))
        .route(
            "/{id}",
            get(destination::get_by_id)
                .put(destination::update)
                .delete(destination::delete),
        );

    Router::new()
        .route("/", get(trip::list).post(trip::create))
        .route(
            "/{trip_id}",
            get(trip::get_by_id).put(trip::update).delete(trip::delete),
        )
        .nest("/{trip_id}/destinations", destination_routes)
}

pub mod health;
pub mod trip;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /trips                                           list, create
/// /trips/{trip_id}                                 get, update, delete
///
/// /trips/{trip_id}/destinations                    list, create
/// /trips/{trip_id}/destinations/{id}               get, update, delete
/// /trips/{trip_id}/destinations/ai-generate        generate via upstream model (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/trips", trip::router())
}

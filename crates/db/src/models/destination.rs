//! Destination entity model and DTOs.
//!
//! Destinations always belong to exactly one trip and are removed with it
//! (`ON DELETE CASCADE`). Coordinates are independently optional and dates
//! carry no ordering constraint.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripgenie_core::types::{Date, DbId, Timestamp};
use validator::Validate;

/// A destination row from the `destinations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Destination {
    pub id: DbId,
    pub trip_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub arrival_date: Option<Date>,
    pub departure_date: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new destination.
///
/// `trip_id` is overwritten from the URL path by the handler, so clients
/// may omit it.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDestination {
    #[serde(default)]
    pub trip_id: DbId,
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(max = 80))]
    pub country: Option<String>,
    #[validate(length(max = 80))]
    pub city: Option<String>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub arrival_date: Option<Date>,
    pub departure_date: Option<Date>,
}

/// DTO for updating an existing destination. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDestination {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 80))]
    pub country: Option<String>,
    #[validate(length(max = 80))]
    pub city: Option<String>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub arrival_date: Option<Date>,
    pub departure_date: Option<Date>,
}

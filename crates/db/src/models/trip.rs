//! Trip entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripgenie_core::types::{Date, DbId, Timestamp};
use validator::Validate;

/// A trip row from the `trips` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Trip {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    /// Budget in USD.
    pub budget: Option<f64>,
    pub season: Option<String>,
    /// Comma-separated interest tags, e.g. `"beach,food,history"`.
    pub interests: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new trip.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTrip {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub budget: Option<f64>,
    #[validate(length(max = 50))]
    pub season: Option<String>,
    #[validate(length(max = 255))]
    pub interests: Option<String>,
}

/// DTO for updating an existing trip. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTrip {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub budget: Option<f64>,
    #[validate(length(max = 50))]
    pub season: Option<String>,
    #[validate(length(max = 255))]
    pub interests: Option<String>,
}

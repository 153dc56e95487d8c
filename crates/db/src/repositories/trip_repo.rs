//! Repository for the `trips` table.

use sqlx::PgPool;
use tripgenie_core::types::DbId;

use crate::models::trip::{CreateTrip, Trip, UpdateTrip};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, start_date, end_date, budget, season, interests, \
     created_at, updated_at";

/// Provides CRUD operations for trips.
pub struct TripRepo;

impl TripRepo {
    /// Insert a new trip, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTrip) -> Result<Trip, sqlx::Error> {
        let query = format!(
            "INSERT INTO trips (name, description, start_date, end_date, budget, season, interests)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.budget)
            .bind(&input.season)
            .bind(&input.interests)
            .fetch_one(pool)
            .await
    }

    /// Find a trip by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trips WHERE id = $1");
        sqlx::query_as::<_, Trip>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List trips, most recently created first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Trip>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trips ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a trip. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTrip,
    ) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!(
            "UPDATE trips SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                start_date = COALESCE($4, start_date),
                end_date = COALESCE($5, end_date),
                budget = COALESCE($6, budget),
                season = COALESCE($7, season),
                interests = COALESCE($8, interests),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.budget)
            .bind(&input.season)
            .bind(&input.interests)
            .fetch_optional(pool)
            .await
    }

    /// Delete a trip by ID, cascading to its destinations. Returns `true`
    /// if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trips WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `destinations` table.

use sqlx::PgPool;
use tripgenie_core::materialize::DestinationDraft;
use tripgenie_core::types::DbId;

use crate::models::destination::{CreateDestination, Destination, UpdateDestination};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, trip_id, name, description, country, city, address, \
     latitude, longitude, arrival_date, departure_date, created_at, updated_at";

/// Provides CRUD operations for destinations.
pub struct DestinationRepo;

impl DestinationRepo {
    /// Insert a new destination, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDestination,
    ) -> Result<Destination, sqlx::Error> {
        let query = format!(
            "INSERT INTO destinations
                (trip_id, name, description, country, city, address,
                 latitude, longitude, arrival_date, departure_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Destination>(&query)
            .bind(input.trip_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.country)
            .bind(&input.city)
            .bind(&input.address)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(input.arrival_date)
            .bind(input.departure_date)
            .fetch_one(pool)
            .await
    }

    /// Insert one destination per draft inside a single transaction.
    ///
    /// Either every draft is committed or none is. After commit the rows are
    /// reloaded so server-assigned fields are populated; the result keeps the
    /// order of `drafts`.
    pub async fn create_batch(
        pool: &PgPool,
        trip_id: DbId,
        drafts: &[DestinationDraft],
    ) -> Result<Vec<Destination>, sqlx::Error> {
        if drafts.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = pool.begin().await?;
        let mut ids = Vec::with_capacity(drafts.len());

        for draft in drafts {
            let (id,): (DbId,) = sqlx::query_as(
                "INSERT INTO destinations (trip_id, name, description, country, city)
                 VALUES ($1, $2, $3, $4, $5)
                 RETURNING id",
            )
            .bind(trip_id)
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(&draft.country)
            .bind(&draft.city)
            .fetch_one(&mut *tx)
            .await?;
            ids.push(id);
        }

        tx.commit().await?;

        // BIGSERIAL ids are handed out in insertion order within the
        // transaction, so ordering by id restores the draft order.
        let query = format!("SELECT {COLUMNS} FROM destinations WHERE id = ANY($1) ORDER BY id");
        let rows = sqlx::query_as::<_, Destination>(&query)
            .bind(&ids)
            .fetch_all(pool)
            .await?;
        ensure_fully_reloaded(rows, ids.len())
    }

    /// Find a destination by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Destination>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM destinations WHERE id = $1");
        sqlx::query_as::<_, Destination>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List destinations for a trip in creation order.
    pub async fn list_by_trip(
        pool: &PgPool,
        trip_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Destination>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM destinations WHERE trip_id = $1 \
             ORDER BY id LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Destination>(&query)
            .bind(trip_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a destination. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDestination,
    ) -> Result<Option<Destination>, sqlx::Error> {
        let query = format!(
            "UPDATE destinations SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                country = COALESCE($4, country),
                city = COALESCE($5, city),
                address = COALESCE($6, address),
                latitude = COALESCE($7, latitude),
                longitude = COALESCE($8, longitude),
                arrival_date = COALESCE($9, arrival_date),
                departure_date = COALESCE($10, departure_date),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Destination>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.country)
            .bind(&input.city)
            .bind(&input.address)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(input.arrival_date)
            .bind(input.departure_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a destination by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM destinations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Rows can vanish between commit and reload when their trip is deleted
/// concurrently (cascade). A partial batch is reported as `RowNotFound`.
fn ensure_fully_reloaded(
    rows: Vec<Destination>,
    inserted: usize,
) -> Result<Vec<Destination>, sqlx::Error> {
    if rows.len() == inserted {
        Ok(rows)
    } else {
        Err(sqlx::Error::RowNotFound)
    }
}

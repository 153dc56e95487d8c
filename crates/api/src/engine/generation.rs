//! AI-assisted destination generation.
//!
//! ```text
//! trip lookup ──> resolve params ──> upstream candidates ──> drafts ──> batch insert
//!  (404 first)                        (502 on any failure)   (lenient)   (all or none)
//! ```
//!
//! No retries and no deduplication: every call re-invokes the upstream and
//! appends new rows, even for identical requests.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use sqlx::PgPool;
use tripgenie_core::generation::GenerationParams;
use tripgenie_core::materialize::{materialize_candidates, DestinationDraft};
use tripgenie_core::types::DbId;
use tripgenie_db::models::destination::Destination;
use tripgenie_db::models::trip::Trip;
use tripgenie_db::repositories::{DestinationRepo, TripRepo};
use tripgenie_gemini::{GeminiClient, UpstreamError};

// ---------------------------------------------------------------------------
// Seams
// ---------------------------------------------------------------------------

/// Trip lookup by id.
#[async_trait]
pub trait TripLookup: Send + Sync {
    async fn find_trip(&self, id: DbId) -> Result<Option<Trip>, sqlx::Error>;
}

/// Atomic persistence of a batch of drafts for one trip.
#[async_trait]
pub trait DestinationSink: Send + Sync {
    /// Persist every draft or none; returns the stored rows in draft order.
    async fn insert_batch(
        &self,
        trip_id: DbId,
        drafts: &[DestinationDraft],
    ) -> Result<Vec<Destination>, sqlx::Error>;
}

/// Produces untyped destination candidates for planning parameters.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    async fn generate(&self, params: &GenerationParams) -> Result<Vec<Value>, UpstreamError>;
}

#[async_trait]
impl TripLookup for PgPool {
    async fn find_trip(&self, id: DbId) -> Result<Option<Trip>, sqlx::Error> {
        TripRepo::find_by_id(self, id).await
    }
}

#[async_trait]
impl DestinationSink for PgPool {
    async fn insert_batch(
        &self,
        trip_id: DbId,
        drafts: &[DestinationDraft],
    ) -> Result<Vec<Destination>, sqlx::Error> {
        DestinationRepo::create_batch(self, trip_id, drafts).await
    }
}

#[async_trait]
impl CandidateSource for GeminiClient {
    async fn generate(&self, params: &GenerationParams) -> Result<Vec<Value>, UpstreamError> {
        self.generate_candidates(params).await
    }
}

// ---------------------------------------------------------------------------
// Request / error
// ---------------------------------------------------------------------------

/// Body of `POST /trips/{trip_id}/destinations/ai-generate`.
///
/// Omitted fields fall back to the trip's stored values, then to fixed
/// defaults (see [`GenerationParams::resolve`]).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateDestinationsRequest {
    pub budget: Option<f64>,
    pub season: Option<String>,
    pub interests: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Checked before any upstream call.
    #[error("Trip with id {0} not found")]
    TripNotFound(DbId),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("Database error: {0}")]
    Store(#[from] sqlx::Error),
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Generate destinations for `trip_id` and persist them.
///
/// Returns exactly one stored destination per upstream candidate. Nothing
/// is written unless the upstream call fully succeeds.
pub async fn generate_destinations(
    trips: &dyn TripLookup,
    source: &dyn CandidateSource,
    sink: &dyn DestinationSink,
    trip_id: DbId,
    request: &GenerateDestinationsRequest,
) -> Result<Vec<Destination>, GenerationError> {
    let trip = trips
        .find_trip(trip_id)
        .await?
        .ok_or(GenerationError::TripNotFound(trip_id))?;

    let params = GenerationParams::resolve(
        [request.budget, trip.budget],
        [request.season.as_deref(), trip.season.as_deref()],
        [request.interests.as_deref(), trip.interests.as_deref()],
    );

    tracing::info!(trip_id, budget = params.budget, season = %params.season, "Requesting destination suggestions");

    let candidates = source.generate(&params).await?;
    let drafts = materialize_candidates(&candidates);

    let created = sink.insert_batch(trip_id, &drafts).await?;

    tracing::info!(trip_id, count = created.len(), "Persisted generated destinations");
    Ok(created)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::engine::generation::CandidateSource;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tripgenie_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Upstream destination generator.
    pub generator: Arc<dyn CandidateSource>,
}

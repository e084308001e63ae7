use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (the pool is already `Clone`, the config sits behind
/// an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: audhub_db::DbPool,
    /// Server configuration (JWT secret, timeouts, CORS origins).
    pub config: Arc<ServerConfig>,
}

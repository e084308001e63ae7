//! Domain error taxonomy shared by the repository and API layers.

/// Domain-level errors.
///
/// The API layer maps each variant onto an HTTP status and error code; see
/// `audhub-api`'s `AppError`. Identifiers are carried as strings because
/// `AUD_SQL` records are keyed by a text code rather than a numeric id.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced record, edge, or kind does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Malformed input (e.g. annotation text too short).
    #[error("{0}")]
    Validation(String),

    /// The 3-slot edge encoding cannot represent the requested pair, or an
    /// update would leave the encoding with fewer/more than two slots.
    #[error("{0}")]
    InvalidEdge(String),

    /// Optimistic-concurrency mismatch: the targeted version is stale.
    #[error("{0}")]
    Conflict(String),

    /// Missing or invalid credentials.
    #[error("{0}")]
    Unauthorized(String),

    /// Internal invariant violation; details are logged, not surfaced.
    #[error("{0}")]
    Internal(String),
}

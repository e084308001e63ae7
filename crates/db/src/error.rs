//! Repository error type.

use audhub_core::error::CoreError;

/// Error returned by repository operations that perform domain validation
/// (edge encoding, existence checks, optimistic concurrency) in addition to
/// raw SQL.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Convenience alias for repository return values.
pub type DbResult<T> = Result<T, DbError>;

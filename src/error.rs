//! Domain error types.
//!
//! Uses thiserror for ergonomic error handling with automatic Display
//! implementations. Database failures propagate to the caller unchanged;
//! this layer performs no retries and no recovery.

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Caller asked for a column that is not a user attribute
    #[error("Unknown user column: {0}")]
    UnknownColumn(String),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::Database(err.to_string())
    }
}

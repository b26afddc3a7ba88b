/// Errors raised while bringing the storage layer up.
///
/// Query-time failures stay as `sea_orm::DbErr` inside the repositories; this type only
/// covers connecting, migrating and health checks.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Driver error (SeaORM)
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// Connection failed after retries
    #[error("Connection failed after {attempts} attempts: {reason}")]
    ConnectionFailed { attempts: u32, reason: String },

    /// Migration error
    #[error("Migration error: {0}")]
    MigrationError(String),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;

use tasktrack_core::Error;

/// Maps a failed statement onto the core error taxonomy, keeping the backend
/// message intact.
pub(crate) fn query_error(err: sqlx::Error) -> Error {
    tracing::warn!("Statement failed: {}", err);

    match err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            Error::ForeignKeyViolation(db.to_string())
        }
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            Error::UniqueViolation(db.to_string())
        }
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => Error::Connection(err.to_string()),
        other => Error::Query(other.to_string()),
    }
}

pub(crate) fn connection_error(err: sqlx::Error) -> Error {
    tracing::warn!("Failed to connect to database: {}", err);
    Error::Connection(err.to_string())
}

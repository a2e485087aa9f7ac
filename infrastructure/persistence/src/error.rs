use business::domain::errors::RepositoryError;

/// Logs a store failure and folds it into the domain's repository error.
pub(crate) fn map_db_error(operation: &str, e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        tracing::warn!(operation, constraint = ?db_err.constraint(), "unique constraint violated");
        return RepositoryError::Duplicated;
    }

    tracing::error!(operation, error = %e, "database operation failed");
    RepositoryError::DatabaseError
}

/// A row that cannot be turned back into a domain value.
pub(crate) fn corrupt_row(table: &str, detail: &str) -> RepositoryError {
    tracing::error!(table, detail, "stored row could not be decoded");
    RepositoryError::Persistence
}

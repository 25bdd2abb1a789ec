//! Classification of SQLx errors into [`StoreError`].

use crate::domain::repositories::{StoreError, UniqueKey};

/// Name of the unique constraint on `urls.long_url`.
pub const LONG_URL_CONSTRAINT: &str = "urls_long_url_key";

/// Name of the unique constraint on `urls.short_code`.
pub const SHORT_CODE_CONSTRAINT: &str = "urls_short_code_key";

/// Returns which unique key an error violated, if it is a unique violation on
/// one of the `urls` constraints.
pub fn unique_violation_key(e: &sqlx::Error) -> Option<UniqueKey> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    match db_err.constraint() {
        Some(LONG_URL_CONSTRAINT) => Some(UniqueKey::LongUrl),
        Some(SHORT_CODE_CONSTRAINT) => Some(UniqueKey::ShortCode),
        _ => None,
    }
}

/// Maps an SQLx error to a [`StoreError`].
///
/// Connection and pool failures are [`StoreError::Unavailable`] so callers can
/// report them as retryable.
pub fn classify(e: sqlx::Error) -> StoreError {
    if let Some(key) = unique_violation_key(&e) {
        return StoreError::Duplicate(key);
    }

    match e {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::WorkerCrashed => StoreError::Unavailable(e.to_string()),
        other => StoreError::Other(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_are_unavailable() {
        assert!(matches!(
            classify(sqlx::Error::PoolTimedOut),
            StoreError::Unavailable(_)
        ));
        assert!(matches!(
            classify(sqlx::Error::PoolClosed),
            StoreError::Unavailable(_)
        ));
    }

    #[test]
    fn test_row_not_found_is_other() {
        assert!(unique_violation_key(&sqlx::Error::RowNotFound).is_none());
        assert!(matches!(
            classify(sqlx::Error::RowNotFound),
            StoreError::Other(_)
        ));
    }
}

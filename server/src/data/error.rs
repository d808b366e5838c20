//! Unified error type for data layer

use thiserror::Error;

use crate::data::filters::FilterError;

/// Unified error type for data layer operations
#[derive(Error, Debug)]
pub enum DataError {
    /// SQLite database error
    #[error("SQLite error: {0}")]
    Sqlite(sqlx::Error),

    /// Migration failed
    #[error("Migration {version} ({name}) failed on {backend}: {error}")]
    MigrationFailed {
        backend: &'static str,
        version: i32,
        name: String,
        error: String,
    },

    /// Filter could not be rendered against the record schema
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    /// Check if this is a connection-related error that might be transient
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Sqlite(e) => matches!(
                e,
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
            ),
            _ => false,
        }
    }
}

/// Convert from the SQLite backend error type
impl From<crate::data::sqlite::SqliteError> for DataError {
    fn from(e: crate::data::sqlite::SqliteError) -> Self {
        match e {
            crate::data::sqlite::SqliteError::Database(e) => Self::Sqlite(e),
            crate::data::sqlite::SqliteError::MigrationFailed {
                version,
                name,
                error,
            } => Self::MigrationFailed {
                backend: "sqlite",
                version,
                name,
                error,
            },
            crate::data::sqlite::SqliteError::Io(e) => Self::Io(e),
            crate::data::sqlite::SqliteError::Filter(e) => Self::Filter(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sqlite::SqliteError;

    #[test]
    fn test_migration_failed_error_display() {
        let err = DataError::MigrationFailed {
            backend: "sqlite",
            version: 2,
            name: "add_list_indexes".to_string(),
            error: "syntax error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Migration 2 (add_list_indexes) failed on sqlite: syntax error"
        );
    }

    #[test]
    fn test_from_sqlite_error() {
        let err: DataError = SqliteError::Database(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(err, DataError::Sqlite(_)));
        assert!(err.is_transient());

        let err: DataError = SqliteError::MigrationFailed {
            version: 2,
            name: "x".to_string(),
            error: "y".to_string(),
        }
        .into();
        assert!(err.to_string().contains("failed on sqlite"));
        assert!(!err.is_transient());
    }

    #[test]
    fn test_filter_error_passthrough() {
        let err: DataError = SqliteError::Filter(FilterError::UnknownField("x".into())).into();
        assert_eq!(err.to_string(), "Filter error: Unknown filter field: x");
        assert!(!err.is_transient());
    }
}

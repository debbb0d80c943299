//! Database connection pool management.
//!
//! Opens an existing SQLite database with WAL mode enabled.

use std::path::Path;

use log::{debug, error};
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;

/// Opens a connection pool on an existing SQLite database file.
///
/// The file is never created: backfilling a fresh, empty database would only
/// fail later with a missing table.
///
/// # Errors
///
/// Returns `DatabaseError::FileNotFound` if `db_path` does not exist, or
/// `DatabaseError::SqlError` if connecting or enabling WAL fails.
pub async fn init_db_pool_with_path(db_path: &Path) -> Result<SqlitePool, DatabaseError> {
    let db_path_str = db_path.to_string_lossy().to_string();
    if !db_path.exists() {
        error!("Database file does not exist: {db_path_str}");
        return Err(DatabaseError::FileNotFound(db_path_str));
    }

    let pool = SqlitePool::connect(&format!("sqlite:{}", db_path_str))
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {e}");
            DatabaseError::SqlError(e)
        })?;

    // Enable WAL mode
    sqlx::query("PRAGMA journal_mode=WAL")
        .execute(&pool)
        .await
        .map_err(|e| {
            error!("Failed to set WAL mode: {e}");
            DatabaseError::SqlError(e)
        })?;

    debug!("Opened database {db_path_str}");
    Ok(pool)
}

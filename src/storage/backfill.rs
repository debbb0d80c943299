//! Domain column backfill.
//!
//! Runs the SQLite rendition of the extractor inside the database, so rows
//! never leave SQLite.

use anyhow::{Context, Result};
use log::info;
use sqlx::SqlitePool;

use crate::config::BackfillOptions;
use crate::error_handling::DatabaseError;
use crate::sql::{domain_expression, quote_identifier, SqlDialect};

use super::pool::init_db_pool_with_path;

/// Populates `opts.target_column` from `opts.source_column` for every row.
///
/// # Returns
///
/// The number of rows updated.
///
/// # Errors
///
/// Returns an error if the database cannot be opened, the table or source
/// column does not exist, or the update fails.
pub async fn backfill_domains(opts: &BackfillOptions) -> Result<u64> {
    let pool = init_db_pool_with_path(&opts.db_path)
        .await
        .context("Failed to initialize database pool")?;

    let updated = backfill_with_pool(
        &pool,
        &opts.table,
        &opts.source_column,
        &opts.target_column,
    )
    .await
    .with_context(|| format!("Failed to backfill table '{}'", opts.table))?;

    pool.close().await;
    Ok(updated)
}

/// Backfills using an already-open pool.
///
/// Adds `target` as a `TEXT` column if the table lacks it. Column names
/// match ignoring ASCII case, as SQLite resolves them.
pub async fn backfill_with_pool(
    pool: &SqlitePool,
    table: &str,
    source: &str,
    target: &str,
) -> Result<u64, DatabaseError> {
    let columns = table_columns(pool, table).await?;
    if columns.is_empty() {
        return Err(DatabaseError::TableNotFound(table.to_string()));
    }
    if !has_column(&columns, source) {
        return Err(DatabaseError::ColumnNotFound {
            table: table.to_string(),
            column: source.to_string(),
        });
    }

    let quoted_table = quote_identifier(table);
    let quoted_target = quote_identifier(target);

    if !has_column(&columns, target) {
        info!("Adding column {quoted_target} to {quoted_table}");
        sqlx::query(&format!(
            "ALTER TABLE {quoted_table} ADD COLUMN {quoted_target} TEXT"
        ))
        .execute(pool)
        .await?;
    }

    let expr = domain_expression(&quote_identifier(source), SqlDialect::Sqlite);
    let result = sqlx::query(&format!(
        "UPDATE {quoted_table} SET {quoted_target} = {expr}"
    ))
    .execute(pool)
    .await?;

    info!(
        "Backfilled {} rows of {quoted_table}.{quoted_target}",
        result.rows_affected()
    );
    Ok(result.rows_affected())
}

fn has_column(columns: &[String], name: &str) -> bool {
    columns.iter().any(|c| c.eq_ignore_ascii_case(name))
}

/// Column names of `table`, empty if the table does not exist.
async fn table_columns(pool: &SqlitePool, table: &str) -> Result<Vec<String>, DatabaseError> {
    let columns = sqlx::query_scalar::<_, String>("SELECT name FROM pragma_table_info(?)")
        .bind(table)
        .fetch_all(pool)
        .await?;
    Ok(columns)
}

//! Schema bootstrap for the PostgreSQL storage backend.
//!
//! Reconciliation runs against two tables: `documents` (the pending mutation
//! documents) and `data` (the hierarchical object records). Production
//! databases are provisioned externally; this module only creates the tables
//! on fresh databases so tests and local setups can start from nothing.

use sqlx_core::query::query;
use sqlx_postgres::PgPool;
use tracing::{debug, instrument};

use crate::error::{PostgresError, Result};

const CREATE_DOCUMENTS: &str = r#"
CREATE TABLE IF NOT EXISTS documents (
    doc_id        uuid PRIMARY KEY,
    received_at   timestamptz NOT NULL,
    document_type text NOT NULL,
    document_data jsonb NOT NULL,
    processed_at  timestamptz
)"#;

const CREATE_DATA: &str = r#"
CREATE TABLE IF NOT EXISTS data (
    object uuid PRIMARY KEY,
    status integer NOT NULL,
    level  integer NOT NULL,
    parent uuid,
    owner  text NOT NULL
)"#;

const CREATE_PARENT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS data_parent_idx ON data (parent) WHERE parent IS NOT NULL";

/// Creates the `documents` and `data` tables if they do not exist.
///
/// Idempotent; safe to call on every startup.
#[instrument(skip(pool))]
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    for statement in [CREATE_DOCUMENTS, CREATE_DATA, CREATE_PARENT_INDEX] {
        query(statement)
            .execute(pool)
            .await
            .map_err(|e| PostgresError::schema(e.to_string()))?;
    }

    debug!("Schema bootstrap complete");

    Ok(())
}

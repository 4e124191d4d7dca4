//! SQL query implementations for the reconciliation store operations.
//!
//! Every query binds its values with `$n` placeholders; values are never
//! interpolated into SQL text.

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx_core::query::query;
use sqlx_core::query_as::query_as;
use sqlx_postgres::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use objsync_core::{Document, ObjectRecord};
use objsync_storage::StorageError;

use crate::error::query_error;

/// Converts a chrono row timestamp to a time OffsetDateTime.
fn chrono_to_time(dt: DateTime<Utc>) -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(dt.timestamp()).unwrap_or(OffsetDateTime::UNIX_EPOCH)
        + time::Duration::nanoseconds(i64::from(dt.timestamp_subsec_nanos()))
}

/// Converts a time OffsetDateTime to a chrono bind value.
fn time_to_chrono(ts: OffsetDateTime) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts.unix_timestamp(), ts.nanosecond())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

type DocumentRow = (
    Uuid,
    DateTime<Utc>,
    String,
    Value,
    Option<DateTime<Utc>>,
);

/// Fetches every document, oldest first.
pub async fn fetch_all_documents(pool: &PgPool) -> Result<Vec<Document>, StorageError> {
    let rows: Vec<DocumentRow> = query_as(
        "SELECT doc_id, received_at, document_type, document_data, processed_at
         FROM documents
         ORDER BY received_at, doc_id",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| query_error("Failed to fetch documents", e))?;

    Ok(rows
        .into_iter()
        .map(|(id, received_at, document_type, payload, processed_at)| Document {
            id,
            received_at: chrono_to_time(received_at),
            document_type,
            payload,
            processed_at: processed_at.map(chrono_to_time),
        })
        .collect())
}

/// Fetches a non-root object record by id.
pub async fn fetch_object(
    pool: &PgPool,
    object_id: Uuid,
) -> Result<Option<ObjectRecord>, StorageError> {
    let row: Option<(Uuid, i32, i32, Option<Uuid>, String)> = query_as(
        "SELECT object, status, level, parent, owner
         FROM data
         WHERE object = $1 AND parent IS NOT NULL",
    )
    .bind(object_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| query_error("Failed to fetch object", e))?;

    Ok(row.map(|(id, status, level, parent, owner)| ObjectRecord {
        id,
        status,
        level,
        parent,
        owner,
    }))
}

/// Fetches the mutable fields of an object record, root or not.
pub async fn fetch_status_and_owner(
    pool: &PgPool,
    object_id: Uuid,
) -> Result<Option<(i32, String)>, StorageError> {
    query_as("SELECT status, owner FROM data WHERE object = $1")
        .bind(object_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| query_error("Failed to fetch object status and owner", e))
}

/// Writes a new status code, returning the number of rows affected.
pub async fn update_status(
    pool: &PgPool,
    object_id: Uuid,
    new_status: i32,
) -> Result<u64, StorageError> {
    let result = query("UPDATE data SET status = $1 WHERE object = $2")
        .bind(new_status)
        .bind(object_id)
        .execute(pool)
        .await
        .map_err(|e| query_error("Failed to update object status", e))?;

    Ok(result.rows_affected())
}

/// Writes a new owner, returning the number of rows affected.
pub async fn update_owner(
    pool: &PgPool,
    object_id: Uuid,
    new_owner: &str,
) -> Result<u64, StorageError> {
    let result = query("UPDATE data SET owner = $1 WHERE object = $2")
        .bind(new_owner)
        .bind(object_id)
        .execute(pool)
        .await
        .map_err(|e| query_error("Failed to update object owner", e))?;

    Ok(result.rows_affected())
}

/// Stamps a document's processed_at, returning the number of rows affected.
pub async fn mark_document_processed(
    pool: &PgPool,
    doc_id: Uuid,
    processed_at: OffsetDateTime,
) -> Result<u64, StorageError> {
    let result = query("UPDATE documents SET processed_at = $1 WHERE doc_id = $2")
        .bind(time_to_chrono(processed_at))
        .bind(doc_id)
        .execute(pool)
        .await
        .map_err(|e| query_error("Failed to mark document processed", e))?;

    Ok(result.rows_affected())
}

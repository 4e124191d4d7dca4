//! PostgreSQL implementation of the ObjectStorage trait.

use async_trait::async_trait;
use sqlx_postgres::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use objsync_core::{Document, ObjectRecord};
use objsync_storage::{ObjectStorage, StorageError};

use crate::config::PostgresConfig;
use crate::pool;
use crate::queries;
use crate::schema;

/// PostgreSQL storage backend for documents and object records.
///
/// The handle owns a connection pool that is acquired once per run and
/// released when the handle is dropped; individual operations never open
/// their own connections.
#[derive(Debug, Clone)]
pub struct PostgresStorage {
    pool: PgPool,
}

impl PostgresStorage {
    /// Creates a new `PostgresStorage` with the given configuration.
    ///
    /// This will create the connection pool and, when
    /// `config.ensure_schema` is set, bootstrap missing tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection pool cannot be created or if the
    /// schema bootstrap fails.
    pub async fn new(config: PostgresConfig) -> Result<Self, StorageError> {
        let pool = pool::create_pool(&config).await?;

        if config.ensure_schema {
            schema::ensure_schema(&pool).await?;
        }

        Ok(Self { pool })
    }

    /// Creates a new `PostgresStorage` from an existing connection pool.
    ///
    /// Allows sharing a pool between components; no schema bootstrap runs.
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ObjectStorage for PostgresStorage {
    async fn fetch_all_documents(&self) -> Result<Vec<Document>, StorageError> {
        queries::fetch_all_documents(&self.pool).await
    }

    async fn fetch_object(&self, object_id: Uuid) -> Result<Option<ObjectRecord>, StorageError> {
        queries::fetch_object(&self.pool, object_id).await
    }

    async fn fetch_status_and_owner(
        &self,
        object_id: Uuid,
    ) -> Result<Option<(i32, String)>, StorageError> {
        queries::fetch_status_and_owner(&self.pool, object_id).await
    }

    async fn update_status(&self, object_id: Uuid, new_status: i32) -> Result<u64, StorageError> {
        queries::update_status(&self.pool, object_id, new_status).await
    }

    async fn update_owner(&self, object_id: Uuid, new_owner: &str) -> Result<u64, StorageError> {
        queries::update_owner(&self.pool, object_id, new_owner).await
    }

    async fn mark_document_processed(
        &self,
        doc_id: Uuid,
        processed_at: OffsetDateTime,
    ) -> Result<u64, StorageError> {
        queries::mark_document_processed(&self.pool, doc_id, processed_at).await
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}

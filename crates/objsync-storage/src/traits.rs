//! The storage trait all objsync backends implement.

use async_trait::async_trait;
use objsync_core::{Document, ObjectRecord};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::StorageError;

/// Store access required by the reconciliation pipeline.
///
/// Implementations must be thread-safe (`Send + Sync`). Reads return `None`
/// for missing records; errors are reserved for infrastructure problems.
///
/// # Example
///
/// ```ignore
/// use objsync_storage::{ObjectStorage, StorageError};
/// use uuid::Uuid;
///
/// async fn owner_of(store: &dyn ObjectStorage, id: Uuid) -> Result<Option<String>, StorageError> {
///     Ok(store.fetch_status_and_owner(id).await?.map(|(_, owner)| owner))
/// }
/// ```
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Returns every document in the store, in received order.
    async fn fetch_all_documents(&self) -> Result<Vec<Document>, StorageError>;

    /// Looks up an object record by id, restricted to non-root records.
    ///
    /// Root objects (no parent) are not reconciliation targets; a lookup for
    /// one returns `None` just like a missing record.
    async fn fetch_object(&self, object_id: Uuid) -> Result<Option<ObjectRecord>, StorageError>;

    /// Fetches only the mutable fields of an object record.
    ///
    /// Unlike [`fetch_object`](Self::fetch_object) this is not filtered by
    /// parent; it reflects whatever the store currently holds.
    async fn fetch_status_and_owner(
        &self,
        object_id: Uuid,
    ) -> Result<Option<(i32, String)>, StorageError>;

    /// Writes a new status code. Returns the number of rows affected.
    async fn update_status(&self, object_id: Uuid, new_status: i32) -> Result<u64, StorageError>;

    /// Writes a new owner. Returns the number of rows affected.
    async fn update_owner(&self, object_id: Uuid, new_owner: &str) -> Result<u64, StorageError>;

    /// Stamps a document's processed_at. Returns the number of rows affected.
    async fn mark_document_processed(
        &self,
        doc_id: Uuid,
        processed_at: OffsetDateTime,
    ) -> Result<u64, StorageError>;

    /// Returns the name of this storage backend for logging/debugging.
    fn backend_name(&self) -> &'static str;
}

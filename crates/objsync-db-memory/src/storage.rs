use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use objsync_core::{Document, ObjectRecord};
use objsync_storage::{ObjectStorage, StorageError};

/// In-memory storage backend.
///
/// Documents keep their insertion order, mirroring the received-order
/// guarantee of the PostgreSQL backend. Write counters are atomics so tests
/// can observe how many store write calls a run performed, not just the end
/// state.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    documents: RwLock<Vec<Document>>,
    objects: RwLock<HashMap<Uuid, ObjectRecord>>,
    status_writes: AtomicU64,
    owner_writes: AtomicU64,
    processed_writes: AtomicU64,
}

impl InMemoryStorage {
    /// Creates a new empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a document.
    pub async fn insert_document(&self, document: Document) {
        self.documents.write().await.push(document);
    }

    /// Seeds an object record.
    pub async fn insert_object(&self, record: ObjectRecord) {
        self.objects.write().await.insert(record.id, record);
    }

    /// Returns a document by id, if present.
    pub async fn document(&self, doc_id: Uuid) -> Option<Document> {
        self.documents
            .read()
            .await
            .iter()
            .find(|d| d.id == doc_id)
            .cloned()
    }

    /// Returns an object record by id, with no parent filter.
    pub async fn object(&self, object_id: Uuid) -> Option<ObjectRecord> {
        self.objects.read().await.get(&object_id).cloned()
    }

    /// Number of `update_status` calls made against this store.
    pub fn status_write_count(&self) -> u64 {
        self.status_writes.load(Ordering::SeqCst)
    }

    /// Number of `update_owner` calls made against this store.
    pub fn owner_write_count(&self) -> u64 {
        self.owner_writes.load(Ordering::SeqCst)
    }

    /// Number of `mark_document_processed` calls made against this store.
    pub fn processed_write_count(&self) -> u64 {
        self.processed_writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ObjectStorage for InMemoryStorage {
    async fn fetch_all_documents(&self) -> Result<Vec<Document>, StorageError> {
        Ok(self.documents.read().await.clone())
    }

    async fn fetch_object(&self, object_id: Uuid) -> Result<Option<ObjectRecord>, StorageError> {
        let objects = self.objects.read().await;
        Ok(objects.get(&object_id).filter(|r| !r.is_root()).cloned())
    }

    async fn fetch_status_and_owner(
        &self,
        object_id: Uuid,
    ) -> Result<Option<(i32, String)>, StorageError> {
        let objects = self.objects.read().await;
        Ok(objects
            .get(&object_id)
            .map(|r| (r.status, r.owner.clone())))
    }

    async fn update_status(&self, object_id: Uuid, new_status: i32) -> Result<u64, StorageError> {
        self.status_writes.fetch_add(1, Ordering::SeqCst);
        let mut objects = self.objects.write().await;
        match objects.get_mut(&object_id) {
            Some(record) => {
                record.status = new_status;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn update_owner(&self, object_id: Uuid, new_owner: &str) -> Result<u64, StorageError> {
        self.owner_writes.fetch_add(1, Ordering::SeqCst);
        let mut objects = self.objects.write().await;
        match objects.get_mut(&object_id) {
            Some(record) => {
                record.owner = new_owner.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn mark_document_processed(
        &self,
        doc_id: Uuid,
        processed_at: OffsetDateTime,
    ) -> Result<u64, StorageError> {
        self.processed_writes.fetch_add(1, Ordering::SeqCst);
        let mut documents = self.documents.write().await;
        match documents.iter_mut().find(|d| d.id == doc_id) {
            Some(document) => {
                document.processed_at = Some(processed_at);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

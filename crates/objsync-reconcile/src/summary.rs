use serde::Serialize;

/// Counters accumulated over one reconciliation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Documents read from the store.
    pub documents: usize,
    /// Documents skipped because their payload was malformed.
    pub skipped_documents: usize,
    /// Object references expanded from document payloads.
    pub references: usize,
    /// Documents that carried a non-empty operation section.
    pub operations: usize,
    /// Distinct non-root objects that resolved.
    pub resolved_objects: usize,
    /// Actions applied (after sanitization).
    pub actions: usize,
    /// Status writes emitted.
    pub status_writes: u64,
    /// Owner writes emitted.
    pub owner_writes: u64,
    /// processed_at stamps emitted (one per action, not per document).
    pub documents_processed: u64,
}

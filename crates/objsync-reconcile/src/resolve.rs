//! Resolution of referenced objects against the store.

use std::collections::HashSet;

use tracing::debug;

use objsync_core::{ObjectRecord, ObjectReference};
use objsync_storage::{ObjectStorage, StorageError};

/// Resolves every distinct referenced object to its current stored record.
///
/// Lookups are deduplicated by object id in first-seen order, so a run does
/// one round trip per distinct object no matter how many documents reference
/// it. References to missing or root-level objects resolve to nothing and
/// drop out of the join silently; store failures propagate.
pub async fn resolve_objects(
    store: &dyn ObjectStorage,
    references: &[ObjectReference],
) -> Result<Vec<ObjectRecord>, StorageError> {
    let mut seen = HashSet::new();
    let mut resolved = Vec::new();

    for reference in references {
        if !seen.insert(reference.object_id) {
            continue;
        }
        match store.fetch_object(reference.object_id).await? {
            Some(record) => resolved.push(record),
            None => debug!(
                object_id = %reference.object_id,
                "referenced object is missing or root-level, dropped"
            ),
        }
    }

    Ok(resolved)
}

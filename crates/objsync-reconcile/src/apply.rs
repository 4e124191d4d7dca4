//! Conditional application of actions against the store.

use tracing::debug;

use objsync_core::{Action, now_utc};
use objsync_storage::ObjectStorage;

use crate::error::{ReconcileError, UpdateTarget};
use crate::summary::RunSummary;

/// Applies each sanitized action in order, then stamps its document.
///
/// There is no transaction around an action: a status write can land and the
/// subsequent owner write fail, and the status write is not rolled back.
pub async fn apply_actions(
    store: &dyn ObjectStorage,
    actions: &[Action],
    summary: &mut RunSummary,
) -> Result<(), ReconcileError> {
    for action in actions {
        apply_action(store, action, summary).await?;
    }
    Ok(())
}

/// Applies one action.
///
/// Both field updates are gated on comparing the expected old value against
/// the stored one. The write fires when the stored value has NOT reached the
/// expected old baseline; a stored value already at the baseline is left
/// alone. Each write must hit exactly one row; zero rows means the record
/// vanished mid-run and fails the run.
async fn apply_action(
    store: &dyn ObjectStorage,
    action: &Action,
    summary: &mut RunSummary,
) -> Result<(), ReconcileError> {
    match store.fetch_status_and_owner(action.object_id).await? {
        Some((current_status, current_owner)) => {
            if let Some(expected) = action.old_status()
                && current_status != expected
            {
                match action.new_status() {
                    Some(new_status) => {
                        let rows = store.update_status(action.object_id, new_status).await?;
                        if rows == 0 {
                            return Err(ReconcileError::update_failure(
                                UpdateTarget::Status,
                                action.object_id,
                            ));
                        }
                        summary.status_writes += 1;
                    }
                    None => debug!(
                        object_id = %action.object_id,
                        "status transition has no new value, write skipped"
                    ),
                }
            }

            if let Some(expected) = action.old_owner()
                && current_owner != expected
            {
                match action.new_owner() {
                    Some(new_owner) => {
                        let rows = store.update_owner(action.object_id, new_owner).await?;
                        if rows == 0 {
                            return Err(ReconcileError::update_failure(
                                UpdateTarget::Owner,
                                action.object_id,
                            ));
                        }
                        summary.owner_writes += 1;
                    }
                    None => debug!(
                        object_id = %action.object_id,
                        "owner transition has no new value, write skipped"
                    ),
                }
            }
        }
        None => debug!(
            object_id = %action.object_id,
            document_id = %action.document_id,
            "target object not found at apply time, comparisons skipped"
        ),
    }

    let rows = store
        .mark_document_processed(action.document_id, now_utc())
        .await?;
    if rows == 0 {
        return Err(ReconcileError::update_failure(
            UpdateTarget::Processed,
            action.document_id,
        ));
    }
    summary.documents_processed += 1;

    Ok(())
}

//! The batch run: one pass over all documents.

use std::collections::HashSet;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use objsync_core::now_utc;
use objsync_storage::ObjectStorage;

use crate::apply::apply_actions;
use crate::assemble::assemble_actions;
use crate::error::{ReconcileError, UpdateTarget};
use crate::extract::{expand_references, extract_operation};
use crate::resolve::resolve_objects;
use crate::sanitize::sanitize_actions;
use crate::summary::RunSummary;

/// Executes one reconciliation run against the given store.
///
/// A document with a malformed payload is skipped whole (neither its
/// references nor its operation take part in the join), logged at warn, and
/// counted; it never aborts the rest of the run. Store failures and writes
/// that hit no rows are fatal.
#[instrument(skip(store), fields(backend = store.backend_name()))]
pub async fn run_reconciliation(store: &dyn ObjectStorage) -> Result<RunSummary, ReconcileError> {
    let documents = store.fetch_all_documents().await?;

    let mut summary = RunSummary {
        documents: documents.len(),
        ..RunSummary::default()
    };

    let mut skipped = HashSet::new();
    let mut references = Vec::new();
    let mut operations = Vec::new();
    for document in &documents {
        let expanded = match expand_references(document) {
            Ok(expanded) => expanded,
            Err(e) => {
                warn!(document_id = %document.id, error = %e, "skipping document with malformed payload");
                summary.skipped_documents += 1;
                skipped.insert(document.id);
                continue;
            }
        };
        let operation = match extract_operation(document) {
            Ok(operation) => operation,
            Err(e) => {
                warn!(document_id = %document.id, error = %e, "skipping document with malformed payload");
                summary.skipped_documents += 1;
                skipped.insert(document.id);
                continue;
            }
        };

        references.extend(expanded);
        if let Some(operation) = operation {
            operations.push(operation);
        }
    }
    summary.references = references.len();
    summary.operations = operations.len();

    let resolved = resolve_objects(store, &references).await?;
    summary.resolved_objects = resolved.len();

    let assembled = assemble_actions(&resolved, &references, &operations);
    let actions = sanitize_actions(&assembled);
    summary.actions = actions.len();

    apply_actions(store, &actions, &mut summary).await?;

    // A well-formed document that produced no action (root-only targets,
    // empty operation section) was still examined; stamp it so the next run
    // does not pick it up again. Action-bearing documents were already
    // stamped during apply.
    let acted: HashSet<Uuid> = actions.iter().map(|a| a.document_id).collect();
    for document in &documents {
        if skipped.contains(&document.id) || acted.contains(&document.id) {
            continue;
        }
        let rows = store
            .mark_document_processed(document.id, now_utc())
            .await?;
        if rows == 0 {
            return Err(ReconcileError::update_failure(
                UpdateTarget::Processed,
                document.id,
            ));
        }
        summary.documents_processed += 1;
    }

    info!(
        documents = summary.documents,
        skipped = summary.skipped_documents,
        resolved = summary.resolved_objects,
        actions = summary.actions,
        status_writes = summary.status_writes,
        owner_writes = summary.owner_writes,
        "reconciliation run complete"
    );

    Ok(summary)
}

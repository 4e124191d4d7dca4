//! Assembly of per-(document, object) actions from the three joined sources.

use objsync_core::{Action, ObjectRecord, ObjectReference, OperationDetail};

/// Joins resolved objects, object references, and operation details into
/// actions.
///
/// One action results per triple where the resolved object matches the
/// reference's object id and the reference's document matches the operation
/// detail's document. Output order follows the outer iteration over resolved
/// objects, then references, then details, so it is stable for a fixed input
/// order. Only documents that carried an operation section can produce
/// actions.
pub fn assemble_actions(
    objects: &[ObjectRecord],
    references: &[ObjectReference],
    operations: &[OperationDetail],
) -> Vec<Action> {
    let mut actions = Vec::new();

    for object in objects {
        for reference in references.iter().filter(|r| r.object_id == object.id) {
            for detail in operations
                .iter()
                .filter(|d| d.document_id == reference.document_id)
            {
                actions.push(Action {
                    document_id: reference.document_id,
                    object_id: object.id,
                    owner: detail.operation.owner.clone(),
                    status: detail.operation.status.clone(),
                });
            }
        }
    }

    actions
}

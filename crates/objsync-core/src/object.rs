//! Object records and the document-to-object references.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A node in the object hierarchy, the target of reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub id: Uuid,
    /// Integer status code.
    pub status: i32,
    /// Depth of the node in the hierarchy.
    pub level: i32,
    /// Parent node; root objects have none.
    pub parent: Option<Uuid>,
    pub owner: String,
}

impl ObjectRecord {
    /// Root objects (no parent) are never reconciliation targets.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Declares that a document concerns a given object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectReference {
    pub document_id: Uuid,
    pub object_id: Uuid,
}

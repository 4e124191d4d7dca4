use std::fmt;

use objsync_storage::StorageError;
use thiserror::Error;
use uuid::Uuid;

/// Which write a failed update was targeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateTarget {
    /// The `status` field of an object record.
    Status,
    /// The `owner` field of an object record.
    Owner,
    /// The `processed_at` stamp of a document.
    Processed,
}

impl fmt::Display for UpdateTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status => write!(f, "status"),
            Self::Owner => write!(f, "owner"),
            Self::Processed => write!(f, "processed_at"),
        }
    }
}

/// Errors that abort a reconciliation run.
///
/// Per-document payload problems are not represented here; those are handled
/// by the runner's skip-and-log policy and never abort unrelated documents.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The backing store failed; fatal for the whole run.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A write affected zero rows: the targeted record vanished mid-run.
    #[error("update of {target} affected no rows for {id}")]
    UpdateFailure { target: UpdateTarget, id: Uuid },
}

impl ReconcileError {
    /// Creates a new `UpdateFailure` error.
    #[must_use]
    pub fn update_failure(target: UpdateTarget, id: Uuid) -> Self {
        Self::UpdateFailure { target, id }
    }

    /// Returns `true` if this error was caused by losing the store.
    #[must_use]
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_connection_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_failure_display() {
        let id = Uuid::nil();
        let err = ReconcileError::update_failure(UpdateTarget::Status, id);
        assert_eq!(
            err.to_string(),
            format!("update of status affected no rows for {id}")
        );
    }

    #[test]
    fn test_connection_failure_predicate() {
        let err: ReconcileError = StorageError::connection_error("down").into();
        assert!(err.is_connection_failure());

        let err: ReconcileError = StorageError::internal("oops").into();
        assert!(!err.is_connection_failure());

        let err = ReconcileError::update_failure(UpdateTarget::Owner, Uuid::nil());
        assert!(!err.is_connection_failure());
    }
}

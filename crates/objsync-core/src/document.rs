//! Document records and the operation deltas carried in their payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;
use uuid::Uuid;

/// An upstream record describing a requested mutation against one or more
/// objects.
///
/// Documents are produced by an external process; this job only ever reads
/// them and stamps `processed_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub received_at: OffsetDateTime,
    pub document_type: String,
    /// Structured payload; expected to carry an `objects` list and an
    /// optional `operation_details` section.
    pub payload: Value,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub processed_at: Option<OffsetDateTime>,
}

impl Document {
    #[must_use]
    pub fn is_processed(&self) -> bool {
        self.processed_at.is_some()
    }
}

/// A two-sided value transition.
///
/// Each side is independently optional: a payload may carry only the old
/// value, only the new one, or both. Absence is tagged per side rather than
/// encoded as a sentinel null, so a side that was never given is
/// distinguishable from a record that has no transition at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new: Option<T>,
}

impl<T> Transition<T> {
    #[must_use]
    pub fn new(old: Option<T>, new: Option<T>) -> Self {
        Self { old, new }
    }

    /// A transition with no value on either side carries no intent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.old.is_none() && self.new.is_none()
    }
}

/// The owner/status deltas found in a document's `operation_details` section.
///
/// Unknown keys in the section are ignored; the two recognized entries are
/// each optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Transition<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Transition<i32>>,
}

impl OperationData {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owner.is_none() && self.status.is_none()
    }
}

/// Operation data tied back to the document it was extracted from.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDetail {
    pub document_id: Uuid,
    pub operation: OperationData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transition_is_empty() {
        let full = Transition::new(Some(1), Some(2));
        assert!(!full.is_empty());

        let half = Transition::<i32>::new(Some(1), None);
        assert!(!half.is_empty());

        let empty = Transition::<i32>::new(None, None);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_operation_data_deserialization() {
        let data: OperationData = serde_json::from_value(json!({
            "owner": {"old": "a", "new": "b"},
            "status": {"old": 1, "new": 2}
        }))
        .unwrap();

        assert_eq!(data.owner, Some(Transition::new(Some("a".into()), Some("b".into()))));
        assert_eq!(data.status, Some(Transition::new(Some(1), Some(2))));
    }

    #[test]
    fn test_operation_data_partial_and_null_sides() {
        // A null side and a missing side both deserialize as absent.
        let data: OperationData = serde_json::from_value(json!({
            "status": {"old": null, "new": 2}
        }))
        .unwrap();

        assert!(data.owner.is_none());
        let status = data.status.unwrap();
        assert_eq!(status.old, None);
        assert_eq!(status.new, Some(2));
    }

    #[test]
    fn test_operation_data_ignores_unknown_keys() {
        let data: OperationData = serde_json::from_value(json!({
            "priority": {"old": 1, "new": 5}
        }))
        .unwrap();

        assert!(data.is_empty());
    }

    #[test]
    fn test_document_serde_roundtrip() {
        let doc = Document {
            id: Uuid::new_v4(),
            received_at: crate::time::now_utc(),
            document_type: "transfer".into(),
            payload: json!({"objects": []}),
            processed_at: None,
        };

        let encoded = serde_json::to_string(&doc).unwrap();
        let decoded: Document = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.id, doc.id);
        assert!(!decoded.is_processed());
    }
}

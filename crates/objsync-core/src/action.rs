//! Per-(document, object) mutation intents.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::Transition;

/// An ephemeral, computed intent to transition the owner and/or status of one
/// object on behalf of one document.
///
/// `document_id` and `object_id` are always present; both transitions are
/// optional and independent of each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub document_id: Uuid,
    pub object_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Transition<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Transition<i32>>,
}

impl Action {
    #[must_use]
    pub fn new(document_id: Uuid, object_id: Uuid) -> Self {
        Self {
            document_id,
            object_id,
            owner: None,
            status: None,
        }
    }

    #[must_use]
    pub fn old_owner(&self) -> Option<&str> {
        self.owner.as_ref()?.old.as_deref()
    }

    #[must_use]
    pub fn new_owner(&self) -> Option<&str> {
        self.owner.as_ref()?.new.as_deref()
    }

    #[must_use]
    pub fn old_status(&self) -> Option<i32> {
        self.status.as_ref()?.old
    }

    #[must_use]
    pub fn new_status(&self) -> Option<i32> {
        self.status.as_ref()?.new
    }

    /// An action carrying no transition still marks its document processed.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.owner.is_none() && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_on_empty_action() {
        let action = Action::new(Uuid::new_v4(), Uuid::new_v4());
        assert!(action.is_noop());
        assert_eq!(action.old_owner(), None);
        assert_eq!(action.new_owner(), None);
        assert_eq!(action.old_status(), None);
        assert_eq!(action.new_status(), None);
    }

    #[test]
    fn test_accessors_flatten_transitions() {
        let mut action = Action::new(Uuid::new_v4(), Uuid::new_v4());
        action.owner = Some(Transition::new(Some("a".into()), Some("b".into())));
        action.status = Some(Transition::new(Some(1), None));

        assert!(!action.is_noop());
        assert_eq!(action.old_owner(), Some("a"));
        assert_eq!(action.new_owner(), Some("b"));
        assert_eq!(action.old_status(), Some(1));
        assert_eq!(action.new_status(), None);
    }

    #[test]
    fn test_serialization_drops_absent_fields() {
        let action = Action::new(Uuid::new_v4(), Uuid::new_v4());
        let encoded = serde_json::to_value(&action).unwrap();
        let map = encoded.as_object().unwrap();
        assert!(map.contains_key("document_id"));
        assert!(map.contains_key("object_id"));
        assert!(!map.contains_key("owner"));
        assert!(!map.contains_key("status"));
    }
}

//! Removal of absent fields from assembled actions.

use objsync_core::Action;

/// Returns sanitized copies of the given actions.
///
/// A transition with no value on either side (a payload entry like
/// `"owner": {}` or one whose sides were all null) carries no intent and is
/// removed. `document_id` and `object_id` always survive. The input slice is
/// left untouched; callers holding the unsanitized actions keep them as-is.
pub fn sanitize_actions(actions: &[Action]) -> Vec<Action> {
    actions
        .iter()
        .map(|action| {
            let mut clean = action.clone();
            if clean.owner.as_ref().is_some_and(|t| t.is_empty()) {
                clean.owner = None;
            }
            if clean.status.as_ref().is_some_and(|t| t.is_empty()) {
                clean.status = None;
            }
            clean
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use objsync_core::Transition;
    use uuid::Uuid;

    fn action_with(
        owner: Option<Transition<String>>,
        status: Option<Transition<i32>>,
    ) -> Action {
        Action {
            document_id: Uuid::new_v4(),
            object_id: Uuid::new_v4(),
            owner,
            status,
        }
    }

    #[test]
    fn test_strips_empty_transitions() {
        let action = action_with(
            Some(Transition::new(None, None)),
            Some(Transition::new(Some(1), Some(2))),
        );

        let sanitized = sanitize_actions(std::slice::from_ref(&action));

        assert_eq!(sanitized.len(), 1);
        assert!(sanitized[0].owner.is_none());
        assert_eq!(sanitized[0].status, action.status);
        assert_eq!(sanitized[0].document_id, action.document_id);
        assert_eq!(sanitized[0].object_id, action.object_id);
    }

    #[test]
    fn test_keeps_partial_transitions() {
        let action = action_with(Some(Transition::new(Some("a".into()), None)), None);

        let sanitized = sanitize_actions(std::slice::from_ref(&action));

        assert_eq!(sanitized[0].old_owner(), Some("a"));
        assert_eq!(sanitized[0].new_owner(), None);
    }

    #[test]
    fn test_idempotent() {
        let actions = vec![
            action_with(Some(Transition::new(None, None)), None),
            action_with(
                Some(Transition::new(Some("a".into()), Some("b".into()))),
                Some(Transition::new(None, None)),
            ),
        ];

        let once = sanitize_actions(&actions);
        let twice = sanitize_actions(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let actions = vec![action_with(Some(Transition::new(None, None)), None)];

        let sanitized = sanitize_actions(&actions);

        assert!(sanitized[0].owner.is_none());
        // The caller's copy still holds the empty transition.
        assert!(actions[0].owner.is_some());
    }
}

//! Extraction of operation deltas and object references from document
//! payloads.

use serde_json::Value;
use uuid::Uuid;

use objsync_core::{CoreError, Document, ObjectReference, OperationData, OperationDetail};

/// Pulls the operation delta out of a document's payload.
///
/// Returns `Ok(None)` when the `operation_details` section is absent, null,
/// or an empty object; such documents request no transition and are simply
/// not part of the operation join. A section that is present but does not
/// have the expected shape is a payload contract violation.
pub fn extract_operation(document: &Document) -> Result<Option<OperationDetail>, CoreError> {
    let section = match document.payload.get("operation_details") {
        None | Some(Value::Null) => return Ok(None),
        Some(section) => section,
    };

    match section {
        Value::Object(map) if map.is_empty() => Ok(None),
        Value::Object(_) => {
            let operation: OperationData =
                serde_json::from_value(section.clone()).map_err(|e| {
                    CoreError::malformed_payload(
                        document.id,
                        format!("\"operation_details\" has unexpected shape: {e}"),
                    )
                })?;
            Ok(Some(OperationDetail {
                document_id: document.id,
                operation,
            }))
        }
        _ => Err(CoreError::malformed_payload(
            document.id,
            "\"operation_details\" must be an object",
        )),
    }
}

/// Expands a document's `objects` list into one reference per listed id.
///
/// The `objects` key is part of the upstream payload contract: a document
/// without it is malformed, with no defensive fallback.
pub fn expand_references(document: &Document) -> Result<Vec<ObjectReference>, CoreError> {
    let objects = document
        .payload
        .get("objects")
        .ok_or(CoreError::MissingPayloadField {
            document_id: document.id,
            field: "objects",
        })?;

    let items = objects.as_array().ok_or_else(|| {
        CoreError::malformed_payload(document.id, "\"objects\" must be an array")
    })?;

    let mut references = Vec::with_capacity(items.len());
    for item in items {
        let raw = item.as_str().ok_or_else(|| {
            CoreError::malformed_payload(document.id, "\"objects\" entries must be id strings")
        })?;
        let object_id = Uuid::parse_str(raw).map_err(|e| {
            CoreError::malformed_payload(document.id, format!("invalid object id \"{raw}\": {e}"))
        })?;
        references.push(ObjectReference {
            document_id: document.id,
            object_id,
        });
    }

    Ok(references)
}

#[cfg(test)]
mod tests {
    use super::*;
    use objsync_core::now_utc;
    use serde_json::json;

    fn document(payload: Value) -> Document {
        Document {
            id: Uuid::new_v4(),
            received_at: now_utc(),
            document_type: "transfer".into(),
            payload,
            processed_at: None,
        }
    }

    #[test]
    fn test_extract_skips_absent_and_empty_sections() {
        let doc = document(json!({"objects": []}));
        assert!(extract_operation(&doc).unwrap().is_none());

        let doc = document(json!({"objects": [], "operation_details": null}));
        assert!(extract_operation(&doc).unwrap().is_none());

        let doc = document(json!({"objects": [], "operation_details": {}}));
        assert!(extract_operation(&doc).unwrap().is_none());
    }

    #[test]
    fn test_extract_carries_document_id() {
        let doc = document(json!({
            "objects": [],
            "operation_details": {"status": {"old": 1, "new": 2}}
        }));

        let detail = extract_operation(&doc).unwrap().unwrap();
        assert_eq!(detail.document_id, doc.id);
        assert_eq!(detail.operation.status.unwrap().new, Some(2));
        assert!(detail.operation.owner.is_none());
    }

    #[test]
    fn test_extract_rejects_non_object_section() {
        let doc = document(json!({"objects": [], "operation_details": ["x"]}));
        let err = extract_operation(&doc).unwrap_err();
        assert!(err.is_payload_error());
        assert_eq!(err.document_id(), doc.id);
    }

    #[test]
    fn test_extract_rejects_bad_transition_shape() {
        let doc = document(json!({
            "objects": [],
            "operation_details": {"status": {"old": "not-a-code", "new": 2}}
        }));
        assert!(extract_operation(&doc).is_err());
    }

    #[test]
    fn test_expand_emits_one_reference_per_entry() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let doc = document(json!({"objects": [first.to_string(), second.to_string()]}));

        let references = expand_references(&doc).unwrap();
        assert_eq!(
            references,
            vec![
                ObjectReference { document_id: doc.id, object_id: first },
                ObjectReference { document_id: doc.id, object_id: second },
            ]
        );
    }

    #[test]
    fn test_expand_requires_objects_key() {
        let doc = document(json!({"operation_details": {}}));
        let err = expand_references(&doc).unwrap_err();
        assert!(matches!(
            err,
            CoreError::MissingPayloadField { field: "objects", .. }
        ));
    }

    #[test]
    fn test_expand_rejects_bad_entries() {
        let doc = document(json!({"objects": "not-a-list"}));
        assert!(expand_references(&doc).is_err());

        let doc = document(json!({"objects": [42]}));
        assert!(expand_references(&doc).is_err());

        let doc = document(json!({"objects": ["not-a-uuid"]}));
        assert!(expand_references(&doc).is_err());
    }
}

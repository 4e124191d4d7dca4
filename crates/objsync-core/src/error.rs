use thiserror::Error;
use uuid::Uuid;

/// Core error types for objsync domain operations
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("document {document_id}: missing payload field \"{field}\"")]
    MissingPayloadField {
        document_id: Uuid,
        field: &'static str,
    },

    #[error("document {document_id}: {message}")]
    MalformedPayload { document_id: Uuid, message: String },
}

impl CoreError {
    /// Create a new MissingPayloadField error
    pub fn missing_payload_field(document_id: Uuid, field: &'static str) -> Self {
        Self::MissingPayloadField { document_id, field }
    }

    /// Create a new MalformedPayload error
    pub fn malformed_payload(document_id: Uuid, message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            document_id,
            message: message.into(),
        }
    }

    /// Check if this error describes a payload that violates the upstream contract
    pub fn is_payload_error(&self) -> bool {
        matches!(
            self,
            Self::MissingPayloadField { .. } | Self::MalformedPayload { .. }
        )
    }

    /// The document whose payload produced this error
    pub fn document_id(&self) -> Uuid {
        match self {
            Self::MissingPayloadField { document_id, .. }
            | Self::MalformedPayload { document_id, .. } => *document_id,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

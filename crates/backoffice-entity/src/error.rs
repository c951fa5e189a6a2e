//! Error types for entity services
//!
//! The remote API defines no structured error codes, so every variant
//! carries a human-readable message that the UI can show as-is.

/// Failure reported by an [`EntityService`](crate::EntityService)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityError {
    /// Request never produced a response (connection, timeout, bad URL)
    #[error("transport error: {0}")]
    Transport(String),

    /// Service answered with a non-success status
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// No record exists for the requested id
    #[error("record not found: {0}")]
    NotFound(String),

    /// Response body could not be decoded into the record type
    #[error("invalid response body: {0}")]
    Decode(String),

    /// Service refused the operation
    #[error("{0}")]
    Rejected(String),
}

impl EntityError {
    /// Create rejection error
    #[inline]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// Message suitable for a notification or inline error
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Status { message, .. } if !message.is_empty() => message.clone(),
            Self::Rejected(message) => message.clone(),
            other => other.to_string(),
        }
    }

    /// Check if the error means the record does not exist
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Status { status: 404, .. })
    }
}

impl From<reqwest::Error> for EntityError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            Self::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_prefers_body() {
        let err = EntityError::Status {
            status: 422,
            message: "name must be unique".to_string(),
        };
        assert_eq!(err.message(), "name must be unique");
        assert!(err.to_string().contains("422"));
    }

    #[test]
    fn empty_status_message_falls_back_to_display() {
        let err = EntityError::Status {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.message(), "request failed with status 500: ");
    }

    #[test]
    fn not_found_detection() {
        assert!(EntityError::NotFound("7".to_string()).is_not_found());
        assert!(EntityError::Status {
            status: 404,
            message: String::new()
        }
        .is_not_found());
        assert!(!EntityError::rejected("nope").is_not_found());
    }
}

//! Client-side error taxonomy.

use thiserror::Error;

/// Result type alias using `ApiError`.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors produced by remote calls.
///
/// Validation errors never reach this type: form schemas reject bad input
/// before a request is issued.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the connection failed.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request timed out at the transport layer.
    #[error("Request timed out")]
    Timeout,

    /// The server rejected the credentials or the session expired.
    ///
    /// Receiving this error means the session context has already been
    /// invalidated.
    #[error("Authentication failed: {}", message_or_default(.message))]
    Unauthorized {
        /// Server-supplied message, if any.
        message: Option<String>,
    },

    /// The server answered with a non-success status.
    #[error("Server error ({status}): {}", message_or_default(.message))]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-supplied message, if any.
        message: Option<String>,
    },

    /// The server answered 2xx but the envelope reported failure.
    #[error("Operation failed: {0}")]
    Rejected(String),

    /// The response body could not be decoded into the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),
}

fn message_or_default(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or("no message from server")
}

impl ApiError {
    /// Returns true if this failure is transient and worth retrying.
    ///
    /// Only transport timeouts, 503 (Service Unavailable) and 408 (Request
    /// Timeout) qualify. Everything else, including 401 and 500, propagates
    /// without consuming a retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout => true,
            Self::Status { status, .. } => matches!(status, 503 | 408),
            _ => false,
        }
    }

    /// Returns the server-supplied message, falling back to a generic one.
    #[must_use]
    pub fn display_message(&self) -> String {
        match self {
            Self::Unauthorized { message } | Self::Status { message, .. } => message
                .clone()
                .unwrap_or_else(|| "Erro ao comunicar com o servidor".to_string()),
            Self::Rejected(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn timeout_is_retryable() {
        assert!(ApiError::Timeout.is_retryable());
    }

    #[rstest]
    #[case(503, true)]
    #[case(408, true)]
    #[case(400, false)]
    #[case(401, false)]
    #[case(404, false)]
    #[case(500, false)]
    fn status_retryability(#[case] status: u16, #[case] expected: bool) {
        let err = ApiError::Status {
            status,
            message: None,
        };
        assert_eq!(err.is_retryable(), expected);
    }

    #[test]
    fn unauthorized_is_not_retryable() {
        let err = ApiError::Unauthorized { message: None };
        assert!(!err.is_retryable());
    }

    #[test]
    fn transport_is_not_retryable() {
        assert!(!ApiError::Transport("connection refused".into()).is_retryable());
    }

    #[test]
    fn rejected_envelope_is_not_retryable() {
        assert!(!ApiError::Rejected("Conta não encontrada".into()).is_retryable());
    }

    #[test]
    fn display_message_prefers_server_message() {
        let err = ApiError::Status {
            status: 422,
            message: Some("Conta inválida".into()),
        };
        assert_eq!(err.display_message(), "Conta inválida");
    }

    #[test]
    fn display_message_falls_back_when_server_is_silent() {
        let err = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.display_message(), "Erro ao comunicar com o servidor");
    }

    #[test]
    fn error_display() {
        assert_eq!(ApiError::Timeout.to_string(), "Request timed out");
        assert_eq!(
            ApiError::Status {
                status: 503,
                message: Some("indisponível".into())
            }
            .to_string(),
            "Server error (503): indisponível"
        );
    }
}

use thiserror::Error;

use crate::models::SourceKind;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The server answered with a non-success status. `body` is the raw
    /// response text so callers can surface it verbatim.
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("the {api} API does not serve {kind} sources")]
    Unsupported { api: &'static str, kind: SourceKind },

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl EngineError {
    /// True for failures raised while talking to the server, as opposed to
    /// failures while building a request or decoding a response.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            EngineError::Status { .. } | EngineError::Network(_) | EngineError::Timeout
        )
    }

    /// Raw status code of a non-success response, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            EngineError::Status { status, .. } => Some(*status),
            EngineError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_are_transport_errors() {
        let err = EngineError::Status {
            status: 400,
            body: r#"{"code":"parse-failed"}"#.to_string(),
        };
        assert!(err.is_transport());
        assert_eq!(err.status(), Some(400));
        assert!(err.to_string().contains("parse-failed"));
    }

    #[test]
    fn decode_errors_are_not_transport_errors() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = EngineError::Decode(source);
        assert!(!err.is_transport());
        assert_eq!(err.status(), None);
    }
}

use thiserror::Error;

/// Client-level error type.
/// Every variant is converted to user-visible text at the operation boundary
/// via [`ClientError::user_message`]; none of them escape further.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Local, pre-network rejection of form input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Non-2xx response or network failure.
    #[error("Transport error (status {status:?}): {detail:?}")]
    Transport {
        status: Option<u16>,
        detail: Option<String>,
    },

    /// The service answered 2xx but the body could not be interpreted.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        ClientError::Validation(message.into())
    }

    /// Text shown to the user. Validation messages and server-provided details are shown
    /// verbatim; everything else collapses to the operation's generic `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Validation(msg) => msg.clone(),
            ClientError::Transport {
                detail: Some(detail),
                ..
            } if !detail.is_empty() => detail.clone(),
            ClientError::Transport { .. } | ClientError::Malformed(_) => fallback.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Malformed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "Something went wrong";

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = ClientError::validation("Please enter your feedback.");
        assert_eq!(err.user_message(FALLBACK), "Please enter your feedback.");
        assert!(err.is_validation());
    }

    #[test]
    fn test_transport_detail_wins_over_fallback() {
        let err = ClientError::Transport {
            status: Some(400),
            detail: Some("Invalid resume file type: cv.docx. Only PDF allowed.".to_string()),
        };
        assert_eq!(
            err.user_message(FALLBACK),
            "Invalid resume file type: cv.docx. Only PDF allowed."
        );
    }

    #[test]
    fn test_transport_without_detail_uses_fallback() {
        let err = ClientError::Transport {
            status: Some(502),
            detail: None,
        };
        assert_eq!(err.user_message(FALLBACK), FALLBACK);

        let empty = ClientError::Transport {
            status: Some(500),
            detail: Some(String::new()),
        };
        assert_eq!(empty.user_message(FALLBACK), FALLBACK);
    }

    #[test]
    fn test_malformed_is_generic() {
        let err: ClientError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert_eq!(err.user_message(FALLBACK), FALLBACK);
        assert!(!err.is_validation());
    }
}

//! Free-text feedback. Independent of match results.

use std::sync::Arc;

use tracing::info;

use super::{FormStatus, InFlight};
use crate::api_client::MatchTransport;
use crate::errors::ClientError;

pub const FEEDBACK_THANKS: &str = "Thank you for your feedback!";
pub const FEEDBACK_EMPTY: &str = "Please enter your feedback.";
pub const FEEDBACK_FALLBACK: &str = "Failed to submit feedback.";

/// Acknowledgment shown under the feedback form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackAck {
    Success(String),
    Error(String),
}

#[derive(Debug, Default)]
pub struct FeedbackForm {
    pub text: String,
    pub state: FormStatus,
    pub acknowledgment: Option<FeedbackAck>,
}

pub struct FeedbackSubmitter {
    transport: Arc<dyn MatchTransport>,
}

impl FeedbackSubmitter {
    pub fn new(transport: Arc<dyn MatchTransport>) -> Self {
        Self { transport }
    }

    /// Sends the form's text. On success the input is cleared; either way the form
    /// carries an acknowledgment afterwards.
    pub async fn submit_feedback(&self, form: &mut FeedbackForm) -> Result<(), ClientError> {
        form.acknowledgment = None;

        let result = {
            let _in_flight = InFlight::begin(&form.state);
            self.send(&form.text).await
        };

        form.acknowledgment = Some(match &result {
            Ok(()) => {
                info!("Feedback submitted");
                form.text.clear();
                FeedbackAck::Success(FEEDBACK_THANKS.to_string())
            }
            Err(e) => FeedbackAck::Error(e.user_message(FEEDBACK_FALLBACK)),
        });
        result
    }

    async fn send(&self, text: &str) -> Result<(), ClientError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ClientError::validation(FEEDBACK_EMPTY));
        }
        self.transport.post_feedback(text).await
    }
}

//! In-memory [`MatchTransport`] that records calls and replays canned replies.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{MatchPayload, MatchTransport};
use crate::errors::ClientError;
use crate::submission::{FormState, FormWatcher};

#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status { status: u16, detail: Option<String> },
}

impl Reply {
    fn into_result(self) -> Result<Value, ClientError> {
        match self {
            Reply::Json(value) => Ok(value),
            Reply::Status { status, detail } => Err(ClientError::Transport {
                status: Some(status),
                detail,
            }),
        }
    }
}

pub struct FakeTransport {
    reply: Reply,
    pub match_calls: Mutex<Vec<MatchPayload>>,
    pub feedback_calls: Mutex<Vec<String>>,
    form: Mutex<Option<FormWatcher>>,
    /// Form state seen at the moment each request reached the transport.
    pub states_during_match: Mutex<Vec<FormState>>,
    pub states_during_feedback: Mutex<Vec<FormState>>,
}

impl FakeTransport {
    pub fn replying(reply: Reply) -> Self {
        Self {
            reply,
            match_calls: Mutex::new(Vec::new()),
            feedback_calls: Mutex::new(Vec::new()),
            form: Mutex::new(None),
            states_during_match: Mutex::new(Vec::new()),
            states_during_feedback: Mutex::new(Vec::new()),
        }
    }

    pub fn observe_form(&self, watcher: FormWatcher) {
        *self.form.lock().unwrap() = Some(watcher);
    }

    fn form_state(&self) -> Option<FormState> {
        self.form.lock().unwrap().as_ref().map(|w| *w.borrow())
    }

    pub fn match_call_count(&self) -> usize {
        self.match_calls.lock().unwrap().len()
    }

    pub fn feedback_call_count(&self) -> usize {
        self.feedback_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl MatchTransport for FakeTransport {
    async fn post_match(&self, payload: MatchPayload) -> Result<Value, ClientError> {
        if let Some(state) = self.form_state() {
            self.states_during_match.lock().unwrap().push(state);
        }
        self.match_calls.lock().unwrap().push(payload);
        self.reply.clone().into_result()
    }

    async fn post_feedback(&self, feedback_text: &str) -> Result<(), ClientError> {
        if let Some(state) = self.form_state() {
            self.states_during_feedback.lock().unwrap().push(state);
        }
        self.feedback_calls
            .lock()
            .unwrap()
            .push(feedback_text.to_string());
        self.reply.clone().into_result().map(|_| ())
    }
}

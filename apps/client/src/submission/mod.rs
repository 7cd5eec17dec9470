// Form submission: validate local input, call the transport, route the response.
// Errors are returned to the caller, which turns them into user-visible text.

pub mod feedback;
pub mod orchestrator;

pub use feedback::{FeedbackAck, FeedbackForm, FeedbackSubmitter};
pub use orchestrator::{MatchForm, RequestOrchestrator, UploadLimits};

use tokio::sync::watch;

/// Advisory UI state of one submit affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormState {
    pub submit_enabled: bool,
    pub loading: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            submit_enabled: true,
            loading: false,
        }
    }
}

/// Current [`FormState`] of one form, observable while a request is in flight.
pub type FormWatcher = watch::Receiver<FormState>;

#[derive(Debug)]
pub struct FormStatus {
    sender: watch::Sender<FormState>,
}

impl FormStatus {
    pub fn current(&self) -> FormState {
        *self.sender.borrow()
    }

    pub fn subscribe(&self) -> FormWatcher {
        self.sender.subscribe()
    }

    fn set(&self, state: FormState) {
        self.sender.send_replace(state);
    }
}

impl Default for FormStatus {
    fn default() -> Self {
        let (sender, _rx) = watch::channel(FormState::default());
        Self { sender }
    }
}

/// Disables the trigger and shows the loading indicator until dropped.
/// Dropping restores both, whichever way the submission ended.
pub(crate) struct InFlight<'a> {
    status: &'a FormStatus,
}

impl<'a> InFlight<'a> {
    pub(crate) fn begin(status: &'a FormStatus) -> Self {
        status.set(FormState {
            submit_enabled: false,
            loading: true,
        });
        Self { status }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.status.set(FormState::default());
    }
}

use std::sync::Arc;

use tracing::{info, warn};

use crate::api_client::MatchTransport;
use crate::config::Config;
use crate::results::{DetailOptions, SelectionController};
use crate::submission::feedback::FEEDBACK_FALLBACK;
use crate::submission::orchestrator::MATCH_FALLBACK;
use crate::submission::{
    FeedbackAck, FeedbackForm, FeedbackSubmitter, FormWatcher, MatchForm, RequestOrchestrator,
    UploadLimits,
};
use crate::ui::DisplaySurface;

/// Everything one client session owns: the current results, the forms, and the surface
/// they are displayed on. There is no ambient global state; the picker and the submit
/// path both go through this value.
pub struct ClientSession {
    controller: SelectionController,
    orchestrator: RequestOrchestrator,
    feedback: FeedbackSubmitter,
    surface: DisplaySurface,
    feedback_form: FeedbackForm,
}

impl ClientSession {
    pub fn new(config: &Config, transport: Arc<dyn MatchTransport>) -> Self {
        let options = DetailOptions {
            show_zero_scores: config.show_zero_scores,
        };
        Self {
            controller: SelectionController::new(options),
            orchestrator: RequestOrchestrator::new(
                transport.clone(),
                UploadLimits::from_config(config),
            ),
            feedback: FeedbackSubmitter::new(transport),
            surface: DisplaySurface::default(),
            feedback_form: FeedbackForm::default(),
        }
    }

    pub fn surface(&self) -> &DisplaySurface {
        &self.surface
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.controller.selected_index()
    }

    pub fn watch_match_form(&self) -> FormWatcher {
        self.orchestrator.watch_form()
    }

    pub fn watch_feedback_form(&self) -> FormWatcher {
        self.feedback_form.state.subscribe()
    }

    /// Submits the match form. Failures end up in the surface's error banner;
    /// returns whether new results are on display.
    pub async fn submit_match(&mut self, form: &MatchForm) -> bool {
        self.surface.begin_submission();

        match self.orchestrator.submit(form, &mut self.controller).await {
            Ok(change) => {
                self.surface.show_results(&self.controller);
                self.surface.apply(&change, self.controller.selected_index());
                true
            }
            Err(e) => {
                if e.is_validation() {
                    info!("Match form rejected: {e}");
                } else {
                    warn!("Match submission failed: {e}");
                }
                self.surface.show_error(e.user_message(MATCH_FALLBACK));
                false
            }
        }
    }

    /// A direct pick from the picker.
    pub fn pick(&mut self, index: usize) {
        let change = self.controller.select(index);
        self.surface.apply(&change, self.controller.selected_index());
    }

    /// Submits `text` as feedback and returns the acknowledgment to show.
    pub async fn submit_feedback(&mut self, text: &str) -> FeedbackAck {
        self.feedback_form.text = text.to_string();
        match self.feedback.submit_feedback(&mut self.feedback_form).await {
            Err(e) if e.is_validation() => info!("Feedback form rejected: {e}"),
            Err(e) => warn!("Feedback submission failed: {e}"),
            Ok(()) => {}
        }
        self.feedback_form
            .acknowledgment
            .clone()
            .unwrap_or_else(|| FeedbackAck::Error(FEEDBACK_FALLBACK.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::fake::{FakeTransport, Reply};
    use crate::submission::feedback::{FEEDBACK_EMPTY, FEEDBACK_THANKS};
    use crate::submission::orchestrator::MISSING_JOB_DESCRIPTION;
    use serde_json::{json, Value};
    use std::path::PathBuf;
    use tempfile::TempDir;

    struct Harness {
        _dir: TempDir,
        transport: Arc<FakeTransport>,
        session: ClientSession,
        form: MatchForm,
    }

    fn harness_with(config: Config, reply: Reply) -> Harness {
        let dir = TempDir::new().unwrap();
        let resume: PathBuf = dir.path().join("a.pdf");
        std::fs::write(&resume, b"%PDF").unwrap();

        let transport = Arc::new(FakeTransport::replying(reply));
        let session = ClientSession::new(&config, transport.clone());
        Harness {
            _dir: dir,
            transport,
            session,
            form: MatchForm {
                resumes: vec![resume],
                jd_text: Some("Data engineer, 3+ years".to_string()),
                ..MatchForm::default()
            },
        }
    }

    fn harness(body: Value) -> Harness {
        harness_with(Config::default(), Reply::Json(body))
    }

    #[tokio::test]
    async fn test_mixed_batch_end_to_end() {
        let mut h = harness(json!({
            "results": [
                {
                    "resume": {"name": "Ravi"},
                    "job_description": {"title": "Data Engineer"},
                    "match_score": {"overall_score": 0.873}
                },
                {"error": "parse failed", "filename": "a.pdf"}
            ]
        }));

        assert!(h.session.submit_match(&h.form).await);
        let surface = h.session.surface();

        assert_eq!(surface.summary.len(), 2);
        assert_eq!(surface.picker, vec!["Ravi", "Error: a.pdf"]);
        assert_eq!(surface.picker_selected, Some(0));
        assert_eq!(surface.scores.overall_score.as_deref(), Some("87.3%"));
        assert!(surface.resume_visible && surface.jd_visible);
    }

    #[tokio::test]
    async fn test_all_failures_keep_panels_hidden() {
        let mut h = harness(json!({
            "results": [
                {"error": "parse failed", "filename": "a.pdf"},
                {"error": "timeout", "filename": "b.pdf"}
            ]
        }));

        assert!(h.session.submit_match(&h.form).await);
        let surface = h.session.surface();
        assert_eq!(surface.picker, vec!["Error: a.pdf", "Error: b.pdf"]);
        assert!(!surface.resume_visible);
        assert!(!surface.jd_visible);
        assert_eq!(h.session.selected_index(), None);

        h.session.pick(1);
        assert!(!h.session.surface().resume_visible);
        assert_eq!(h.session.selected_index(), None);
    }

    #[tokio::test]
    async fn test_single_response_is_one_entry() {
        let mut h = harness(json!({
            "resume": {"email": "solo@example.com"},
            "job_description": {},
            "match_score": {"overall_score": 0.5}
        }));

        assert!(h.session.submit_match(&h.form).await);
        assert_eq!(h.session.surface().picker, vec!["solo@example.com"]);
        assert_eq!(h.session.selected_index(), Some(0));
    }

    #[tokio::test]
    async fn test_validation_error_lands_in_banner_without_network() {
        let mut h = harness(json!({}));
        h.form.jd_text = None;

        assert!(!h.session.submit_match(&h.form).await);
        assert_eq!(
            h.session.surface().error_banner.as_deref(),
            Some(MISSING_JOB_DESCRIPTION)
        );
        assert_eq!(h.transport.match_call_count(), 0);
    }

    #[tokio::test]
    async fn test_transport_error_uses_fallback_without_detail() {
        let mut h = harness_with(
            Config::default(),
            Reply::Status {
                status: 500,
                detail: None,
            },
        );

        assert!(!h.session.submit_match(&h.form).await);
        assert_eq!(
            h.session.surface().error_banner.as_deref(),
            Some(MATCH_FALLBACK)
        );
        assert!(h.session.surface().render_summary().is_empty());
    }

    #[tokio::test]
    async fn test_zero_overall_score_never_written_under_legacy_guard() {
        let config = Config {
            show_zero_scores: false,
            ..Config::default()
        };
        let mut h = harness_with(
            config,
            Reply::Json(json!({"resume": {}, "match_score": {"overall_score": 0}})),
        );

        assert!(h.session.submit_match(&h.form).await);
        assert_eq!(h.session.surface().scores.overall_score, None);
    }

    #[tokio::test]
    async fn test_zero_overall_score_written_by_default() {
        let mut h = harness(json!({"resume": {}, "match_score": {"overall_score": 0}}));

        assert!(h.session.submit_match(&h.form).await);
        assert_eq!(
            h.session.surface().scores.overall_score.as_deref(),
            Some("0.0%")
        );
    }

    #[tokio::test]
    async fn test_resubmission_replaces_stale_selection() {
        let mut h = harness(json!({
            "results": [{"error": "x"}, {"resume": {"name": "B"}}, {"resume": {"name": "C"}}]
        }));
        assert!(h.session.submit_match(&h.form).await);
        h.session.pick(2);
        assert_eq!(h.session.selected_index(), Some(2));

        assert!(h.session.submit_match(&h.form).await);
        assert_eq!(h.session.selected_index(), Some(1));
        assert_eq!(h.session.controller().result_set().len(), 3);
        assert_eq!(h.transport.match_call_count(), 2);
    }

    #[tokio::test]
    async fn test_feedback_round_trip() {
        let mut h = harness(json!({"message": "Feedback submitted successfully!"}));

        assert_eq!(
            h.session.submit_feedback("  ").await,
            FeedbackAck::Error(FEEDBACK_EMPTY.to_string())
        );
        assert_eq!(h.transport.feedback_call_count(), 0);

        assert_eq!(
            h.session.submit_feedback("Useful scores").await,
            FeedbackAck::Success(FEEDBACK_THANKS.to_string())
        );
        assert!(h.session.feedback_form.text.is_empty());
    }
}

//! Match submission: résumés + one job-description source → `/api/match` → ResultSet.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use tracing::info;

use super::{FormStatus, FormWatcher, InFlight};
use crate::api_client::{JobDescriptionSource, MatchPayload, MatchTransport, UploadFile};
use crate::config::Config;
use crate::errors::ClientError;
use crate::results::{normalize, SelectionChange, SelectionController};

pub const MATCH_FALLBACK: &str = "An error occurred while processing your request";
pub const MISSING_JOB_DESCRIPTION: &str = "Please provide either a job description file or text";
pub const MISSING_RESUME: &str = "Please select at least one resume";

/// Raw form input. A job-description file takes precedence over text.
#[derive(Debug, Clone, Default)]
pub struct MatchForm {
    pub resumes: Vec<PathBuf>,
    pub jd_file: Option<PathBuf>,
    pub jd_text: Option<String>,
}

/// Client-side copy of the service's upload limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimits {
    pub max_mb: u64,
}

impl UploadLimits {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_mb: config.max_upload_mb,
        }
    }

    fn max_bytes(&self) -> u64 {
        self.max_mb * 1024 * 1024
    }
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self { max_mb: 10 }
    }
}

#[derive(Clone, Copy)]
enum JdInput<'a> {
    File(&'a Path),
    Text(&'a str),
}

pub struct RequestOrchestrator {
    transport: Arc<dyn MatchTransport>,
    limits: UploadLimits,
    form_status: FormStatus,
}

impl RequestOrchestrator {
    pub fn new(transport: Arc<dyn MatchTransport>, limits: UploadLimits) -> Self {
        Self {
            transport,
            limits,
            form_status: FormStatus::default(),
        }
    }

    pub fn watch_form(&self) -> FormWatcher {
        self.form_status.subscribe()
    }

    /// Validates `form`, submits it, and on success replaces the controller's result set.
    ///
    /// The submit affordance stays disabled until this returns, on every path.
    pub async fn submit(
        &mut self,
        form: &MatchForm,
        controller: &mut SelectionController,
    ) -> Result<SelectionChange, ClientError> {
        let _in_flight = InFlight::begin(&self.form_status);

        let payload = build_payload(form, &self.limits).await?;
        info!(
            "Submitting {} résumé(s) for matching",
            payload.resumes.len()
        );

        let raw = self.transport.post_match(payload).await?;
        let set = normalize(raw)?;
        info!("Received {} match result(s)", set.len());

        Ok(controller.initialize_from(set))
    }
}

/// Checks every local precondition, then reads the files. No network access.
pub async fn build_payload(
    form: &MatchForm,
    limits: &UploadLimits,
) -> Result<MatchPayload, ClientError> {
    let jd_text = form
        .jd_text
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());
    let jd_input = match (form.jd_file.as_deref(), jd_text) {
        (Some(path), _) => JdInput::File(path),
        (None, Some(text)) => JdInput::Text(text),
        (None, None) => return Err(ClientError::validation(MISSING_JOB_DESCRIPTION)),
    };

    if form.resumes.is_empty() {
        return Err(ClientError::validation(MISSING_RESUME));
    }
    for path in &form.resumes {
        require_extension(path, "pdf", "resume")?;
    }
    if let JdInput::File(path) = jd_input {
        require_extension(path, "txt", "job description")?;
    }

    let mut resumes = Vec::with_capacity(form.resumes.len());
    for path in &form.resumes {
        resumes.push(read_upload(path, limits, "Resume").await?);
    }

    let job_description = match jd_input {
        JdInput::File(path) => {
            JobDescriptionSource::File(read_upload(path, limits, "Job description").await?)
        }
        JdInput::Text(text) => JobDescriptionSource::Text(text.to_string()),
    };

    Ok(MatchPayload {
        resumes,
        job_description,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn require_extension(path: &Path, expected: &str, kind: &str) -> Result<(), ClientError> {
    let matches = path
        .extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(expected))
        .unwrap_or(false);
    if matches {
        Ok(())
    } else {
        Err(ClientError::validation(format!(
            "Invalid {kind} file type: {}. Only {} allowed.",
            file_name(path),
            expected.to_uppercase()
        )))
    }
}

async fn read_upload(
    path: &Path,
    limits: &UploadLimits,
    kind: &str,
) -> Result<UploadFile, ClientError> {
    let unreadable =
        |e: std::io::Error| ClientError::validation(format!("Could not read {}: {e}", path.display()));

    let metadata = tokio::fs::metadata(path).await.map_err(unreadable)?;
    if metadata.len() > limits.max_bytes() {
        return Err(ClientError::validation(format!(
            "{kind} file too large: {}. Max {}MB allowed.",
            file_name(path),
            limits.max_mb
        )));
    }

    let bytes = tokio::fs::read(path).await.map_err(unreadable)?;
    Ok(UploadFile {
        filename: file_name(path),
        bytes: Bytes::from(bytes),
    })
}

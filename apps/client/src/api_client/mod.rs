/// Matching-service client: the single point of entry for every HTTP call this client makes.
///
/// No other module talks to the network. Orchestration code depends on the
/// [`MatchTransport`] trait so it can be exercised without a server.
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::ClientError;

#[cfg(test)]
pub mod fake;

/// One file attached to a multipart request.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub filename: String,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JobDescriptionSource {
    File(UploadFile),
    Text(String),
}

/// Body of `POST /api/match`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchPayload {
    pub resumes: Vec<UploadFile>,
    pub job_description: JobDescriptionSource,
}

#[derive(Debug, Serialize)]
struct FeedbackRequest<'a> {
    feedback_text: &'a str,
}

/// Error body the service sends with non-2xx responses. `detail` is usually a string,
/// but request-validation failures send a list.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Value,
}

#[async_trait]
pub trait MatchTransport: Send + Sync {
    /// Submits résumés and a job description; returns the raw JSON body.
    async fn post_match(&self, payload: MatchPayload) -> Result<Value, ClientError>;

    /// Submits free-text feedback. The success body is ignored.
    async fn post_feedback(&self, feedback_text: &str) -> Result<(), ClientError>;
}

/// reqwest-backed transport. No retries: every failure is surfaced to the user once.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    match_url: String,
    feedback_url: String,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
                .build()?,
            match_url: config.match_url(),
            feedback_url: config.feedback_url(),
        })
    }
}

#[async_trait]
impl MatchTransport for HttpTransport {
    async fn post_match(&self, payload: MatchPayload) -> Result<Value, ClientError> {
        let resume_count = payload.resumes.len();
        let mut form = Form::new();
        for resume in payload.resumes {
            form = form.part("resumes", file_part(resume));
        }
        form = match payload.job_description {
            JobDescriptionSource::File(file) => form.part("job_description", file_part(file)),
            JobDescriptionSource::Text(text) => form.text("jd_text", text),
        };

        debug!("POST {} with {} résumé(s)", self.match_url, resume_count);
        let response = self
            .client
            .post(&self.match_url)
            .multipart(form)
            .send()
            .await
            .map_err(network_failure)?;

        let response = ensure_success(response).await?;
        let body = response.text().await.map_err(network_failure)?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post_feedback(&self, feedback_text: &str) -> Result<(), ClientError> {
        debug!("POST {}", self.feedback_url);
        let response = self
            .client
            .post(&self.feedback_url)
            .json(&FeedbackRequest { feedback_text })
            .send()
            .await
            .map_err(network_failure)?;

        ensure_success(response).await?;
        Ok(())
    }
}

fn file_part(file: UploadFile) -> Part {
    Part::bytes(file.bytes.to_vec()).file_name(file.filename)
}

fn network_failure(e: reqwest::Error) -> ClientError {
    warn!("Matching service request failed: {e}");
    ClientError::Transport {
        status: e.status().map(|s| s.as_u16()),
        detail: None,
    }
}

/// Passes 2xx responses through; converts anything else into a transport error carrying
/// the server's `detail` string when there is one.
async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!("Matching service returned {}: {}", status, body);
    Err(ClientError::Transport {
        status: Some(status.as_u16()),
        detail: detail_from_body(&body),
    })
}

fn detail_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail.as_str().map(str::to_string))
        .filter(|d| !d.is_empty())
}

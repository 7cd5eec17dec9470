use serde::{Deserialize, Serialize};

use super::{non_empty, null_as_default, JdProfile, MatchScore, ResumeProfile};

/// A successfully scored résumé.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSuccess {
    #[serde(deserialize_with = "null_as_default")]
    pub resume: ResumeProfile,
    #[serde(deserialize_with = "null_as_default")]
    pub job_description: JdProfile,
    #[serde(deserialize_with = "null_as_default")]
    pub match_score: MatchScore,
}

/// A résumé the service failed to process.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchFailure {
    pub filename: Option<String>,
    pub error: String,
}

/// The per-résumé result of one matching attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MatchOutcome {
    Success(MatchSuccess),
    Failure(MatchFailure),
}

impl MatchSuccess {
    /// `name`, then `email`, then `"Resume {position}"` (1-based).
    pub fn display_name(&self, position: usize) -> String {
        non_empty(&self.resume.name)
            .or_else(|| non_empty(&self.resume.email))
            .map(str::to_string)
            .unwrap_or_else(|| format!("Resume {position}"))
    }
}

impl MatchFailure {
    /// The filename when the service reported one, else `"Resume {position}"`.
    pub fn display_name(&self, position: usize) -> String {
        non_empty(&self.filename)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Resume {position}"))
    }
}

impl MatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, MatchOutcome::Success(_))
    }

    pub fn as_success(&self) -> Option<&MatchSuccess> {
        match self {
            MatchOutcome::Success(success) => Some(success),
            MatchOutcome::Failure(_) => None,
        }
    }

    /// Picker label. Failures never expose their error text here.
    pub fn label(&self, position: usize) -> String {
        match self {
            MatchOutcome::Success(success) => success.display_name(position),
            MatchOutcome::Failure(failure) => format!("Error: {}", failure.display_name(position)),
        }
    }
}

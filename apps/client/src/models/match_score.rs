use serde::{Deserialize, Serialize};

use super::null_as_default;

/// One skill the service judged similar by meaning rather than exact text.
///
/// The service has emitted this both as a `[jd_term, resume_term, similarity]` triple
/// and as a pre-formatted sentence; both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SemanticMatch {
    Scored(String, String, f64),
    Described(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillMatches {
    #[serde(deserialize_with = "null_as_default")]
    pub matched: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub missing: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub semantically_matched: Vec<SemanticMatch>,
}

/// Matched / missing requirement lines for education or experience.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TermMatches {
    #[serde(deserialize_with = "null_as_default")]
    pub matched: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub missing: Vec<String>,
}

/// Scores for one résumé against the job description.
/// All scores are fractions in [0, 1]; `None` means the service omitted the field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchScore {
    pub overall_score: Option<f64>,
    pub skill_score: Option<f64>,
    pub experience_score: Option<f64>,
    pub education_score: Option<f64>,
    pub semantic_score: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub skill_matches: SkillMatches,
    #[serde(deserialize_with = "null_as_default")]
    pub education_matches: TermMatches,
    #[serde(deserialize_with = "null_as_default")]
    pub experience_matches: TermMatches,
    pub calculated_experience_years: Option<f64>,
}

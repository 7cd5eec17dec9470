//! Compact per-résumé summary cards for a whole result set.

use serde::Serialize;

use super::format::percent_or_na;
use super::normalizer::ResultSet;
use crate::models::MatchOutcome;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SummaryCard {
    Error {
        position: usize,
        filename: Option<String>,
        error: String,
    },
    Score {
        position: usize,
        name: String,
        overall_score: String,
        skill_score: String,
        experience_score: String,
        education_score: String,
        semantic_score: String,
        matched_skills: String,
    },
}

/// One card per outcome, in result-set order. Absent values render as `"N/A"`.
pub fn render_summary(set: &ResultSet) -> Vec<SummaryCard> {
    set.outcomes()
        .iter()
        .enumerate()
        .map(|(index, outcome)| summary_card(outcome, index + 1))
        .collect()
}

fn summary_card(outcome: &MatchOutcome, position: usize) -> SummaryCard {
    match outcome {
        MatchOutcome::Failure(failure) => SummaryCard::Error {
            position,
            filename: failure.filename.clone().filter(|f| !f.is_empty()),
            error: failure.error.clone(),
        },
        MatchOutcome::Success(success) => {
            let score = &success.match_score;
            SummaryCard::Score {
                position,
                name: success.display_name(position),
                overall_score: percent_or_na(score.overall_score),
                skill_score: percent_or_na(score.skill_score),
                experience_score: percent_or_na(score.experience_score),
                education_score: percent_or_na(score.education_score),
                semantic_score: percent_or_na(score.semantic_score),
                matched_skills: score.skill_matches.matched.join(", "),
            }
        }
    }
}

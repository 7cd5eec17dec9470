//! Detail projection for one successfully scored résumé.
//!
//! [`render_detail`] is a pure function: it returns a [`DetailView`] and never touches a
//! display surface. Score slots are `Option`s; `None` means "leave this slot alone".

use serde::Serialize;

use super::format::{percent, required_years, semantic_line, text_or_na};
use crate::models::{EducationEntry, MatchSuccess, WorkEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailOptions {
    /// When false a value of exactly 0 is treated like an absent value and its slot is
    /// not updated (the legacy client's truthy guard).
    pub show_zero_scores: bool,
}

impl Default for DetailOptions {
    fn default() -> Self {
        Self {
            show_zero_scores: true,
        }
    }
}

/// Independently updatable score slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreSlots {
    pub overall_score: Option<String>,
    pub skill_score: Option<String>,
    pub experience_score: Option<String>,
    pub education_score: Option<String>,
    pub semantic_score: Option<String>,
    pub calculated_experience: Option<String>,
}

impl ScoreSlots {
    /// Overwrites only the slots `update` populates.
    pub fn merge(&mut self, update: &ScoreSlots) {
        let pairs = [
            (&mut self.overall_score, &update.overall_score),
            (&mut self.skill_score, &update.skill_score),
            (&mut self.experience_score, &update.experience_score),
            (&mut self.education_score, &update.education_score),
            (&mut self.semantic_score, &update.semantic_score),
            (&mut self.calculated_experience, &update.calculated_experience),
        ];
        for (slot, value) in pairs {
            if let Some(value) = value {
                *slot = Some(value.clone());
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchLists {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub semantic_skills: Vec<String>,
    pub matched_education: Vec<String>,
    pub missing_education: Vec<String>,
    pub matched_experience: Vec<String>,
    pub missing_experience: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkLine {
    pub heading: String,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResumePanel {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub skills: Vec<String>,
    pub work: Vec<WorkLine>,
    pub education: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JdPanel {
    pub title: String,
    pub required_experience: String,
    pub required_education: String,
    pub required_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetailView {
    pub scores: ScoreSlots,
    pub lists: MatchLists,
    pub resume: ResumePanel,
    pub job_description: JdPanel,
}

pub fn render_detail(success: &MatchSuccess, options: DetailOptions) -> DetailView {
    let score = &success.match_score;
    let shown = |value: Option<f64>| value.filter(|v| options.show_zero_scores || *v != 0.0);

    let scores = ScoreSlots {
        overall_score: shown(score.overall_score).map(percent),
        skill_score: shown(score.skill_score).map(percent),
        experience_score: shown(score.experience_score).map(percent),
        education_score: shown(score.education_score).map(percent),
        semantic_score: shown(score.semantic_score).map(percent),
        calculated_experience: shown(score.calculated_experience_years)
            .map(|years| format!("{years:.1} years")),
    };

    let lists = MatchLists {
        matched_skills: score.skill_matches.matched.clone(),
        missing_skills: score.skill_matches.missing.clone(),
        semantic_skills: score
            .skill_matches
            .semantically_matched
            .iter()
            .map(semantic_line)
            .collect(),
        matched_education: score.education_matches.matched.clone(),
        missing_education: score.education_matches.missing.clone(),
        matched_experience: score.experience_matches.matched.clone(),
        missing_experience: score.experience_matches.missing.clone(),
    };

    let resume = &success.resume;
    let resume_panel = ResumePanel {
        name: text_or_na(&resume.name),
        email: text_or_na(&resume.email),
        phone: text_or_na(&resume.phone),
        location: text_or_na(&resume.location),
        summary: text_or_na(&resume.summary),
        skills: resume
            .skills
            .iter()
            .map(|skill| format!("{} ({})", text_or_na(&skill.name), text_or_na(&skill.level)))
            .collect(),
        work: resume.work.iter().map(work_line).collect(),
        education: resume.education.iter().map(education_line).collect(),
    };

    let jd = &success.job_description;
    let jd_panel = JdPanel {
        title: text_or_na(&jd.title),
        required_experience: required_years(jd.required_experience_years),
        required_education: text_or_na(&jd.required_education),
        required_skills: jd.required_skills.clone(),
    };

    DetailView {
        scores,
        lists,
        resume: resume_panel,
        job_description: jd_panel,
    }
}

fn work_line(job: &WorkEntry) -> WorkLine {
    WorkLine {
        heading: format!(
            "{} at {} ({} - {})",
            text_or_na(&job.position),
            text_or_na(&job.company),
            text_or_na(&job.start_date),
            text_or_na(&job.end_date)
        ),
        summary: job.summary.clone().filter(|s| !s.is_empty()),
    }
}

fn education_line(edu: &EducationEntry) -> String {
    format!(
        "{} from {} ({} - {})",
        text_or_na(&edu.study_type),
        text_or_na(&edu.institution),
        text_or_na(&edu.start_date),
        text_or_na(&edu.end_date)
    )
}

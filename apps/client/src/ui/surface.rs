//! Terminal display surface: named slots and panels that view-models are bound into.
//!
//! Slots persist between updates. A score slot the detail view leaves empty keeps
//! whatever it showed before, and hidden panels keep their content until overwritten.

use std::fmt::Write;

use crate::results::detail::{JdPanel, MatchLists, ResumePanel, ScoreSlots};
use crate::results::format::NOT_AVAILABLE;
use crate::results::{DetailView, SelectionChange, SelectionController, SummaryCard};

#[derive(Debug, Clone, Default)]
pub struct DisplaySurface {
    pub error_banner: Option<String>,
    pub results_visible: bool,
    pub summary: Vec<SummaryCard>,
    pub picker: Vec<String>,
    pub picker_selected: Option<usize>,
    pub detail_visible: bool,
    pub scores: ScoreSlots,
    pub lists: MatchLists,
    pub resume: ResumePanel,
    pub resume_visible: bool,
    pub job_description: JdPanel,
    pub jd_visible: bool,
}

impl DisplaySurface {
    /// Reset at the start of a submission: no error, no results.
    pub fn begin_submission(&mut self) {
        self.error_banner = None;
        self.results_visible = false;
    }

    pub fn show_error(&mut self, message: String) {
        self.error_banner = Some(message);
    }

    /// Rebuilds the summary and picker from the controller's current result set.
    pub fn show_results(&mut self, controller: &SelectionController) {
        self.summary = controller.summary();
        self.picker = controller.labels();
        self.picker_selected = controller.selected_index();
        self.results_visible = true;
    }

    pub fn apply(&mut self, change: &SelectionChange, selected: Option<usize>) {
        self.picker_selected = selected;
        match change {
            SelectionChange::Show(view) => self.apply_detail(view),
            SelectionChange::Hide => self.hide_details(),
        }
    }

    /// Writes the view into the slots; panels are revealed only after their content is set.
    pub fn apply_detail(&mut self, view: &DetailView) {
        self.scores.merge(&view.scores);
        self.lists = view.lists.clone();
        self.results_visible = true;
        self.detail_visible = true;

        self.resume = view.resume.clone();
        self.resume_visible = true;

        self.job_description = view.job_description.clone();
        self.jd_visible = true;
    }

    pub fn hide_details(&mut self) {
        self.detail_visible = false;
        self.resume_visible = false;
        self.jd_visible = false;
    }

    pub fn render_summary(&self) -> String {
        let mut out = String::new();
        if !self.results_visible {
            return out;
        }
        let _ = writeln!(out, "Match Results");
        for card in &self.summary {
            match card {
                SummaryCard::Error {
                    position,
                    filename,
                    error,
                } => {
                    let _ = writeln!(out, "\n[Resume {position}: Error]");
                    match filename {
                        Some(filename) => {
                            let _ = writeln!(out, "  {filename}: {error}");
                        }
                        None => {
                            let _ = writeln!(out, "  {error}");
                        }
                    }
                }
                SummaryCard::Score {
                    position,
                    name,
                    overall_score,
                    skill_score,
                    experience_score,
                    education_score,
                    semantic_score,
                    matched_skills,
                } => {
                    let _ = writeln!(out, "\n[Resume {position}: {name}]");
                    let _ = writeln!(out, "  Overall Score:    {overall_score}");
                    let _ = writeln!(out, "  Skill Score:      {skill_score}");
                    let _ = writeln!(out, "  Experience Score: {experience_score}");
                    let _ = writeln!(out, "  Education Score:  {education_score}");
                    let _ = writeln!(out, "  Semantic Score:   {semantic_score}");
                    let _ = writeln!(out, "  Matched Skills:   {matched_skills}");
                }
            }
        }
        out
    }

    pub fn render_picker(&self) -> String {
        let mut out = String::new();
        for (index, label) in self.picker.iter().enumerate() {
            let marker = if self.picker_selected == Some(index) {
                '>'
            } else {
                ' '
            };
            let _ = writeln!(out, "{marker} {}. {label}", index + 1);
        }
        out
    }

    pub fn render_detail(&self) -> String {
        let mut out = String::new();
        if !self.results_visible {
            return out;
        }
        if !self.detail_visible {
            let _ = writeln!(out, "(no résumé selected)");
            return out;
        }

        let slot = |value: &Option<String>| value.clone().unwrap_or_default();
        let _ = writeln!(out, "Overall Score:       {}", slot(&self.scores.overall_score));
        let _ = writeln!(out, "Skill Score:         {}", slot(&self.scores.skill_score));
        let _ = writeln!(out, "Experience Score:    {}", slot(&self.scores.experience_score));
        let _ = writeln!(out, "Education Score:     {}", slot(&self.scores.education_score));
        let _ = writeln!(out, "Semantic Score:      {}", slot(&self.scores.semantic_score));
        let _ = writeln!(
            out,
            "Calculated Experience: {}",
            slot(&self.scores.calculated_experience)
        );

        write_list(&mut out, "Matched Skills", &self.lists.matched_skills);
        write_list(&mut out, "Missing Skills", &self.lists.missing_skills);
        write_list(&mut out, "Semantically Matched", &self.lists.semantic_skills);
        write_list(&mut out, "Matched Education", &self.lists.matched_education);
        write_list(&mut out, "Missing Education", &self.lists.missing_education);
        write_list(&mut out, "Matched Experience", &self.lists.matched_experience);
        write_list(&mut out, "Missing Experience", &self.lists.missing_experience);

        if self.resume_visible {
            let resume = &self.resume;
            let _ = writeln!(out, "\nResume Details");
            let _ = writeln!(out, "  Name:     {}", resume.name);
            let _ = writeln!(out, "  Email:    {}", resume.email);
            let _ = writeln!(out, "  Phone:    {}", resume.phone);
            let _ = writeln!(out, "  Location: {}", resume.location);
            let _ = writeln!(out, "  Summary:  {}", resume.summary);
            write_list(&mut out, "Skills", &resume.skills);
            let _ = writeln!(out, "Work");
            for job in &resume.work {
                let _ = writeln!(out, "  - {}", job.heading);
                if let Some(summary) = &job.summary {
                    let _ = writeln!(out, "    {summary}");
                }
            }
            write_list(&mut out, "Education", &resume.education);
        }

        if self.jd_visible {
            let jd = &self.job_description;
            let _ = writeln!(out, "\nJob Description");
            let _ = writeln!(out, "  Title:               {}", jd.title);
            let _ = writeln!(out, "  Required Experience: {}", jd.required_experience);
            let _ = writeln!(out, "  Required Education:  {}", jd.required_education);
            write_list(&mut out, "Required Skills", &jd.required_skills);
        }
        out
    }
}

fn write_list(out: &mut String, title: &str, items: &[String]) {
    let _ = writeln!(out, "{title}");
    if items.is_empty() {
        let _ = writeln!(out, "  {NOT_AVAILABLE}");
    }
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}

//! Display formatting shared by the summary and detail projections.

use crate::models::{non_empty, SemanticMatch};

pub const NOT_AVAILABLE: &str = "N/A";

/// A [0, 1] fraction as a percentage with one decimal, e.g. `0.873` → `"87.3%"`.
pub fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

pub fn percent_or_na(fraction: Option<f64>) -> String {
    fraction.map(percent).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn text_or_na(value: &Option<String>) -> String {
    non_empty(value).unwrap_or(NOT_AVAILABLE).to_string()
}

/// `"{n}+ years"` for a stated requirement, `"N/A"` when the requirement is 0.
pub fn required_years(years: f64) -> String {
    if years > 0.0 {
        format!("{}+ years", plain_number(years))
    } else {
        NOT_AVAILABLE.to_string()
    }
}

/// Whole numbers without a trailing `.0`, everything else as-is.
fn plain_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

pub fn semantic_line(entry: &SemanticMatch) -> String {
    match entry {
        SemanticMatch::Scored(jd_term, resume_term, similarity) => {
            format!("{jd_term} → {resume_term} ({})", percent(*similarity))
        }
        SemanticMatch::Described(text) => text.clone(),
    }
}

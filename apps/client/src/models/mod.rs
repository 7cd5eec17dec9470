//! Wire and domain types for the matching service's responses.
//!
//! Everything here deserializes leniently: the service omits fields, sends `null`,
//! and fills absent identity fields with `""`, so every member has a default.

pub mod match_score;
pub mod outcome;
pub mod profile;

use serde::{Deserialize, Deserializer};

pub use match_score::{MatchScore, SemanticMatch, SkillMatches, TermMatches};
pub use outcome::{MatchFailure, MatchOutcome, MatchSuccess};
pub use profile::{EducationEntry, JdProfile, ResumeProfile, ResumeSkill, WorkEntry};

/// Treats an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Returns the string only when it is present and non-empty.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

//! Response-shape normalization.
//!
//! `/api/match` answers with either `{ "results": [...] }` or one bare outcome object.
//! [`MatchResponse::classify`] makes that distinction once at the boundary and
//! [`normalize`] turns both into an ordered [`ResultSet`]; nothing downstream looks at
//! the raw shape again.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::info;

use crate::errors::ClientError;
use crate::models::{MatchFailure, MatchOutcome, MatchSuccess};

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("response body is not a JSON object")]
    NotAnObject,

    #[error("result {position} is not a JSON object")]
    ItemNotAnObject { position: usize },

    #[error("result {position} could not be read: {source}")]
    Item {
        position: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl From<NormalizeError> for ClientError {
    fn from(e: NormalizeError) -> Self {
        ClientError::Malformed(e.to_string())
    }
}

/// The two response shapes the matching endpoint produces.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResponse {
    Batch(Vec<Value>),
    Single(Map<String, Value>),
}

impl MatchResponse {
    pub fn classify(raw: Value) -> Result<Self, NormalizeError> {
        let Value::Object(mut body) = raw else {
            return Err(NormalizeError::NotAnObject);
        };

        match body.remove("results") {
            Some(Value::Array(items)) => Ok(MatchResponse::Batch(items)),
            Some(other) => {
                // `results` present but not a sequence: the object is a single outcome
                body.insert("results".to_string(), other);
                Ok(MatchResponse::Single(body))
            }
            None => Ok(MatchResponse::Single(body)),
        }
    }
}

/// Ordered outcomes of one response. Order is the input order and is the identity used
/// for indexed selection; it is never re-sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    outcomes: Vec<MatchOutcome>,
}

impl ResultSet {
    pub fn new(outcomes: Vec<MatchOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[MatchOutcome] {
        &self.outcomes
    }

    pub fn get(&self, index: usize) -> Option<&MatchOutcome> {
        self.outcomes.get(index)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn first_success_index(&self) -> Option<usize> {
        self.outcomes.iter().position(MatchOutcome::is_success)
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_success()).count()
    }
}

/// Converts a raw `/api/match` body into a [`ResultSet`].
pub fn normalize(raw: Value) -> Result<ResultSet, NormalizeError> {
    let outcomes = match MatchResponse::classify(raw)? {
        MatchResponse::Batch(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| outcome_from_item(item, index + 1))
            .collect::<Result<Vec<_>, _>>()?,
        MatchResponse::Single(body) => vec![MatchOutcome::Success(success_from_object(body, 1)?)],
    };

    let set = ResultSet::new(outcomes);
    if set.is_empty() {
        info!("Matching service returned no results");
    } else if set.failure_count() > 0 {
        info!(
            "Batch contained {} failed of {} résumés",
            set.failure_count(),
            set.len()
        );
    }
    Ok(set)
}

fn outcome_from_item(item: Value, position: usize) -> Result<MatchOutcome, NormalizeError> {
    let Value::Object(body) = item else {
        return Err(NormalizeError::ItemNotAnObject { position });
    };

    match body.get("error") {
        Some(error) if is_truthy(error) => Ok(MatchOutcome::Failure(MatchFailure {
            filename: body.get("filename").and_then(text_of),
            error: text_of(error).unwrap_or_default(),
        })),
        _ => Ok(MatchOutcome::Success(success_from_object(body, position)?)),
    }
}

fn success_from_object(
    mut body: Map<String, Value>,
    position: usize,
) -> Result<MatchSuccess, NormalizeError> {
    if let Some(Value::Object(score)) = body.get_mut("match_score") {
        lift_details(score);
    }
    serde_json::from_value(Value::Object(body))
        .map_err(|source| NormalizeError::Item { position, source })
}

/// Moves a nested `details` block up into `match_score`; top-level keys win.
fn lift_details(score: &mut Map<String, Value>) {
    if let Some(Value::Object(details)) = score.remove("details") {
        for (key, value) in details {
            score.entry(key).or_insert(value);
        }
    }
}

/// JavaScript truthiness, which is what the service's consumers have always applied to
/// the `error` marker.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// One job posting as stored in the `jobs` table.
///
/// `skills` is kept as raw JSON because postings arrive with it as a string
/// array, a single string, or null; [`normalize_skills`] flattens the shape
/// at the ingestion boundary so scoring never sees it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: i32,
    pub user_id: i32,
    pub company_name: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub skills: Option<Value>,
    pub budget: Option<f64>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl JobRow {
    /// The text this posting contributes to the matching corpus:
    /// title, description, and space-joined skills.
    pub fn match_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.description.as_deref().unwrap_or(""),
            normalize_skills(self.skills.as_ref()),
        )
    }
}

/// A job posting plus its cosine similarity against the uploaded résumé.
/// Serialized flat: all job fields at the top level alongside `score`.
/// The score lives only in the response; it is never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: JobRow,
    pub score: f64,
}

/// Response body of the matching endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub matches: Vec<ScoredJob>,
}

/// Flattens the loosely-typed `skills` column into one space-joined string.
/// Arrays are joined element by element; non-string elements are coerced via
/// their JSON rendering rather than rejected.
pub fn normalize_skills(raw: Option<&Value>) -> String {
    match raw {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" "),
        Some(other) => other.to_string(),
    }
}

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::matching::matcher::match_jobs;
use crate::models::job::{JobRow, MatchResult};
use crate::state::AppState;

/// POST /api/v1/jobs/match
///
/// Accepts a single-file multipart upload under field `resume`, extracts its
/// text, and scores it against every job in the store. Extraction finishes
/// before the job list is fetched; matching itself is synchronous.
pub async fn handle_match_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchResult>, AppError> {
    let mut resume_bytes = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() == Some("resume") {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read resume upload: {e}")))?;
            resume_bytes = Some(data);
            break;
        }
    }

    let Some(data) = resume_bytes else {
        return Err(AppError::Validation(
            "No resume file uploaded under field 'resume'".to_string(),
        ));
    };

    let resume_text = state.extractor.extract(data).await?;

    // Extraction succeeded but the document carries no usable text:
    // a normal "no matches" outcome, not an error.
    if resume_text.trim().is_empty() {
        return Ok(Json(MatchResult::default()));
    }

    let jobs: Vec<JobRow> = sqlx::query_as("SELECT * FROM jobs ORDER BY created_at DESC")
        .fetch_all(&state.db)
        .await?;

    if jobs.is_empty() {
        return Ok(Json(MatchResult::default()));
    }

    let result = match_jobs(&resume_text, jobs);
    info!(
        "Resume matched against job catalog: {} hit(s)",
        result.matches.len()
    );

    Ok(Json(result))
}

//! Résumé-to-job ranking: scores every job posting against the uploaded
//! résumé and returns the thresholded, descending-sorted matches.
//!
//! Pure CPU work over owned data; infallible for well-typed input, no state
//! carried across calls. Concurrent requests each build their own corpus.

use std::cmp::Ordering;

use crate::matching::tfidf::{build_vectors, cosine_similarity, tokenize};
use crate::models::job::{JobRow, MatchResult, ScoredJob};

/// Minimum cosine similarity for a job to count as a match.
pub const SCORE_THRESHOLD: f64 = 0.05;

/// Scores `jobs` against `resume_text` and returns the ranked matches.
///
/// The corpus is document 0 = résumé, documents 1..N = job texts in input
/// order, rebuilt from scratch on every call. An empty résumé (after trim)
/// or an empty job list short-circuits to zero matches.
pub fn match_jobs(resume_text: &str, jobs: Vec<JobRow>) -> MatchResult {
    if resume_text.trim().is_empty() || jobs.is_empty() {
        return MatchResult::default();
    }

    let mut docs = Vec::with_capacity(jobs.len() + 1);
    docs.push(tokenize(resume_text));
    for job in &jobs {
        docs.push(tokenize(&job.match_text()));
    }

    let vectors = build_vectors(&docs);
    let resume_vector = &vectors[0];

    let mut matches: Vec<ScoredJob> = jobs
        .into_iter()
        .zip(&vectors[1..])
        .filter_map(|(job, vector)| {
            let score = cosine_similarity(resume_vector, vector);
            (score >= SCORE_THRESHOLD).then(|| ScoredJob { job, score })
        })
        .collect();

    // Stable sort: equal scores keep catalog order. Scores are never NaN
    // (zero-norm vectors score 0.0 and were filtered above).
    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    MatchResult { matches }
}

// src/handlers/analytics.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    grading::{self, DEFAULT_CATEGORIES, OverviewFilter},
    models::{
        attempt::{into_attempts, sort_most_recent_first},
        challenge::index_by_id,
        request::{
            AttemptsRequest, CategoryStatsRequest, ChallengeStatsRequest, OverviewRequest,
            SubjectSummaryRequest, TopSubjectsRequest,
        },
    },
};

/// Requested categories, or the default six.
fn categories_or_default(categories: Option<Vec<String>>) -> Vec<String> {
    categories.unwrap_or_else(|| DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect())
}

/// GPA (last 5 attempts) and CGPA (all attempts) for one learner.
///
/// Attempts are ordered newest first here, before the GPA window is taken.
pub async fn gpa(Json(req): Json<AttemptsRequest>) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let mut attempts = into_attempts(req.attempts)?;
    sort_most_recent_first(&mut attempts);

    tracing::debug!("Computing GPA over {} attempts", attempts.len());

    Ok(Json(serde_json::json!({
        "gpa": grading::recent_average(&attempts),
        "cgpa": grading::overall_average(&attempts),
        "total_submissions": attempts.len(),
    })))
}

/// Per-category attempt counts and average scores.
pub async fn category_stats(
    Json(req): Json<CategoryStatsRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let attempts = into_attempts(req.attempts)?;
    let index = index_by_id(&req.challenges);
    let categories = categories_or_default(req.categories);

    tracing::debug!(
        "Category stats: {} attempts, {} categories",
        attempts.len(),
        categories.len()
    );

    Ok(Json(grading::category_stats(&attempts, &index, &categories)))
}

/// Leaderboard of learners by average score.
pub async fn top_subjects(
    State(config): State<Config>,
    Json(req): Json<TopSubjectsRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let attempts = into_attempts(req.attempts)?;
    let limit = req.limit.unwrap_or(config.top_performers_limit);

    Ok(Json(grading::top_subjects(&attempts, &req.subjects, limit)))
}

/// Submission counts and averages per challenge.
pub async fn challenge_stats(
    Json(req): Json<ChallengeStatsRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let attempts = into_attempts(req.attempts)?;

    Ok(Json(grading::challenge_stats(&attempts, &req.challenges)))
}

/// Supervisor analytics: totals, category performance, top performers.
pub async fn overview(
    State(config): State<Config>,
    Json(req): Json<OverviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let attempts = into_attempts(req.attempts)?;
    let index = index_by_id(&req.challenges);
    let filter = OverviewFilter {
        category: req.category,
        period: req.period,
        top_limit: req.limit.unwrap_or(config.top_performers_limit),
    };

    tracing::debug!(
        "Performance overview over {} attempts ({:?}, category {:?})",
        attempts.len(),
        filter.period,
        filter.category
    );

    let overview =
        grading::performance_overview(&attempts, &index, &req.subjects, &filter, Utc::now());

    Ok(Json(overview))
}

/// A learner's dashboard: GPA, CGPA and category skill levels.
///
/// Only attempts belonging to `subject_id` are considered.
pub async fn subject_summary(
    Path(subject_id): Path<String>,
    Json(req): Json<SubjectSummaryRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let subject = req
        .subjects
        .iter()
        .find(|s| s.id == subject_id)
        .ok_or_else(|| AppError::NotFound(format!("Subject '{}' not found", subject_id)))?;

    let mut attempts: Vec<_> = into_attempts(req.attempts)?
        .into_iter()
        .filter(|a| a.subject_id == subject_id)
        .collect();
    sort_most_recent_first(&mut attempts);

    let index = index_by_id(&req.challenges);
    let categories = categories_or_default(req.categories);
    let summary = grading::subject_summary(&attempts, &index, &categories);

    Ok(Json(serde_json::json!({
        "subject_id": subject.id,
        "display_name": subject.display_name,
        "gpa": summary.gpa,
        "cgpa": summary.cgpa,
        "total_submissions": summary.total_submissions,
        "categories": summary.categories,
    })))
}

// src/handlers/grading.rs

use axum::{Json, extract::Path, response::IntoResponse};
use validator::Validate;

use crate::{
    error::AppError,
    grading::{self, grade_of, skill_level},
    models::{
        attempt::ScoredAttempt,
        request::{ReviewRequest, SubmissionRequest},
    },
};

/// Grade and skill level for a single percentage.
pub async fn grade(Path(score): Path<i32>) -> Result<impl IntoResponse, AppError> {
    let grade = grade_of(score);

    Ok(Json(serde_json::json!({
        "score": score,
        "letter": grade.letter,
        "points": grade.points,
        "skill_level": skill_level(score),
    })))
}

/// Grades a submission against its answer key.
///
/// * Score is the rounded percentage of key questions answered correctly.
/// * `time_spent_minutes` is included when both timestamps are given.
pub async fn score_submission(
    Json(req): Json<SubmissionRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let result = grading::score_submission(&req.answers, &req.answer_key);

    let time_spent_minutes = match (req.started_at, req.finished_at) {
        (Some(start), Some(finish)) => Some(grading::minutes_spent(start, finish)),
        _ => None,
    };

    tracing::debug!(
        "Scored submission: {}/{} correct ({}%)",
        result.correct_count,
        result.total_questions,
        result.score_percent
    );

    Ok(Json(serde_json::json!({
        "score": result.score_percent,
        "correct_count": result.correct_count,
        "total_questions": result.total_questions,
        "grade": result.grade,
        "time_spent_minutes": time_spent_minutes,
    })))
}

/// Question-by-question review of a stored attempt.
pub async fn review_attempt(Json(req): Json<ReviewRequest>) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let attempt = ScoredAttempt::try_from(req.attempt)?;
    let tally = grading::answer_correctness(&attempt);

    Ok(Json(serde_json::json!({
        "attempt_id": attempt.attempt_id,
        "score": attempt.score_percent,
        "grade": grade_of(attempt.score_percent),
        "correct": tally.correct,
        "incorrect": tally.incorrect,
        "total_questions": tally.correct + tally.incorrect,
        "questions": grading::review_answers(&attempt),
    })))
}

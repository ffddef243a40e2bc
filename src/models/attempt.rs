// src/models/attempt.rs

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppError;

/// Question ID -> chosen option (e.g. "q1" -> "a").
pub type AnswerMap = BTreeMap<String, String>;

/// One learner's completed submission of a challenge.
///
/// Built once from an [`AttemptDocument`] and never mutated afterwards.
/// The grading module only ever reads these.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredAttempt {
    pub attempt_id: String,
    pub challenge_id: String,

    /// The learner (intern) who made the attempt.
    pub subject_id: String,

    /// Expected to lie in 0..=100; the grading functions do not check.
    pub score_percent: i32,

    pub time_spent_minutes: Option<u32>,
    pub completed_at: DateTime<Utc>,

    /// Category copied onto the attempt at submission time, if any.
    pub category: Option<String>,

    pub answers: Option<AnswerMap>,
    pub correct_answers: Option<AnswerMap>,

    /// Question ID -> question text shown to the learner.
    pub question_details: Option<AnswerMap>,
}

/// A result record as stored by the dashboard's document store.
///
/// Older records carry `studentUid` / `quizId` instead of
/// `internUid` / `challengeId`, and newer ones write both. Resolving
/// those happens here and nowhere else.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AttemptDocument {
    #[validate(length(min = 1, max = 128))]
    pub id: String,

    pub challenge_id: Option<String>,
    pub quiz_id: Option<String>,

    pub intern_uid: Option<String>,
    pub student_uid: Option<String>,

    #[validate(range(min = 0, max = 100, message = "Score must be between 0 and 100."))]
    pub score: i32,

    pub time_spent: Option<u32>,

    /// Null while a result is still pending in the store.
    pub completed_at: Option<DateTime<Utc>>,

    #[validate(length(min = 1, max = 50))]
    pub category: Option<String>,

    pub answers: Option<AnswerMap>,
    pub correct_answers: Option<AnswerMap>,
    pub question_details: Option<AnswerMap>,
}

/// Picks the first non-empty identifier.
fn first_present(primary: Option<String>, legacy: Option<String>) -> Option<String> {
    primary
        .filter(|s| !s.is_empty())
        .or_else(|| legacy.filter(|s| !s.is_empty()))
}

impl TryFrom<AttemptDocument> for ScoredAttempt {
    type Error = AppError;

    fn try_from(doc: AttemptDocument) -> Result<Self, Self::Error> {
        let subject_id = first_present(doc.intern_uid, doc.student_uid).ok_or_else(|| {
            AppError::BadRequest(format!("Result '{}' has no internUid or studentUid", doc.id))
        })?;

        let challenge_id = first_present(doc.challenge_id, doc.quiz_id).ok_or_else(|| {
            AppError::BadRequest(format!("Result '{}' has no challengeId or quizId", doc.id))
        })?;

        let completed_at = doc.completed_at.ok_or_else(|| {
            AppError::BadRequest(format!("Result '{}' has no completedAt", doc.id))
        })?;

        Ok(ScoredAttempt {
            attempt_id: doc.id,
            challenge_id,
            subject_id,
            score_percent: doc.score,
            time_spent_minutes: doc.time_spent,
            completed_at,
            category: doc.category,
            answers: doc.answers,
            correct_answers: doc.correct_answers,
            question_details: doc.question_details,
        })
    }
}

/// Converts a batch of store documents, failing on the first bad one.
pub fn into_attempts(docs: Vec<AttemptDocument>) -> Result<Vec<ScoredAttempt>, AppError> {
    docs.into_iter().map(ScoredAttempt::try_from).collect()
}

/// Orders attempts newest first. Equal timestamps keep their input order.
pub fn sort_most_recent_first(attempts: &mut [ScoredAttempt]) {
    attempts.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
}

// src/grading/review.rs

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::grade::{GradeResult, grade_of};
use crate::models::attempt::{AnswerMap, ScoredAttempt};

/// Right and wrong answer counts for one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerTally {
    pub correct: usize,
    pub incorrect: usize,
}

/// One row of the per-question review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerReview {
    pub question_id: String,
    /// Question text as recorded on the attempt, when the store kept it.
    pub question_text: Option<String>,
    pub chosen: String,
    pub correct_answer: Option<String>,
    pub is_correct: bool,
}

/// Outcome of grading a fresh submission against its answer key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionScore {
    pub correct_count: usize,
    pub total_questions: usize,
    pub score_percent: i32,
    pub grade: GradeResult,
}

/// Counts answered questions that match the stored answer key.
///
/// Questions with no stored correct answer count as incorrect.
/// An attempt without recorded answers has zero questions.
pub fn answer_correctness(attempt: &ScoredAttempt) -> AnswerTally {
    let Some(answers) = &attempt.answers else {
        return AnswerTally {
            correct: 0,
            incorrect: 0,
        };
    };

    let correct = answers
        .iter()
        .filter(|(q_id, chosen)| is_match(attempt.correct_answers.as_ref(), q_id, chosen))
        .count();

    AnswerTally {
        correct,
        incorrect: answers.len() - correct,
    }
}

/// Per-question breakdown, ordered by question ID.
pub fn review_answers(attempt: &ScoredAttempt) -> Vec<AnswerReview> {
    let Some(answers) = &attempt.answers else {
        return Vec::new();
    };

    answers
        .iter()
        .map(|(q_id, chosen)| AnswerReview {
            question_id: q_id.clone(),
            question_text: attempt
                .question_details
                .as_ref()
                .and_then(|details| details.get(q_id))
                .cloned(),
            chosen: chosen.clone(),
            correct_answer: attempt
                .correct_answers
                .as_ref()
                .and_then(|key| key.get(q_id))
                .cloned(),
            is_correct: is_match(attempt.correct_answers.as_ref(), q_id, chosen),
        })
        .collect()
}

fn is_match(key: Option<&AnswerMap>, q_id: &str, chosen: &str) -> bool {
    key.and_then(|key| key.get(q_id))
        .is_some_and(|correct| correct == chosen)
}

/// Grades submitted answers against the challenge's answer key.
///
/// The key decides how many questions there are; answers to questions
/// outside the key are ignored. Score is the rounded percentage correct.
pub fn score_submission(answers: &AnswerMap, answer_key: &AnswerMap) -> SubmissionScore {
    let total_questions = answer_key.len();

    let correct_count = answer_key
        .iter()
        .filter(|(q_id, correct)| answers.get(*q_id).is_some_and(|a| a == *correct))
        .count();

    let score_percent = if total_questions == 0 {
        0
    } else {
        (correct_count as f64 / total_questions as f64 * 100.0).round() as i32
    };

    SubmissionScore {
        correct_count,
        total_questions,
        score_percent,
        grade: grade_of(score_percent),
    }
}

/// Whole minutes between start and finish, rounded up.
pub fn minutes_spent(started_at: DateTime<Utc>, finished_at: DateTime<Utc>) -> u32 {
    let millis = (finished_at - started_at).num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    u32::try_from((millis + 59_999) / 60_000).unwrap_or(u32::MAX)
}

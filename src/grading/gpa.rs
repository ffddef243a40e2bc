// src/grading/gpa.rs

use super::grade::grade_of;
use crate::models::attempt::ScoredAttempt;

/// Number of leading attempts that count towards the GPA.
pub const RECENT_WINDOW: usize = 5;

/// GPA: mean grade points of the first [`RECENT_WINDOW`] attempts.
///
/// Takes attempts in the order given. Callers that want "most recent"
/// must sort newest first beforehand; this function never reorders.
pub fn recent_average(attempts: &[ScoredAttempt]) -> f64 {
    let window = attempts.len().min(RECENT_WINDOW);
    mean_points(&attempts[..window])
}

/// CGPA: mean grade points over every attempt.
pub fn overall_average(attempts: &[ScoredAttempt]) -> f64 {
    mean_points(attempts)
}

fn mean_points(attempts: &[ScoredAttempt]) -> f64 {
    if attempts.is_empty() {
        return 0.0;
    }

    let total: f64 = attempts
        .iter()
        .map(|a| grade_of(a.score_percent).points)
        .sum();

    round_to_hundredths(total / attempts.len() as f64)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// src/grading/mod.rs

//! Grading and aggregation over scored attempts.
//!
//! Everything here is a pure function of its inputs: no I/O, no shared
//! state, and no error type. Bad inputs degrade to a default bucket or a
//! zero result.

pub mod gpa;
pub mod grade;
pub mod overview;
pub mod review;
pub mod rollup;

use crate::models::{attempt::ScoredAttempt, challenge::ChallengeIndex};

pub use gpa::{RECENT_WINDOW, overall_average, recent_average};
pub use grade::{GradeResult, Letter, SkillLevel, grade_of, skill_level};
pub use overview::{
    OverviewFilter, PerformanceOverview, SubjectSummary, TimePeriod, performance_overview,
    subject_summary,
};
pub use review::{
    AnswerReview, AnswerTally, SubmissionScore, answer_correctness, minutes_spent,
    review_answers, score_submission,
};
pub use rollup::{
    CategoryStat, ChallengeStat, SubjectRanking, category_stats, challenge_stats, top_subjects,
};

/// Categories the dashboards report on when the caller names none.
pub const DEFAULT_CATEGORIES: [&str; 6] = ["WIFI", "VoIP", "CCTV", "LAN", "Operations", "Security"];

/// The attempt's own category, else its challenge's, else none.
pub fn resolve_category<'a>(
    attempt: &'a ScoredAttempt,
    challenges: &ChallengeIndex<'a>,
) -> Option<&'a str> {
    attempt.category.as_deref().or_else(|| {
        challenges
            .get(attempt.challenge_id.as_str())
            .copied()
            .map(|c| c.category.as_str())
    })
}

/// Mean of integer percentages, rounded half up. Zero when empty.
pub(crate) fn mean_percent<I>(scores: I) -> i32
where
    I: IntoIterator<Item = i32>,
{
    let (sum, count) = scores
        .into_iter()
        .fold((0i64, 0usize), |(sum, count), s| (sum + i64::from(s), count + 1));

    if count == 0 {
        return 0;
    }

    (sum as f64 / count as f64 + 0.5).floor() as i32
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{TimeZone, Utc};

    use crate::models::{
        attempt::ScoredAttempt,
        challenge::{ChallengeDefinition, Difficulty},
    };

    pub fn attempt(id: &str, challenge_id: &str, subject_id: &str, score: i32) -> ScoredAttempt {
        ScoredAttempt {
            attempt_id: id.to_string(),
            challenge_id: challenge_id.to_string(),
            subject_id: subject_id.to_string(),
            score_percent: score,
            time_spent_minutes: None,
            completed_at: Utc.with_ymd_and_hms(2025, 10, 1, 12, 0, 0).unwrap(),
            category: None,
            answers: None,
            correct_answers: None,
            question_details: None,
        }
    }

    pub fn challenge(id: &str, category: &str) -> ChallengeDefinition {
        ChallengeDefinition {
            challenge_id: id.to_string(),
            category: category.to_string(),
            difficulty: Difficulty::Beginner,
            title: format!("{} basics", category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{attempt, challenge};
    use super::*;
    use crate::models::challenge::index_by_id;

    #[test]
    fn test_mean_percent_rounds_half_up() {
        assert_eq!(mean_percent(Vec::new()), 0);
        assert_eq!(mean_percent([70, 71]), 71);
        assert_eq!(mean_percent([70, 70, 71]), 70);
        assert_eq!(mean_percent([100, 0, 0]), 33);
    }

    #[test]
    fn test_attempt_category_takes_precedence() {
        let challenges = vec![challenge("c1", "LAN")];
        let index = index_by_id(&challenges);

        let mut tagged = attempt("r1", "c1", "s1", 80);
        tagged.category = Some("WIFI".to_string());
        assert_eq!(resolve_category(&tagged, &index), Some("WIFI"));

        let untagged = attempt("r2", "c1", "s1", 80);
        assert_eq!(resolve_category(&untagged, &index), Some("LAN"));

        let orphan = attempt("r3", "missing", "s1", 80);
        assert_eq!(resolve_category(&orphan, &index), None);
    }
}

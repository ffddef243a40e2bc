// src/grading/rollup.rs

use std::collections::HashMap;

use serde::Serialize;

use super::{mean_percent, resolve_category};
use crate::models::{
    attempt::ScoredAttempt,
    challenge::{ChallengeDefinition, ChallengeIndex, Difficulty},
    subject::Subject,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStat {
    pub category: String,
    pub attempt_count: usize,
    pub average_score_percent: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectRanking {
    pub subject_id: String,
    pub display_name: String,
    pub attempt_count: usize,
    pub average_score_percent: i32,
}

/// Submission count and average for one challenge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChallengeStat {
    pub challenge_id: String,
    pub title: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub submission_count: usize,
    pub average_score_percent: i32,
}

/// Per-category counts and averages, one row per requested category.
///
/// Rows come back in the order of `categories` and are never dropped;
/// a category with no attempts reports zero. Attempts whose category
/// cannot be resolved are left out of every row.
pub fn category_stats<S: AsRef<str>>(
    attempts: &[ScoredAttempt],
    challenges: &ChallengeIndex<'_>,
    categories: &[S],
) -> Vec<CategoryStat> {
    let mut scores_by_category: HashMap<&str, Vec<i32>> = HashMap::new();
    for attempt in attempts {
        if let Some(category) = resolve_category(attempt, challenges) {
            scores_by_category
                .entry(category)
                .or_default()
                .push(attempt.score_percent);
        }
    }

    categories
        .iter()
        .map(|category| {
            let category = category.as_ref();
            let scores = scores_by_category
                .get(category)
                .map(Vec::as_slice)
                .unwrap_or_default();
            CategoryStat {
                category: category.to_string(),
                attempt_count: scores.len(),
                average_score_percent: mean_percent(scores.iter().copied()),
            }
        })
        .collect()
}

/// Ranks subjects by average score, best first.
///
/// Subjects without attempts are skipped. Ties keep the order in which
/// `subjects` lists them. Attempts by unlisted subjects are ignored.
pub fn top_subjects(
    attempts: &[ScoredAttempt],
    subjects: &[Subject],
    limit: usize,
) -> Vec<SubjectRanking> {
    let mut scores_by_subject: HashMap<&str, Vec<i32>> = HashMap::new();
    for attempt in attempts {
        scores_by_subject
            .entry(attempt.subject_id.as_str())
            .or_default()
            .push(attempt.score_percent);
    }

    let mut rankings: Vec<SubjectRanking> = subjects
        .iter()
        .filter_map(|subject| {
            let scores = scores_by_subject.get(subject.id.as_str())?;
            Some(SubjectRanking {
                subject_id: subject.id.clone(),
                display_name: subject.display_name.clone(),
                attempt_count: scores.len(),
                average_score_percent: mean_percent(scores.iter().copied()),
            })
        })
        .collect();

    // `sort_by` is stable, which is what keeps ties in input order.
    rankings.sort_by(|a, b| b.average_score_percent.cmp(&a.average_score_percent));
    rankings.truncate(limit);
    rankings
}

/// One row per challenge, in the order given.
pub fn challenge_stats(
    attempts: &[ScoredAttempt],
    challenges: &[ChallengeDefinition],
) -> Vec<ChallengeStat> {
    let mut scores_by_challenge: HashMap<&str, Vec<i32>> = HashMap::new();
    for attempt in attempts {
        scores_by_challenge
            .entry(attempt.challenge_id.as_str())
            .or_default()
            .push(attempt.score_percent);
    }

    challenges
        .iter()
        .map(|challenge| {
            let scores = scores_by_challenge
                .get(challenge.challenge_id.as_str())
                .map(Vec::as_slice)
                .unwrap_or_default();
            ChallengeStat {
                challenge_id: challenge.challenge_id.clone(),
                title: challenge.title.clone(),
                category: challenge.category.clone(),
                difficulty: challenge.difficulty,
                submission_count: scores.len(),
                average_score_percent: mean_percent(scores.iter().copied()),
            }
        })
        .collect()
}

// src/grading/overview.rs

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{
    DEFAULT_CATEGORIES, gpa, mean_percent, resolve_category,
    grade::{SkillLevel, skill_level},
    rollup::{CategoryStat, SubjectRanking, category_stats, top_subjects},
};
use crate::models::{attempt::ScoredAttempt, challenge::ChallengeIndex, subject::Subject};

/// Look-back window for the supervisor analytics page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum TimePeriod {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "last_7_days")]
    Last7Days,
    #[serde(rename = "last_30_days")]
    Last30Days,
    #[serde(rename = "last_90_days")]
    Last90Days,
}

impl TimePeriod {
    /// Earliest completion time still inside the window, if bounded.
    pub fn cutoff(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let days = match self {
            TimePeriod::All => return None,
            TimePeriod::Last7Days => 7,
            TimePeriod::Last30Days => 30,
            TimePeriod::Last90Days => 90,
        };
        Some(now - Duration::days(days))
    }
}

#[derive(Debug, Clone, Default)]
pub struct OverviewFilter {
    /// Only attempts resolving to this category; `None` keeps all.
    pub category: Option<String>,
    pub period: TimePeriod,
    pub top_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceOverview {
    pub total_attempts: usize,
    pub average_score_percent: i32,
    pub average_time_minutes: i32,
    pub active_subjects: usize,
    pub category_performance: Vec<CategoryStat>,
    pub top_performers: Vec<SubjectRanking>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySkill {
    #[serde(flatten)]
    pub stat: CategoryStat,
    pub skill_level: SkillLevel,
}

/// A learner's own dashboard numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectSummary {
    pub gpa: f64,
    pub cgpa: f64,
    pub total_submissions: usize,
    pub categories: Vec<CategorySkill>,
}

/// Supervisor-wide analytics over a filtered set of attempts.
///
/// `now` anchors the time period so the result depends only on inputs.
pub fn performance_overview(
    attempts: &[ScoredAttempt],
    challenges: &ChallengeIndex<'_>,
    subjects: &[Subject],
    filter: &OverviewFilter,
    now: DateTime<Utc>,
) -> PerformanceOverview {
    let cutoff = filter.period.cutoff(now);

    let filtered: Vec<ScoredAttempt> = attempts
        .iter()
        .filter(|a| match filter.category.as_deref() {
            Some(wanted) => resolve_category(a, challenges) == Some(wanted),
            None => true,
        })
        .filter(|a| cutoff.is_none_or(|cutoff| a.completed_at >= cutoff))
        .cloned()
        .collect();

    let active_subjects = filtered
        .iter()
        .map(|a| a.subject_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    PerformanceOverview {
        total_attempts: filtered.len(),
        average_score_percent: mean_percent(filtered.iter().map(|a| a.score_percent)),
        average_time_minutes: mean_percent(filtered.iter().map(|a| {
            i32::try_from(a.time_spent_minutes.unwrap_or(0)).unwrap_or(i32::MAX)
        })),
        active_subjects,
        category_performance: category_stats(&filtered, challenges, &DEFAULT_CATEGORIES),
        top_performers: top_subjects(&filtered, subjects, filter.top_limit),
    }
}

/// GPA, CGPA and per-category skill for one learner.
///
/// `attempts` should already be restricted to that learner and ordered
/// newest first, since the GPA window follows input order.
pub fn subject_summary<S: AsRef<str>>(
    attempts: &[ScoredAttempt],
    challenges: &ChallengeIndex<'_>,
    categories: &[S],
) -> SubjectSummary {
    let categories = category_stats(attempts, challenges, categories)
        .into_iter()
        .map(|stat| CategorySkill {
            skill_level: skill_level(stat.average_score_percent),
            stat,
        })
        .collect();

    SubjectSummary {
        gpa: gpa::recent_average(attempts),
        cgpa: gpa::overall_average(attempts),
        total_submissions: attempts.len(),
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::test_support::{attempt, challenge};
    use crate::models::challenge::index_by_id;

    fn subject(id: &str, name: &str) -> Subject {
        Subject {
            id: id.to_string(),
            display_name: name.to_string(),
        }
    }

    fn days_ago(a: ScoredAttempt, now: DateTime<Utc>, days: i64) -> ScoredAttempt {
        ScoredAttempt {
            completed_at: now - Duration::days(days),
            ..a
        }
    }

    #[test]
    fn test_time_period_cutoff() {
        let now = attempt("r", "c", "s", 0).completed_at;
        assert_eq!(TimePeriod::All.cutoff(now), None);
        assert_eq!(TimePeriod::Last7Days.cutoff(now), Some(now - Duration::days(7)));
        assert_eq!(TimePeriod::Last90Days.cutoff(now), Some(now - Duration::days(90)));
    }

    #[test]
    fn test_time_period_wire_names() {
        let period: TimePeriod = serde_json::from_str("\"last_30_days\"").unwrap();
        assert_eq!(period, TimePeriod::Last30Days);
    }

    #[test]
    fn test_overview_of_nothing_is_zeroed() {
        let overview = performance_overview(
            &[],
            &ChallengeIndex::new(),
            &[],
            &OverviewFilter {
                top_limit: 5,
                ..Default::default()
            },
            Utc::now(),
        );

        assert_eq!(overview.total_attempts, 0);
        assert_eq!(overview.average_score_percent, 0);
        assert_eq!(overview.average_time_minutes, 0);
        assert_eq!(overview.active_subjects, 0);
        assert_eq!(overview.category_performance.len(), DEFAULT_CATEGORIES.len());
        assert!(overview.top_performers.is_empty());
    }

    #[test]
    fn test_overview_filters_by_category_and_period() {
        let now = attempt("r", "c", "s", 0).completed_at;
        let challenges = vec![challenge("c-wifi", "WIFI"), challenge("c-lan", "LAN")];
        let index = index_by_id(&challenges);
        let subjects = vec![subject("s1", "Ama"), subject("s2", "Kofi")];

        let mut timed = attempt("r1", "c-wifi", "s1", 80);
        timed.time_spent_minutes = Some(9);

        let attempts = vec![
            days_ago(timed, now, 1),
            days_ago(attempt("r2", "c-wifi", "s2", 61), now, 3),
            days_ago(attempt("r3", "c-wifi", "s2", 100), now, 40),
            days_ago(attempt("r4", "c-lan", "s1", 20), now, 2),
        ];

        let filter = OverviewFilter {
            category: Some("WIFI".to_string()),
            period: TimePeriod::Last30Days,
            top_limit: 5,
        };

        let overview = performance_overview(&attempts, &index, &subjects, &filter, now);

        assert_eq!(overview.total_attempts, 2);
        assert_eq!(overview.average_score_percent, 71);
        // (9 + 0) / 2 rounds up to 5
        assert_eq!(overview.average_time_minutes, 5);
        assert_eq!(overview.active_subjects, 2);

        let wifi = &overview.category_performance[0];
        assert_eq!(wifi.category, "WIFI");
        assert_eq!(wifi.attempt_count, 2);
        let lan = &overview.category_performance[3];
        assert_eq!(lan.category, "LAN");
        assert_eq!(lan.attempt_count, 0);

        let ids: Vec<&str> = overview
            .top_performers
            .iter()
            .map(|r| r.subject_id.as_str())
            .collect();
        assert_eq!(ids, vec!["s1", "s2"]);
    }

    #[test]
    fn test_subject_summary() {
        let challenges = vec![challenge("c-wifi", "WIFI"), challenge("c-voip", "VoIP")];
        let index = index_by_id(&challenges);

        let attempts = vec![
            attempt("r1", "c-wifi", "s1", 95),
            attempt("r2", "c-wifi", "s1", 85),
            attempt("r3", "c-voip", "s1", 55),
        ];

        let summary = subject_summary(&attempts, &index, &["WIFI", "VoIP", "CCTV"]);

        // (4 + 4 + 1) / 3
        assert_eq!(summary.gpa, 3.0);
        assert_eq!(summary.cgpa, 3.0);
        assert_eq!(summary.total_submissions, 3);

        assert_eq!(summary.categories[0].stat.average_score_percent, 90);
        assert_eq!(summary.categories[0].skill_level, SkillLevel::Expert);
        assert_eq!(summary.categories[1].skill_level, SkillLevel::Learning);
        assert_eq!(summary.categories[2].stat.attempt_count, 0);
        assert_eq!(summary.categories[2].skill_level, SkillLevel::Learning);
    }
}

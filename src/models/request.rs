// src/models/request.rs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::{
    grading::TimePeriod,
    models::{
        attempt::{AnswerMap, AttemptDocument},
        challenge::ChallengeDefinition,
        subject::Subject,
    },
};

/// Attempts of a single learner, for GPA / CGPA.
#[derive(Debug, Deserialize, Validate)]
pub struct AttemptsRequest {
    #[validate(nested)]
    pub attempts: Vec<AttemptDocument>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CategoryStatsRequest {
    #[validate(nested)]
    pub attempts: Vec<AttemptDocument>,

    #[serde(default)]
    #[validate(nested)]
    pub challenges: Vec<ChallengeDefinition>,

    /// Defaults to the six networking categories.
    #[validate(custom(function = validate_categories))]
    pub categories: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct TopSubjectsRequest {
    #[validate(nested)]
    pub attempts: Vec<AttemptDocument>,

    #[validate(nested)]
    pub subjects: Vec<Subject>,

    /// Defaults to the configured leaderboard size.
    #[validate(range(max = 100))]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ChallengeStatsRequest {
    #[validate(nested)]
    pub attempts: Vec<AttemptDocument>,

    #[validate(nested)]
    pub challenges: Vec<ChallengeDefinition>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct OverviewRequest {
    #[validate(nested)]
    pub attempts: Vec<AttemptDocument>,

    #[serde(default)]
    #[validate(nested)]
    pub challenges: Vec<ChallengeDefinition>,

    #[serde(default)]
    #[validate(nested)]
    pub subjects: Vec<Subject>,

    #[validate(length(min = 1, max = 50))]
    pub category: Option<String>,

    #[serde(default)]
    pub period: TimePeriod,

    #[validate(range(max = 100))]
    pub limit: Option<usize>,
}

/// Attempts may belong to anyone; the path picks the learner.
#[derive(Debug, Deserialize, Validate)]
pub struct SubjectSummaryRequest {
    #[validate(nested)]
    pub attempts: Vec<AttemptDocument>,

    #[serde(default)]
    #[validate(nested)]
    pub challenges: Vec<ChallengeDefinition>,

    #[validate(nested)]
    pub subjects: Vec<Subject>,

    #[validate(custom(function = validate_categories))]
    pub categories: Option<Vec<String>>,
}

/// A fresh submission to be graded against its key.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmissionRequest {
    #[validate(length(max = 500))]
    pub answers: AnswerMap,

    #[validate(length(min = 1, max = 500))]
    pub answer_key: AnswerMap,

    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReviewRequest {
    #[validate(nested)]
    pub attempt: AttemptDocument,
}

fn validate_categories(categories: &[String]) -> Result<(), validator::ValidationError> {
    if categories.len() > 50 {
        return Err(validator::ValidationError::new("too_many_categories"));
    }
    for category in categories {
        if category.is_empty() || category.len() > 50 {
            return Err(validator::ValidationError::new("invalid_category_label"));
        }
    }
    Ok(())
}

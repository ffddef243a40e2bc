// src/models/subject.rs

use serde::Deserialize;
use validator::Validate;

/// A learner as listed by the dashboard (the store's `uid` / `name`).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Subject {
    #[serde(alias = "uid")]
    #[validate(length(min = 1, max = 128))]
    pub id: String,

    #[serde(alias = "name")]
    #[validate(length(max = 100))]
    pub display_name: String,
}

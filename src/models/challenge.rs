// src/models/challenge.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A quiz authored by a supervisor. Read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDefinition {
    /// Store documents call this `id`.
    #[serde(alias = "id")]
    #[validate(length(min = 1, max = 128))]
    pub challenge_id: String,

    /// Networking-domain tag, e.g. "WIFI" or "VoIP".
    #[validate(length(min = 1, max = 50))]
    pub category: String,

    pub difficulty: Difficulty,

    #[validate(length(max = 200))]
    pub title: String,
}

/// Challenges keyed by their ID, borrowed from a slice.
pub type ChallengeIndex<'a> = HashMap<&'a str, &'a ChallengeDefinition>;

/// Builds a lookup table. A later duplicate ID replaces an earlier one.
pub fn index_by_id(challenges: &[ChallengeDefinition]) -> ChallengeIndex<'_> {
    challenges
        .iter()
        .map(|c| (c.challenge_id.as_str(), c))
        .collect()
}

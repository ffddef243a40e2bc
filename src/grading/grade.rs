// src/grading/grade.rs

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    F,
}

/// Letter grade and the grade points it is worth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeResult {
    pub letter: Letter,
    pub points: f64,
}

/// Maps a percentage score to a grade.
///
/// | Score | Letter | Points |
/// |-------|--------|--------|
/// | >= 80 | A      | 4.0    |
/// | >= 70 | B      | 3.0    |
/// | >= 60 | C      | 2.0    |
/// | >= 50 | D      | 1.0    |
/// | < 50  | F      | 0.0    |
///
/// Any integer is accepted; out-of-range values land in the nearest bucket.
pub fn grade_of(score_percent: i32) -> GradeResult {
    let (letter, points) = match score_percent {
        s if s >= 80 => (Letter::A, 4.0),
        s if s >= 70 => (Letter::B, 3.0),
        s if s >= 60 => (Letter::C, 2.0),
        s if s >= 50 => (Letter::D, 1.0),
        _ => (Letter::F, 0.0),
    };
    GradeResult { letter, points }
}

/// Proficiency label shown next to a category average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkillLevel {
    Expert,
    Advanced,
    Intermediate,
    Beginner,
    Learning,
}

pub fn skill_level(average_percent: i32) -> SkillLevel {
    match average_percent {
        a if a >= 90 => SkillLevel::Expert,
        a if a >= 80 => SkillLevel::Advanced,
        a if a >= 70 => SkillLevel::Intermediate,
        a if a >= 60 => SkillLevel::Beginner,
        _ => SkillLevel::Learning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(grade_of(100).letter, Letter::A);
        assert_eq!(grade_of(80), GradeResult { letter: Letter::A, points: 4.0 });
        assert_eq!(grade_of(79), GradeResult { letter: Letter::B, points: 3.0 });
        assert_eq!(grade_of(70), GradeResult { letter: Letter::B, points: 3.0 });
        assert_eq!(grade_of(69), GradeResult { letter: Letter::C, points: 2.0 });
        assert_eq!(grade_of(60).letter, Letter::C);
        assert_eq!(grade_of(59).letter, Letter::D);
        assert_eq!(grade_of(50), GradeResult { letter: Letter::D, points: 1.0 });
        assert_eq!(grade_of(49), GradeResult { letter: Letter::F, points: 0.0 });
        assert_eq!(grade_of(0).letter, Letter::F);
    }

    #[test]
    fn test_out_of_range_scores_are_not_rejected() {
        assert_eq!(grade_of(-20).letter, Letter::F);
        assert_eq!(grade_of(150).letter, Letter::A);
        assert_eq!(grade_of(i32::MIN).points, 0.0);
        assert_eq!(grade_of(i32::MAX).points, 4.0);
    }

    #[test]
    fn test_points_never_decrease_as_score_rises() {
        let mut previous = grade_of(-10).points;
        for score in -9..=110 {
            let points = grade_of(score).points;
            assert!(points >= previous, "points dropped at {}", score);
            previous = points;
        }
    }

    #[test]
    fn test_letter_serializes_as_plain_string() {
        let json = serde_json::to_value(grade_of(72)).unwrap();
        assert_eq!(json, serde_json::json!({ "letter": "B", "points": 3.0 }));
    }

    #[test]
    fn test_skill_level_thresholds() {
        assert_eq!(skill_level(95), SkillLevel::Expert);
        assert_eq!(skill_level(90), SkillLevel::Expert);
        assert_eq!(skill_level(89), SkillLevel::Advanced);
        assert_eq!(skill_level(70), SkillLevel::Intermediate);
        assert_eq!(skill_level(60), SkillLevel::Beginner);
        assert_eq!(skill_level(59), SkillLevel::Learning);
        assert_eq!(skill_level(0), SkillLevel::Learning);
    }
}

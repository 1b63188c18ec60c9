use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Minimum percentage required to pass.
pub const PASSING_SCORE: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestStatus {
    Pass,
    Fail,
}

impl TestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        }
    }

    /// The threshold is inclusive: a score of exactly 70.0 passes.
    pub fn from_score(score: f64) -> Self {
        if score >= PASSING_SCORE {
            Self::Pass
        } else {
            Self::Fail
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    pub total_questions: i32,
    pub correct_answers: i32,
    pub score: f64,
    pub status: TestStatus,
}

/// score = correct / total * 100.
pub fn score_test(total_questions: usize, correct_answers: usize) -> ScoreSummary {
    let score = if total_questions == 0 {
        0.0
    } else {
        correct_answers as f64 / total_questions as f64 * 100.0
    };

    ScoreSummary {
        total_questions: total_questions as i32,
        correct_answers: correct_answers as i32,
        score,
        status: TestStatus::from_score(score),
    }
}

/// Whole minutes between start and finish, floored, never negative.
pub fn elapsed_minutes(started_at: NaiveDateTime, finished_at: NaiveDateTime) -> i64 {
    (finished_at - started_at).num_minutes().max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn four_of_five_scores_eighty_and_passes() {
        let summary = score_test(5, 4);
        assert_eq!(summary.score, 80.0);
        assert_eq!(summary.status, TestStatus::Pass);
        assert_eq!(summary.total_questions, 5);
        assert_eq!(summary.correct_answers, 4);
    }

    #[test]
    fn three_of_five_fails() {
        let summary = score_test(5, 3);
        assert_eq!(summary.score, 60.0);
        assert_eq!(summary.status, TestStatus::Fail);
    }

    #[test]
    fn status_flips_at_exactly_seventy() {
        assert_eq!(score_test(10, 7).status, TestStatus::Pass);
        assert_eq!(score_test(10, 7).score, 70.0);
        assert_eq!(score_test(1000, 699).status, TestStatus::Fail);
    }

    #[test]
    fn perfect_and_zero_scores() {
        assert_eq!(score_test(5, 5).score, 100.0);
        assert_eq!(score_test(5, 0).score, 0.0);
        assert_eq!(score_test(5, 0).status, TestStatus::Fail);
    }

    #[test]
    fn empty_test_scores_zero_without_dividing() {
        let summary = score_test(0, 0);
        assert_eq!(summary.score, 0.0);
        assert_eq!(summary.status, TestStatus::Fail);
    }

    #[test]
    fn completion_time_is_floored_minutes() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let finish = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 7, 59)
            .unwrap();
        assert_eq!(elapsed_minutes(start, finish), 7);
        assert_eq!(elapsed_minutes(finish, start), 0);
    }

    #[test]
    fn status_serializes_uppercase() {
        assert_eq!(TestStatus::Pass.as_str(), "PASS");
        assert_eq!(
            serde_json::to_string(&TestStatus::Fail).unwrap(),
            "\"FAIL\""
        );
    }
}

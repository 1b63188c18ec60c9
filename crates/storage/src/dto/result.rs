use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::services::scoring::TestStatus;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TestResultResponse {
    pub result_id: Uuid,
    pub participant_id: Uuid,
    pub total_questions: i32,
    pub correct_answers: i32,
    pub score: f64,
    pub completion_time: i64,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl From<crate::models::TestResult> for TestResultResponse {
    fn from(result: crate::models::TestResult) -> Self {
        Self {
            result_id: result.result_id,
            participant_id: result.participant_id,
            total_questions: result.total_questions,
            correct_answers: result.correct_answers,
            score: result.score,
            completion_time: result.completion_time,
            status: result.status,
            created_at: result.created_at,
        }
    }
}

/// A dashboard row: test result joined to its participant.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ResultRow {
    pub result_id: Uuid,
    pub participant_id: Uuid,
    pub name: String,
    pub email: String,
    pub position: String,
    pub total_questions: i32,
    pub correct_answers: i32,
    pub score: f64,
    pub completion_time: i64,
    pub status: String,
    pub created_at: NaiveDateTime,
}

/// Aggregates across all results, regardless of active filters.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct DashboardSummary {
    pub total_participants: i64,
    pub passed: i64,
    pub failed: i64,
    pub average_score: Option<f64>,
}

/// Filters for the dashboard listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ResultFilter {
    #[serde(flatten)]
    pub pagination: super::common::PaginationParams,
    pub status: Option<String>,
    pub position: Option<String>,
}

impl ResultFilter {
    pub fn validate(&self) -> Result<(), String> {
        self.pagination.validate()?;
        validate_status(self.status.as_deref())
    }
}

/// Filters for the CSV export; same equality filters, no pagination.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ExportFilter {
    pub status: Option<String>,
    pub position: Option<String>,
}

impl ExportFilter {
    pub fn validate(&self) -> Result<(), String> {
        validate_status(self.status.as_deref())
    }
}

fn validate_status(status: Option<&str>) -> Result<(), String> {
    if let Some(status) = status
        && status != TestStatus::Pass.as_str()
        && status != TestStatus::Fail.as_str()
    {
        return Err("status must be 'PASS' or 'FAIL'".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_accepts_pass_and_fail_only() {
        let mut filter = ResultFilter::default();
        assert!(filter.validate().is_ok());

        filter.status = Some("PASS".into());
        assert!(filter.validate().is_ok());

        filter.status = Some("FAIL".into());
        assert!(filter.validate().is_ok());

        filter.status = Some("MAYBE".into());
        assert!(filter.validate().is_err());
    }

    #[test]
    fn export_filter_shares_the_status_rule() {
        let filter = ExportFilter {
            status: Some("pass".into()),
            position: None,
        };
        assert!(filter.validate().is_err());
    }
}

use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::dto::result::{DashboardSummary, ExportFilter, ResultFilter, ResultRow};
use crate::error::{Result, StorageError};
use crate::models::TestResult;
use crate::services::scoring::ScoreSummary;

pub struct ResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ResultRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist the outcome of a completed test.
    pub async fn create(
        &self,
        participant_id: Uuid,
        summary: &ScoreSummary,
        completion_time: i64,
    ) -> Result<TestResult> {
        let result = sqlx::query_as::<_, TestResult>(
            r#"
            INSERT INTO test_results
                (participant_id, total_questions, correct_answers, score, completion_time, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING result_id, participant_id, total_questions, correct_answers,
                      score, completion_time, status, created_at
            "#,
        )
        .bind(participant_id)
        .bind(summary.total_questions)
        .bind(summary.correct_answers)
        .bind(summary.score)
        .bind(completion_time)
        .bind(summary.status.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_foreign_key_violation() {
                StorageError::NotFound
            } else {
                err
            }
        })?;

        Ok(result)
    }

    /// Filtered, paginated dashboard rows joined to their participants,
    /// newest first. Returns the page plus the unpaginated match count.
    pub async fn list_detailed(&self, filter: &ResultFilter) -> Result<(Vec<ResultRow>, i64)> {
        let total_items = self
            .count_filtered(filter.status.as_deref(), filter.position.as_deref())
            .await?;

        let mut query = QueryBuilder::new(joined_select());
        push_filters(
            &mut query,
            filter.status.as_deref(),
            filter.position.as_deref(),
        );
        query.push(" ORDER BY tr.created_at DESC LIMIT ");
        query.push_bind(i64::from(filter.pagination.limit()));
        query.push(" OFFSET ");
        query.push_bind(i64::from(filter.pagination.offset()));

        let rows: Vec<ResultRow> = query.build_query_as().fetch_all(self.pool).await?;

        Ok((rows, total_items))
    }

    /// The full filtered set, newest first, for the CSV export.
    pub async fn list_for_export(&self, filter: &ExportFilter) -> Result<Vec<ResultRow>> {
        let mut query = QueryBuilder::new(joined_select());
        push_filters(
            &mut query,
            filter.status.as_deref(),
            filter.position.as_deref(),
        );
        query.push(" ORDER BY tr.created_at DESC");

        let rows: Vec<ResultRow> = query.build_query_as().fetch_all(self.pool).await?;

        Ok(rows)
    }

    /// Pass/fail counts and mean score across every result.
    pub async fn summary(&self) -> Result<DashboardSummary> {
        let summary = sqlx::query_as::<_, DashboardSummary>(
            r#"
            SELECT
                COUNT(*) AS total_participants,
                COUNT(*) FILTER (WHERE status = 'PASS') AS passed,
                COUNT(*) FILTER (WHERE status = 'FAIL') AS failed,
                AVG(score) AS average_score
            FROM test_results
            "#,
        )
        .fetch_one(self.pool)
        .await?;

        Ok(summary)
    }

    async fn count_filtered(&self, status: Option<&str>, position: Option<&str>) -> Result<i64> {
        let mut query = QueryBuilder::new(
            r#"
            SELECT COUNT(*)
            FROM test_results tr
            JOIN participants p ON tr.participant_id = p.participant_id
            WHERE 1=1
            "#,
        );
        push_filters(&mut query, status, position);

        let count = query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}

fn joined_select() -> &'static str {
    r#"
    SELECT tr.result_id, tr.participant_id, p.name, p.email, p.position,
           tr.total_questions, tr.correct_answers, tr.score, tr.completion_time,
           tr.status, tr.created_at
    FROM test_results tr
    JOIN participants p ON tr.participant_id = p.participant_id
    WHERE 1=1
    "#
}

fn push_filters(
    query: &mut QueryBuilder<'_, sqlx::Postgres>,
    status: Option<&str>,
    position: Option<&str>,
) {
    if let Some(status) = status {
        query.push(" AND tr.status = ");
        query.push_bind(status.to_string());
    }

    if let Some(position) = position {
        query.push(" AND p.position = ");
        query.push_bind(position.to_string());
    }
}

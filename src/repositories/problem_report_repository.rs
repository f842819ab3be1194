use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::problem_report::{ProblemNote, ProblemReport, ReportStatus};
use crate::utils::errors::AppError;

pub struct ProblemReportRepository {
    pool: PgPool,
}

impl ProblemReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        reporter_id: Uuid,
        category: String,
        description: String,
        target_type: Option<String>,
        target_id: Option<String>,
    ) -> Result<ProblemReport, AppError> {
        let now = Utc::now();
        let report = sqlx::query_as::<_, ProblemReport>(
            r#"
            INSERT INTO problem_reports (
                id, reporter_id, category, description, status,
                target_type, target_id, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, 'open', $5, $6, $7, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(reporter_id)
        .bind(category)
        .bind(description)
        .bind(target_type)
        .bind(target_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(report)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ProblemReport>, AppError> {
        let report =
            sqlx::query_as::<_, ProblemReport>("SELECT * FROM problem_reports WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(report)
    }

    pub async fn list(
        &self,
        status: Option<ReportStatus>,
        category: Option<String>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ProblemReport>, AppError> {
        let reports = sqlx::query_as::<_, ProblemReport>(
            r#"
            SELECT * FROM problem_reports
            WHERE ($1::report_status IS NULL OR status = $1)
              AND ($2::text IS NULL OR category = $2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(status)
        .bind(category)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(reports)
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: ReportStatus,
    ) -> Result<ProblemReport, AppError> {
        let report = sqlx::query_as::<_, ProblemReport>(
            r#"
            UPDATE problem_reports
            SET status = $2, updated_at = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(report)
    }

    pub async fn add_note(
        &self,
        report_id: Uuid,
        author_id: Uuid,
        body: String,
    ) -> Result<ProblemNote, AppError> {
        let note = sqlx::query_as::<_, ProblemNote>(
            r#"
            INSERT INTO problem_notes (id, report_id, author_id, body, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(report_id)
        .bind(author_id)
        .bind(body)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(note)
    }

    pub async fn list_notes(&self, report_id: Uuid) -> Result<Vec<ProblemNote>, AppError> {
        let notes = sqlx::query_as::<_, ProblemNote>(
            "SELECT * FROM problem_notes WHERE report_id = $1 ORDER BY created_at ASC",
        )
        .bind(report_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    pub async fn count_open(&self) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM problem_reports WHERE status IN ('open', 'in_review')",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::sanitation::models::{IssueReport, NewIssueReport, ReportStatus};

/// Persistence for sanitation reports
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Stores a new report as `Pending`, stamped with the current time.
    async fn insert(&self, report: NewIssueReport) -> Result<IssueReport>;

    async fn list_all(&self) -> Result<Vec<IssueReport>>;

    /// Newest first
    async fn list_recent(&self, limit: i64) -> Result<Vec<IssueReport>>;

    /// Case-insensitive substring match on the location, newest first
    async fn list_by_location(&self, location: &str) -> Result<Vec<IssueReport>>;
}

/// PostgreSQL-backed report store
pub struct PgReportStore {
    pool: PgPool,
}

impl PgReportStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportStore for PgReportStore {
    async fn insert(&self, report: NewIssueReport) -> Result<IssueReport> {
        sqlx::query_as::<_, IssueReport>(
            r#"
            INSERT INTO sanitation_reports
                (id, location, issue_type, description, severity, status, reported_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, location, issue_type, description, severity, status, reported_at, resolved_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(report.location)
        .bind(report.issue_type)
        .bind(report.description)
        .bind(report.severity)
        .bind(ReportStatus::Pending)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create sanitation report: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn list_all(&self) -> Result<Vec<IssueReport>> {
        sqlx::query_as::<_, IssueReport>(
            r#"
            SELECT id, location, issue_type, description, severity, status, reported_at, resolved_at
            FROM sanitation_reports
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch sanitation reports: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<IssueReport>> {
        sqlx::query_as::<_, IssueReport>(
            r#"
            SELECT id, location, issue_type, description, severity, status, reported_at, resolved_at
            FROM sanitation_reports
            ORDER BY reported_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch recent sanitation reports: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn list_by_location(&self, location: &str) -> Result<Vec<IssueReport>> {
        sqlx::query_as::<_, IssueReport>(
            r#"
            SELECT id, location, issue_type, description, severity, status, reported_at, resolved_at
            FROM sanitation_reports
            WHERE position(lower($1) in lower(location)) > 0
            ORDER BY reported_at DESC
            "#,
        )
        .bind(location)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch reports for location {}: {:?}", location, e);
            AppError::Database(e)
        })
    }
}

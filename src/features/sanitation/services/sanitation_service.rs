use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::analytics::aggregate;
use super::report_store::ReportStore;
use super::scoring::ScoringPolicy;
use crate::core::error::Result;
use crate::features::sanitation::models::{AreaAnalytics, IssueReport, NewIssueReport};

/// Service for sanitation reports and the analytics derived from them
pub struct SanitationService {
    store: Arc<dyn ReportStore>,
    policy: ScoringPolicy,
}

impl SanitationService {
    pub fn new(store: Arc<dyn ReportStore>) -> Self {
        Self {
            store,
            policy: ScoringPolicy::DEFAULT,
        }
    }

    pub async fn submit(&self, report: NewIssueReport) -> Result<IssueReport> {
        let stored = self.store.insert(report).await?;

        info!(
            "Sanitation report submitted: id={}, location={}, severity={}",
            stored.id, stored.location, stored.severity
        );

        Ok(stored)
    }

    /// Most recent reports, newest first
    pub async fn list_reports(&self, limit: i64) -> Result<Vec<IssueReport>> {
        self.store.list_recent(limit).await
    }

    pub async fn reports_by_location(&self, location: &str) -> Result<Vec<IssueReport>> {
        self.store.list_by_location(location).await
    }

    /// Per-area analytics over every stored report, as of now
    pub async fn analytics(&self) -> Result<Vec<AreaAnalytics>> {
        let reports = self.store.list_all().await?;
        Ok(aggregate(&reports, Utc::now(), &self.policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::features::sanitation::models::{IssueSeverity, ReportStatus};
    use crate::shared::test_helpers::InMemoryReportStore;

    fn new_report(location: &str, severity: IssueSeverity) -> NewIssueReport {
        NewIssueReport {
            location: location.to_string(),
            issue_type: "Open drain".to_string(),
            description: "Smells bad".to_string(),
            severity,
        }
    }

    #[tokio::test]
    async fn test_submit_stores_pending_report() {
        let store = Arc::new(InMemoryReportStore::default());
        let service = SanitationService::new(store.clone());

        let report = service
            .submit(new_report("Area B, Street 5", IssueSeverity::High))
            .await
            .unwrap();

        assert_eq!(report.status, ReportStatus::Pending);
        assert!(report.resolved_at.is_none());
        assert_eq!(store.reports().len(), 1);
    }

    #[tokio::test]
    async fn test_analytics_without_reports_uses_samples() {
        let service = SanitationService::new(Arc::new(InMemoryReportStore::default()));

        let rows = service.analytics().await.unwrap();

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4].area, "Area E");
    }

    #[tokio::test]
    async fn test_analytics_over_submitted_reports() {
        let service = SanitationService::new(Arc::new(InMemoryReportStore::default()));

        tokio_test::assert_ok!(service.submit(new_report("area b", IssueSeverity::Low)).await);
        tokio_test::assert_ok!(service.submit(new_report("Area B", IssueSeverity::Low)).await);

        let rows = service.analytics().await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].area, "Area B");
        assert_eq!(rows[0].complaint_count, 2);
        assert_eq!(rows[0].cleanliness_score, 80);
        assert_eq!(rows[0].risk_probability, 30);
    }

    #[tokio::test]
    async fn test_reports_by_location_is_literal_and_case_insensitive() {
        let service = SanitationService::new(Arc::new(InMemoryReportStore::default()));

        tokio_test::assert_ok!(service.submit(new_report("Area A, Park", IssueSeverity::Low)).await);
        tokio_test::assert_ok!(service.submit(new_report("Area B.", IssueSeverity::Low)).await);

        assert_eq!(service.reports_by_location("park").await.unwrap().len(), 1);
        // "." is not a wildcard
        assert!(service.reports_by_location("A.").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_storage_failure_is_surfaced() {
        let service = SanitationService::new(Arc::new(InMemoryReportStore::failing()));

        let err = service.analytics().await.unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
    }
}

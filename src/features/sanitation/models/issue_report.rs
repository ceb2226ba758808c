use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Severity of a reported sanitation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "issue_severity")]
pub enum IssueSeverity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueSeverity::Low => write!(f, "Low"),
            IssueSeverity::Medium => write!(f, "Medium"),
            IssueSeverity::High => write!(f, "High"),
        }
    }
}

/// Lifecycle of a report. New reports always start as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "report_status")]
pub enum ReportStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    #[sqlx(rename = "In Progress")]
    InProgress,
    Resolved,
}

/// Database model for a sanitation report
#[derive(Debug, Clone, FromRow)]
pub struct IssueReport {
    pub id: Uuid,
    pub location: String,
    pub issue_type: String,
    pub description: String,
    pub severity: IssueSeverity,
    pub status: ReportStatus,
    #[sqlx(rename = "reported_at")]
    pub timestamp: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Data for creating a new report
#[derive(Debug, Clone)]
pub struct NewIssueReport {
    pub location: String,
    pub issue_type: String,
    pub description: String,
    pub severity: IssueSeverity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_is_case_sensitive() {
        let high: IssueSeverity = serde_json::from_str("\"High\"").unwrap();
        assert_eq!(high, IssueSeverity::High);
        assert!(serde_json::from_str::<IssueSeverity>("\"high\"").is_err());
        assert!(serde_json::from_str::<IssueSeverity>("\"Critical\"").is_err());
    }

    #[test]
    fn test_status_serializes_with_space() {
        let json = serde_json::to_string(&ReportStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        assert_eq!(ReportStatus::default(), ReportStatus::Pending);
    }
}

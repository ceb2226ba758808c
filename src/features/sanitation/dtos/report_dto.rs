use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::sanitation::models::{IssueReport, IssueSeverity, NewIssueReport, ReportStatus};

/// Request DTO for submitting a sanitation issue
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssueReportDto {
    /// Free-text location, e.g. "Area B, Street 5"
    #[validate(custom(
        function = "crate::shared::validation::validate_not_blank",
        message = "Location is required"
    ))]
    pub location: String,

    #[validate(custom(
        function = "crate::shared::validation::validate_not_blank",
        message = "Issue type is required"
    ))]
    pub issue_type: String,

    #[validate(custom(
        function = "crate::shared::validation::validate_not_blank",
        message = "Description is required"
    ))]
    pub description: String,

    pub severity: IssueSeverity,
}

impl From<CreateIssueReportDto> for NewIssueReport {
    fn from(dto: CreateIssueReportDto) -> Self {
        Self {
            location: dto.location.trim().to_string(),
            issue_type: dto.issue_type.trim().to_string(),
            description: dto.description.trim().to_string(),
            severity: dto.severity,
        }
    }
}

/// Stored sanitation report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueReportResponseDto {
    pub id: Uuid,
    pub location: String,
    pub issue_type: String,
    pub description: String,
    pub severity: IssueSeverity,
    pub status: ReportStatus,
    pub timestamp: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl From<IssueReport> for IssueReportResponseDto {
    fn from(r: IssueReport) -> Self {
        Self {
            id: r.id,
            location: r.location,
            issue_type: r.issue_type,
            description: r.description,
            severity: r.severity,
            status: r.status,
            timestamp: r.timestamp,
            resolved_at: r.resolved_at,
        }
    }
}

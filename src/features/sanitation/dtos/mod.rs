mod analytics_dto;
mod report_dto;

pub use analytics_dto::AreaAnalyticsDto;
pub use report_dto::{CreateIssueReportDto, IssueReportResponseDto};

mod area_analytics;
mod issue_report;

pub use area_analytics::{AreaAnalytics, Trend};
pub use issue_report::{IssueReport, IssueSeverity, NewIssueReport, ReportStatus};

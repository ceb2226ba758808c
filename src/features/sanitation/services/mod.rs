pub mod analytics;
pub mod area;
mod report_store;
mod sanitation_service;
pub mod scoring;

pub use report_store::{PgReportStore, ReportStore};
pub use sanitation_service::SanitationService;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::sanitation::handlers::{
    get_analytics, get_reports_by_location, list_reports, submit_report,
};
use crate::features::sanitation::services::SanitationService;

/// Create routes for the sanitation feature
pub fn routes(service: Arc<SanitationService>) -> Router {
    Router::new()
        .route("/api/sanitation/report", post(submit_report))
        .route("/api/sanitation/analytics", get(get_analytics))
        .route("/api/sanitation/reports", get(list_reports))
        .route("/api/sanitation/reports/{location}", get(get_reports_by_location))
        .with_state(service)
}

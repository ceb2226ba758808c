use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::sanitation::dtos::AreaAnalyticsDto;
use crate::features::sanitation::services::SanitationService;

/// Per-area sanitation analytics, ordered by area
///
/// Returns a fixed sample dataset while no reports exist.
#[utoipa::path(
    get,
    path = "/api/sanitation/analytics",
    tag = "sanitation",
    responses(
        (status = 200, description = "Area analytics", body = Vec<AreaAnalyticsDto>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_analytics(
    State(service): State<Arc<SanitationService>>,
) -> Result<Json<Vec<AreaAnalyticsDto>>> {
    let analytics = service.analytics().await?;
    Ok(Json(analytics.into_iter().map(Into::into).collect()))
}

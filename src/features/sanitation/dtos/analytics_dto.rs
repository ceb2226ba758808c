use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::sanitation::models::{AreaAnalytics, Trend};

/// Sanitation metrics for one area
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AreaAnalyticsDto {
    /// "Area A".."Area Z", or "Other"
    pub area: String,
    /// 0-100, higher is cleaner
    pub cleanliness_score: i64,
    /// 0-100, driven by reports from the last 7 days
    pub risk_probability: i64,
    pub complaint_count: usize,
    pub trend: Trend,
}

impl From<AreaAnalytics> for AreaAnalyticsDto {
    fn from(a: AreaAnalytics) -> Self {
        Self {
            area: a.area,
            cleanliness_score: a.cleanliness_score,
            risk_probability: a.risk_probability,
            complaint_count: a.complaint_count,
            trend: a.trend,
        }
    }
}

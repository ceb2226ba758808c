use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Direction an area is heading, judged from its current cleanliness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

/// Per-area sanitation metrics, derived on every query
#[derive(Debug, Clone, PartialEq)]
pub struct AreaAnalytics {
    pub area: String,
    /// 0..=100
    pub cleanliness_score: i64,
    /// 0..=100
    pub risk_probability: i64,
    pub complaint_count: usize,
    pub trend: Trend,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::waste::models::WasteCategory;

/// Disposal guidance for one waste category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisposalRuleResponseDto {
    pub category: WasteCategory,
    pub methods: Vec<String>,
    pub warnings: Vec<String>,
    pub environmental_impact: String,
    pub examples: Vec<String>,
}

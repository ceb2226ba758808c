use sqlx::FromRow;

use super::WasteCategory;
use crate::features::waste::dtos::DisposalRuleResponseDto;

/// Database model for per-category disposal guidance
#[derive(Debug, Clone, FromRow)]
pub struct DisposalRule {
    pub category: WasteCategory,
    pub methods: Vec<String>,
    pub warnings: Vec<String>,
    pub environmental_impact: String,
    pub examples: Vec<String>,
}

impl From<DisposalRule> for DisposalRuleResponseDto {
    fn from(r: DisposalRule) -> Self {
        Self {
            category: r.category,
            methods: r.methods,
            warnings: r.warnings,
            environmental_impact: r.environmental_impact,
            examples: r.examples,
        }
    }
}

use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::waste::dtos::DisposalRuleResponseDto;
use crate::features::waste::models::{DisposalRule, WasteCategory};

/// Service for the seeded per-category disposal guidance
pub struct DisposalService {
    pool: PgPool,
}

impl DisposalService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All disposal rules, in category order
    pub async fn list_rules(&self) -> Result<Vec<DisposalRuleResponseDto>> {
        let rules = sqlx::query_as::<_, DisposalRule>(
            r#"
            SELECT category, methods, warnings, environmental_impact, examples
            FROM disposal_rules
            ORDER BY category
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch disposal rules: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rules.into_iter().map(Into::into).collect())
    }

    /// Disposal rule for a single category
    pub async fn get_rule(&self, category: WasteCategory) -> Result<DisposalRuleResponseDto> {
        let rule = sqlx::query_as::<_, DisposalRule>(
            r#"
            SELECT category, methods, warnings, environmental_impact, examples
            FROM disposal_rules
            WHERE category = $1
            "#,
        )
        .bind(category)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch disposal rule {}: {:?}", category, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("No disposal rule for category {}", category)))?;

        Ok(rule.into())
    }
}

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::MAX_LIST_LIMIT;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub total: i64,
}

// =============================================================================
// LIMIT
// =============================================================================

/// `?limit=` query parameter shared by the list endpoints.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct LimitQuery {
    /// Maximum number of items to return
    #[param(minimum = 1, maximum = 500)]
    #[serde(default, deserialize_with = "lenient_limit")]
    pub limit: Option<i64>,
}

/// Unparseable values are treated as absent so the endpoint default applies.
fn lenient_limit<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}

impl LimitQuery {
    /// Resolve the effective limit; missing or non-positive values use `default`.
    pub fn resolve(&self, default: i64) -> i64 {
        match self.limit {
            Some(limit) if limit > 0 => limit.min(MAX_LIST_LIMIT),
            _ => default,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}

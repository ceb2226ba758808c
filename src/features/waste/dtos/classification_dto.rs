use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::waste::models::{
    ClassificationRecord, ClassificationResult, InputType, WasteCategory,
};

/// Request DTO for text classification
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ClassifyTextDto {
    /// Free-text description of the item, e.g. "empty plastic bottle"
    #[validate(custom(
        function = "crate::shared::validation::validate_not_blank",
        message = "Invalid text input"
    ))]
    pub text: String,
}

/// Image classification form for OpenAPI documentation
/// Note: the handler reads the multipart body directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct ClassifyImageDto {
    /// Image of the waste item (image/*, max 10 MB)
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub image: String,
}

/// Classification response returned to the UI
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClassificationResultDto {
    pub category: WasteCategory,
    /// Confidence in [0, 1]
    pub confidence: f64,
    pub description: String,
}

impl From<ClassificationResult> for ClassificationResultDto {
    fn from(r: ClassificationResult) -> Self {
        Self {
            category: r.category,
            confidence: r.confidence,
            description: r.description,
        }
    }
}

/// Stored classification history entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationRecordDto {
    pub id: Uuid,
    pub category: WasteCategory,
    pub confidence: f64,
    pub description: String,
    pub input_type: InputType,
    pub input_data: String,
    pub timestamp: DateTime<Utc>,
}

impl From<ClassificationRecord> for ClassificationRecordDto {
    fn from(r: ClassificationRecord) -> Self {
        Self {
            id: r.id,
            category: r.category,
            confidence: r.confidence,
            description: r.description,
            input_type: r.input_type,
            input_data: r.input_data,
            timestamp: r.classified_at,
        }
    }
}

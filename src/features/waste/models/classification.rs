use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

use super::WasteCategory;

/// What kind of input a classification was produced from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "classification_input_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Image,
    Text,
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputType::Image => write!(f, "image"),
            InputType::Text => write!(f, "text"),
        }
    }
}

/// Outcome of one classification, whichever path produced it
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub category: WasteCategory,
    /// Always within [0, 1]
    pub confidence: f64,
    pub description: String,
}

impl ClassificationResult {
    pub fn new(category: WasteCategory, confidence: f64, description: String) -> Self {
        let confidence = if confidence.is_finite() {
            confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };

        Self {
            category,
            confidence,
            description,
        }
    }
}

/// Database model for a stored classification
#[derive(Debug, Clone, FromRow)]
pub struct ClassificationRecord {
    pub id: Uuid,
    pub category: WasteCategory,
    pub confidence: f64,
    pub description: String,
    pub input_type: InputType,
    pub input_data: String,
    pub classified_at: DateTime<Utc>,
}

/// Data for storing a classification in the history
#[derive(Debug, Clone)]
pub struct NewClassificationRecord {
    pub result: ClassificationResult,
    pub input_type: InputType,
    pub input_data: String,
    pub classified_at: DateTime<Utc>,
}

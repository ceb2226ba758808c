use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::classification_store::ClassificationStore;
use super::fallback::{
    classify_text_by_keywords, mock_image_classification, KeywordRule, RandomSource,
    KEYWORD_RULES,
};
use super::normalizer::normalize;
use crate::core::error::Result;
use crate::features::waste::models::{
    ClassificationRecord, ClassificationResult, InputType, NewClassificationRecord,
};
use crate::modules::ai_service::{AiClassification, AiClassifier, AiServiceError};

/// An uploaded image awaiting classification
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub data: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
}

/// Classification gateway: asks the AI service, falls back locally when it
/// cannot answer, and records every result in the history.
pub struct ClassificationService {
    classifier: Arc<dyn AiClassifier>,
    store: Arc<dyn ClassificationStore>,
    random: Arc<dyn RandomSource>,
    keyword_rules: &'static [KeywordRule],
}

impl ClassificationService {
    pub fn new(
        classifier: Arc<dyn AiClassifier>,
        store: Arc<dyn ClassificationStore>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            classifier,
            store,
            random,
            keyword_rules: KEYWORD_RULES,
        }
    }

    /// Classify an uploaded image. Never fails because of the AI service;
    /// only a storage failure is returned as an error.
    pub async fn classify_image(&self, upload: ImageUpload) -> Result<ClassificationResult> {
        let input_data = image_input_label(&upload.content_type, Utc::now());

        let outcome = self
            .classifier
            .classify_image(upload.data, &upload.file_name, &upload.content_type)
            .await;

        let result = self
            .accept(outcome, InputType::Image)
            .unwrap_or_else(|| mock_image_classification(self.random.as_ref()));

        self.record(result, InputType::Image, input_data).await
    }

    /// Classify a free-text description of an item.
    pub async fn classify_text(&self, text: &str) -> Result<ClassificationResult> {
        let outcome = self.classifier.classify_text(text).await;

        let result = self
            .accept(outcome, InputType::Text)
            .unwrap_or_else(|| classify_text_by_keywords(text, self.keyword_rules));

        self.record(result, InputType::Text, text.to_string()).await
    }

    /// Most recent classifications, newest first
    pub async fn history(&self, limit: i64) -> Result<Vec<ClassificationRecord>> {
        self.store.list_recent(limit).await
    }

    /// Normalized AI answer, or `None` when the fallback has to run.
    fn accept(
        &self,
        outcome: std::result::Result<AiClassification, AiServiceError>,
        input_type: InputType,
    ) -> Option<ClassificationResult> {
        match outcome {
            Ok(response) => match normalize(response) {
                Ok(result) => Some(result),
                Err(e) => {
                    warn!("AI service error ({}): {}, using fallback", input_type, e);
                    None
                }
            },
            Err(e) => {
                warn!(
                    timeout = e.is_timeout(),
                    "AI service error ({}): {}, using fallback", input_type, e
                );
                None
            }
        }
    }

    async fn record(
        &self,
        result: ClassificationResult,
        input_type: InputType,
        input_data: String,
    ) -> Result<ClassificationResult> {
        let stored = self
            .store
            .insert(NewClassificationRecord {
                result: result.clone(),
                input_type,
                input_data,
                classified_at: Utc::now(),
            })
            .await?;

        info!(
            "Classification stored: id={}, input_type={}, category={}",
            stored.id, stored.input_type, stored.category
        );

        Ok(result)
    }
}

/// History label for an image input, e.g. `image_1760000000000.png`
fn image_input_label(content_type: &str, now: DateTime<Utc>) -> String {
    let extension = content_type
        .split('/')
        .nth(1)
        .filter(|s| !s.is_empty())
        .unwrap_or("bin");
    format!("image_{}.{}", now.timestamp_millis(), extension)
}

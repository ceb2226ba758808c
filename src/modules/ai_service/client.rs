use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::responses::{AiClassification, ResponseFormat};
use crate::core::config::AiServiceConfig;
use crate::shared::constants::IMAGE_FIELD_NAME;

#[derive(Debug, Error)]
pub enum AiServiceError {
    #[error("AI service request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("AI service returned status {0}")]
    Status(StatusCode),

    #[error("AI service response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

impl AiServiceError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }
}

/// Classification backend consulted before any local fallback
#[async_trait]
pub trait AiClassifier: Send + Sync {
    async fn classify_image(
        &self,
        image: Vec<u8>,
        file_name: &str,
        content_type: &str,
    ) -> Result<AiClassification, AiServiceError>;

    async fn classify_text(&self, text: &str) -> Result<AiClassification, AiServiceError>;
}

#[derive(Serialize)]
struct ClassifyTextRequest<'a> {
    text: &'a str,
}

/// HTTP client for the AI service
pub struct AiServiceClient {
    http: Client,
    config: AiServiceConfig,
}

impl AiServiceClient {
    pub fn new(config: AiServiceConfig) -> Result<Self, AiServiceError> {
        let http = Client::builder()
            .user_agent("WasteSortingCore/0.1 (classification-gateway)")
            .build()?;

        Ok(Self { http, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn response_format(&self) -> ResponseFormat {
        self.config.response_format
    }

    async fn decode(&self, response: reqwest::Response) -> Result<AiClassification, AiServiceError> {
        let status = response.status();
        if !status.is_success() {
            return Err(AiServiceError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(self.response_format().decode(&body)?)
    }
}

#[async_trait]
impl AiClassifier for AiServiceClient {
    async fn classify_image(
        &self,
        image: Vec<u8>,
        file_name: &str,
        content_type: &str,
    ) -> Result<AiClassification, AiServiceError> {
        let url = format!("{}/classify/image", self.config.base_url);
        debug!(
            "Sending image to AI service: {} ({} bytes, {})",
            url,
            image.len(),
            content_type
        );

        let part = Part::bytes(image)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = Form::new().part(IMAGE_FIELD_NAME, part);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .timeout(self.config.image_timeout)
            .send()
            .await?;

        self.decode(response).await
    }

    async fn classify_text(&self, text: &str) -> Result<AiClassification, AiServiceError> {
        let url = format!("{}/classify/text", self.config.base_url);
        debug!("Sending text to AI service: {} ({} chars)", url, text.len());

        let response = self
            .http
            .post(&url)
            .json(&ClassifyTextRequest { text })
            .timeout(self.config.text_timeout)
            .send()
            .await?;

        self.decode(response).await
    }
}

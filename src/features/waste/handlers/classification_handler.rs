use std::sync::Arc;

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use tracing::debug;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::waste::dtos::{
    ClassificationRecordDto, ClassificationResultDto, ClassifyImageDto, ClassifyTextDto,
};
use crate::features::waste::services::{ClassificationService, ImageUpload};
use crate::shared::constants::{DEFAULT_HISTORY_LIMIT, IMAGE_FIELD_NAME, MAX_IMAGE_SIZE};
use crate::shared::types::{ApiResponse, LimitQuery, Meta};

/// Classify a waste item from an image
///
/// Accepts multipart/form-data with an `image` field (image/* only).
/// When the AI service is unavailable a mock classification is returned.
#[utoipa::path(
    post,
    path = "/api/waste/classify-image",
    tag = "waste",
    request_body(
        content = ClassifyImageDto,
        content_type = "multipart/form-data",
        description = "Image of the waste item",
    ),
    responses(
        (status = 200, description = "Classification result", body = ClassificationResultDto),
        (status = 400, description = "Missing, invalid or oversized image"),
        (status = 500, description = "Failed to store classification")
    )
)]
pub async fn classify_image(
    State(service): State<Arc<ClassificationService>>,
    mut multipart: Multipart,
) -> Result<Json<ClassificationResultDto>> {
    let mut upload: Option<ImageUpload> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();
        if field_name != IMAGE_FIELD_NAME {
            debug!("Ignoring unknown field: {}", field_name);
            continue;
        }

        let content_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let file_name = field
            .file_name()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "image".to_string());

        if !content_type.starts_with("image/") {
            return Err(AppError::BadRequest(
                "Only image files are allowed".to_string(),
            ));
        }

        let data = field.bytes().await.map_err(|e| {
            debug!("Failed to read image bytes: {}", e);
            AppError::BadRequest(format!("Failed to read image data: {}", e))
        })?;

        upload = Some(ImageUpload {
            data: data.to_vec(),
            file_name,
            content_type,
        });
    }

    let upload =
        upload.ok_or_else(|| AppError::BadRequest("No image file provided".to_string()))?;

    if upload.data.is_empty() {
        return Err(AppError::BadRequest("Image file is empty".to_string()));
    }

    if upload.data.len() > MAX_IMAGE_SIZE {
        return Err(AppError::BadRequest(format!(
            "Image too large. Maximum size is {} MB",
            MAX_IMAGE_SIZE / 1024 / 1024
        )));
    }

    let result = service.classify_image(upload).await?;
    Ok(Json(result.into()))
}

/// Classify a waste item from a text description
#[utoipa::path(
    post,
    path = "/api/waste/classify-text",
    tag = "waste",
    request_body = ClassifyTextDto,
    responses(
        (status = 200, description = "Classification result", body = ClassificationResultDto),
        (status = 400, description = "Invalid text input"),
        (status = 500, description = "Failed to store classification")
    )
)]
pub async fn classify_text(
    State(service): State<Arc<ClassificationService>>,
    AppJson(dto): AppJson<ClassifyTextDto>,
) -> Result<Json<ClassificationResultDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let result = service.classify_text(&dto.text).await?;
    Ok(Json(result.into()))
}

/// Recent classification history
#[utoipa::path(
    get,
    path = "/api/waste/history",
    tag = "waste",
    params(LimitQuery),
    responses(
        (status = 200, description = "Classification history, newest first", body = ApiResponse<Vec<ClassificationRecordDto>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_history(
    State(service): State<Arc<ClassificationService>>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<ApiResponse<Vec<ClassificationRecordDto>>>> {
    let records: Vec<ClassificationRecordDto> = service
        .history(query.resolve(DEFAULT_HISTORY_LIMIT))
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let total = records.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(records),
        None,
        Some(Meta { total }),
    )))
}

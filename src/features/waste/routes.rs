use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::waste::handlers::{
    classify_image, classify_text, get_disposal_rule, get_history, list_disposal_rules,
};
use crate::features::waste::services::{ClassificationService, DisposalService};
use crate::shared::constants::MAX_IMAGE_SIZE;

/// Classification endpoints
pub fn classification_routes(service: Arc<ClassificationService>) -> Router {
    Router::new()
        .route(
            "/api/waste/classify-image",
            // Allow body size up to MAX_IMAGE_SIZE + buffer for multipart overhead
            post(classify_image).layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 1024 * 1024)),
        )
        .route("/api/waste/classify-text", post(classify_text))
        .route("/api/waste/history", get(get_history))
        .with_state(service)
}

/// Disposal guidance endpoints
pub fn disposal_routes(service: Arc<DisposalService>) -> Router {
    Router::new()
        .route("/api/waste/disposal-rules", get(list_disposal_rules))
        .route("/api/waste/disposal-rules/{category}", get(get_disposal_rule))
        .with_state(service)
}

/// Create routes for the waste feature
pub fn routes(
    classification_service: Arc<ClassificationService>,
    disposal_service: Arc<DisposalService>,
) -> Router {
    Router::new()
        .merge(classification_routes(classification_service))
        .merge(disposal_routes(disposal_service))
}

/// Default number of sanitation reports returned by list endpoints
pub const DEFAULT_REPORT_LIMIT: i64 = 100;

/// Default number of classification records returned by the history endpoint
pub const DEFAULT_HISTORY_LIMIT: i64 = 50;

/// Upper bound for any `limit` query parameter
pub const MAX_LIST_LIMIT: i64 = 500;

// =============================================================================
// UPLOADS
// =============================================================================

/// Maximum accepted image size for classification (10 MB)
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

/// Multipart field carrying the image, both inbound and towards the AI service
pub const IMAGE_FIELD_NAME: &str = "image";

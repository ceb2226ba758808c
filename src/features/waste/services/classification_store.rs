use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::waste::models::{ClassificationRecord, NewClassificationRecord};

/// Persistence for classification history
#[async_trait]
pub trait ClassificationStore: Send + Sync {
    async fn insert(&self, record: NewClassificationRecord) -> Result<ClassificationRecord>;

    /// Newest first
    async fn list_recent(&self, limit: i64) -> Result<Vec<ClassificationRecord>>;
}

/// PostgreSQL-backed classification history
pub struct PgClassificationStore {
    pool: PgPool,
}

impl PgClassificationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClassificationStore for PgClassificationStore {
    async fn insert(&self, record: NewClassificationRecord) -> Result<ClassificationRecord> {
        sqlx::query_as::<_, ClassificationRecord>(
            r#"
            INSERT INTO waste_classifications
                (id, category, confidence, description, input_type, input_data, classified_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, category, confidence, description, input_type, input_data, classified_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(record.result.category)
        .bind(record.result.confidence)
        .bind(record.result.description)
        .bind(record.input_type)
        .bind(record.input_data)
        .bind(record.classified_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to store classification: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<ClassificationRecord>> {
        sqlx::query_as::<_, ClassificationRecord>(
            r#"
            SELECT id, category, confidence, description, input_type, input_data, classified_at
            FROM waste_classifications
            ORDER BY classified_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch classification history: {:?}", e);
            AppError::Database(e)
        })
    }
}

//! In-memory doubles for the storage and AI seams, used by unit and handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::StatusCode;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::sanitation::models::{IssueReport, NewIssueReport, ReportStatus};
use crate::features::sanitation::services::ReportStore;
use crate::features::waste::models::{ClassificationRecord, NewClassificationRecord};
use crate::features::waste::services::{ClassificationStore, RandomSource};
use crate::modules::ai_service::{AiClassification, AiClassifier, AiServiceError};

/// AI service stand-in that either always answers the same or is always down
pub enum StubClassifier {
    Answers(AiClassification),
    Unavailable,
}

impl StubClassifier {
    fn respond(&self) -> std::result::Result<AiClassification, AiServiceError> {
        match self {
            StubClassifier::Answers(answer) => Ok(answer.clone()),
            StubClassifier::Unavailable => {
                Err(AiServiceError::Status(StatusCode::SERVICE_UNAVAILABLE))
            }
        }
    }
}

#[async_trait]
impl AiClassifier for StubClassifier {
    async fn classify_image(
        &self,
        _image: Vec<u8>,
        _file_name: &str,
        _content_type: &str,
    ) -> std::result::Result<AiClassification, AiServiceError> {
        self.respond()
    }

    async fn classify_text(
        &self,
        _text: &str,
    ) -> std::result::Result<AiClassification, AiServiceError> {
        self.respond()
    }
}

/// Deterministic randomness
pub struct FixedRandom {
    pub index: usize,
    pub unit: f64,
}

impl RandomSource for FixedRandom {
    fn index(&self, _len: usize) -> usize {
        self.index
    }

    fn unit(&self) -> f64 {
        self.unit
    }
}

fn storage_down() -> AppError {
    AppError::Database(sqlx::Error::PoolTimedOut)
}

/// Classification history kept in a Vec; insertion order stands in for time.
#[derive(Default)]
pub struct InMemoryClassificationStore {
    records: Mutex<Vec<ClassificationRecord>>,
    failing: bool,
}

impl InMemoryClassificationStore {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn records(&self) -> Vec<ClassificationRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClassificationStore for InMemoryClassificationStore {
    async fn insert(&self, record: NewClassificationRecord) -> Result<ClassificationRecord> {
        if self.failing {
            return Err(storage_down());
        }

        let stored = ClassificationRecord {
            id: Uuid::new_v4(),
            category: record.result.category,
            confidence: record.result.confidence,
            description: record.result.description,
            input_type: record.input_type,
            input_data: record.input_data,
            classified_at: record.classified_at,
        };
        self.records.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<ClassificationRecord>> {
        if self.failing {
            return Err(storage_down());
        }

        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .rev()
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }
}

/// Sanitation reports kept in a Vec; insertion order stands in for time.
#[derive(Default)]
pub struct InMemoryReportStore {
    reports: Mutex<Vec<IssueReport>>,
    failing: bool,
}

impl InMemoryReportStore {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn reports(&self) -> Vec<IssueReport> {
        self.reports.lock().unwrap().clone()
    }

    fn newest_first<F>(&self, keep: F) -> Result<Vec<IssueReport>>
    where
        F: Fn(&IssueReport) -> bool,
    {
        if self.failing {
            return Err(storage_down());
        }

        let reports = self.reports.lock().unwrap();
        Ok(reports.iter().rev().filter(|r| keep(r)).cloned().collect())
    }
}

#[async_trait]
impl ReportStore for InMemoryReportStore {
    async fn insert(&self, report: NewIssueReport) -> Result<IssueReport> {
        if self.failing {
            return Err(storage_down());
        }

        let stored = IssueReport {
            id: Uuid::new_v4(),
            location: report.location,
            issue_type: report.issue_type,
            description: report.description,
            severity: report.severity,
            status: ReportStatus::Pending,
            timestamp: Utc::now(),
            resolved_at: None,
        };
        self.reports.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<IssueReport>> {
        self.newest_first(|_| true)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<IssueReport>> {
        let mut reports = self.newest_first(|_| true)?;
        reports.truncate(limit.max(0) as usize);
        Ok(reports)
    }

    async fn list_by_location(&self, location: &str) -> Result<Vec<IssueReport>> {
        let needle = location.to_lowercase();
        self.newest_first(|r| r.location.to_lowercase().contains(&needle))
    }
}

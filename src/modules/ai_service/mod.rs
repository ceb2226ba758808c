//! Client for the external waste classification AI service
//!
//! The service exposes two endpoints:
//!
//! | Method | Endpoint | Body |
//! |--------|----------|------|
//! | POST | `/classify/image` | multipart, `image` field |
//! | POST | `/classify/text` | JSON `{ "text": "..." }` |
//!
//! Both answer with either the simple or the comprehensive classification
//! shape; which one is decided by deployment configuration.

mod client;
mod responses;

pub use client::{AiClassifier, AiServiceClient, AiServiceError};
pub use responses::{
    AiClassification, ComprehensiveClassification, DisposalGuide, ResponseFormat,
    SimpleClassification,
};

//! Modules layer - Infrastructure components for external integrations
//!
//! Contains clients and adapters for external services. Currently only the
//! waste classification AI service.

pub mod ai_service;

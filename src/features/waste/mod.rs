//! Waste classification feature
//!
//! | Endpoint                                   | Purpose                               |
//! |--------------------------------------------|---------------------------------------|
//! | `POST /api/waste/classify-image`           | Classify an uploaded image            |
//! | `POST /api/waste/classify-text`            | Classify a text description           |
//! | `GET  /api/waste/history`                  | Recent classifications                |
//! | `GET  /api/waste/disposal-rules`           | Disposal guidance for all categories  |
//! | `GET  /api/waste/disposal-rules/{category}`| Disposal guidance for one category    |
//!
//! Classification asks the external AI service first. When it is unreachable,
//! slow or answers with something unusable, a local fallback produces the
//! result instead, so the classify endpoints only fail on storage errors.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::{ClassificationService, DisposalService, PgClassificationStore, ThreadRandom};

//! Sanitation issue reports and per-area analytics
//!
//! Reports are grouped by the `Area <letter>` marker in their location and
//! scored on every analytics request; nothing derived is stored.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::{PgReportStore, SanitationService};

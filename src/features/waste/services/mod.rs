mod classification_service;
mod classification_store;
mod disposal_service;
pub mod fallback;
pub mod normalizer;

pub use classification_service::{ClassificationService, ImageUpload};
pub use classification_store::{ClassificationStore, PgClassificationStore};
pub use disposal_service::DisposalService;
pub use fallback::{RandomSource, ThreadRandom};

pub mod sanitation;
pub mod waste;

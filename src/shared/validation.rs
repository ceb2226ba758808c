use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Matches an area marker inside a free-text location
    /// - Matches: "Area B, Street 5", "near area c", "AREA d market"
    /// - No match: "Area 51", "Areas", "Main Street"
    pub static ref AREA_REGEX: Regex = Regex::new(r"(?i:area) ([A-Za-z])").unwrap();
}

/// Rejects strings that are empty or whitespace only
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

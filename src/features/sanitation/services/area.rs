use crate::shared::validation::AREA_REGEX;

/// Key for locations without an area marker
pub const OTHER_AREA: &str = "Other";

/// Canonical area key for a free-text location.
///
/// The first `Area <letter>` marker wins, normalized to `Area <LETTER>`.
/// Locations without a marker map to [`OTHER_AREA`].
pub fn extract_area(location: &str) -> String {
    AREA_REGEX
        .captures(location)
        .and_then(|caps| caps.get(1))
        .map(|letter| format!("Area {}", letter.as_str().to_uppercase()))
        .unwrap_or_else(|| OTHER_AREA.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_and_uppercases_letter() {
        assert_eq!(extract_area("Area B, Street 5"), "Area B");
        assert_eq!(extract_area("near area b, street 4"), "Area B");
        assert_eq!(extract_area("AREA c market"), "Area C");
    }

    #[test]
    fn test_first_marker_wins() {
        assert_eq!(extract_area("Area D next to Area A"), "Area D");
    }

    #[test]
    fn test_no_marker_is_other() {
        assert_eq!(extract_area("Main Street 12"), OTHER_AREA);
        assert_eq!(extract_area("Area 51"), OTHER_AREA);
        assert_eq!(extract_area(""), OTHER_AREA);
    }

    #[test]
    fn test_idempotent_on_own_output() {
        for location in ["near area e", "Main Street", "AREA z", "Area 9"] {
            let once = extract_area(location);
            assert_eq!(extract_area(&once), once);
        }
    }
}

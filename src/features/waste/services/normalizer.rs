use crate::features::waste::models::{ClassificationResult, UnknownCategory, WasteCategory};
use crate::modules::ai_service::{
    AiClassification, ComprehensiveClassification, SimpleClassification,
};

const DEFAULT_DISPOSAL_HINT: &str = "See disposal guide";
const DEFAULT_DETECTION_METHOD: &str = "Classified by AI";
const UNKNOWN_RISK_LEVEL: &str = "Unknown";

/// Reshape an AI service answer into the `{category, confidence, description}`
/// contract.
///
/// Fails only when the category is outside the five known values; the
/// caller treats that like any other upstream failure.
pub fn normalize(response: AiClassification) -> Result<ClassificationResult, UnknownCategory> {
    match response {
        AiClassification::Simple(simple) => normalize_simple(simple),
        AiClassification::Comprehensive(full) => normalize_comprehensive(full),
    }
}

fn normalize_simple(simple: SimpleClassification) -> Result<ClassificationResult, UnknownCategory> {
    let category: WasteCategory = simple.category.parse()?;
    Ok(ClassificationResult::new(
        category,
        simple.confidence,
        simple.description,
    ))
}

fn normalize_comprehensive(
    full: ComprehensiveClassification,
) -> Result<ClassificationResult, UnknownCategory> {
    let category: WasteCategory = full.category.parse()?;
    let description = describe(&full);
    Ok(ClassificationResult::new(
        category,
        full.confidence,
        description,
    ))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Builds the multi-line description shown in the UI.
fn describe(full: &ComprehensiveClassification) -> String {
    let name = non_empty(full.waste_name.as_deref()).unwrap_or(full.category.as_str());
    let risk_level = non_empty(full.risk_level.as_deref()).unwrap_or(UNKNOWN_RISK_LEVEL);
    let risk_reason = full.risk_reason.as_deref().unwrap_or_default();
    let disposal = non_empty(
        full.disposal
            .as_ref()
            .and_then(|d| d.methods.first())
            .map(String::as_str),
    )
    .unwrap_or(DEFAULT_DISPOSAL_HINT);
    let detection = non_empty(full.detection_method.as_deref()).unwrap_or(DEFAULT_DETECTION_METHOD);

    format!(
        "{}\n\nRisk Level: {}\n{}\n\nDisposal: {}\n\n{}",
        name, risk_level, risk_reason, disposal, detection
    )
}

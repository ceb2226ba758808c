//! Local classification used when the AI service cannot answer.

use rand::Rng;

use crate::features::waste::models::{ClassificationResult, WasteCategory};

/// A keyword table entry: any keyword hit classifies as `category`.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub category: WasteCategory,
    pub confidence: f64,
    pub keywords: &'static [&'static str],
}

/// Keyword tables in priority order; the first table with a hit wins.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        category: WasteCategory::Organic,
        confidence: 0.85,
        keywords: &[
            "food", "fruit", "vegetable", "peel", "banana", "apple", "orange", "leftover",
            "compost", "garden", "leaves", "coffee", "tea", "eggshell",
        ],
    },
    KeywordRule {
        category: WasteCategory::Recyclable,
        confidence: 0.85,
        keywords: &[
            "plastic", "bottle", "paper", "cardboard", "can", "aluminum", "glass", "newspaper",
            "magazine", "container",
        ],
    },
    KeywordRule {
        category: WasteCategory::Hazardous,
        confidence: 0.90,
        keywords: &[
            "battery", "paint", "chemical", "medicine", "drug", "pesticide", "oil", "cleaner",
            "toxic", "poison", "acid", "bleach",
        ],
    },
    KeywordRule {
        category: WasteCategory::EWaste,
        confidence: 0.85,
        keywords: &[
            "phone", "computer", "laptop", "electronic", "charger", "cable", "printer", "monitor",
            "keyboard", "mouse", "circuit", "led", "bulb",
        ],
    },
    KeywordRule {
        category: WasteCategory::DryWaste,
        confidence: 0.80,
        keywords: &[
            "diaper", "napkin", "tissue", "styrofoam", "rubber", "leather", "cloth", "ceramic",
            "wrapper",
        ],
    },
];

/// Used when no keyword table matches.
pub const DEFAULT_TEXT_CATEGORY: WasteCategory = WasteCategory::DryWaste;
pub const DEFAULT_TEXT_CONFIDENCE: f64 = 0.60;

/// Image fallback confidence lies in `[IMAGE_CONFIDENCE_BASE, IMAGE_CONFIDENCE_BASE + IMAGE_CONFIDENCE_SPREAD)`.
pub const IMAGE_CONFIDENCE_BASE: f64 = 0.75;
pub const IMAGE_CONFIDENCE_SPREAD: f64 = 0.20;

/// Source of randomness for the image fallback
pub trait RandomSource: Send + Sync {
    /// Uniform index in `0..len`; `len` is never zero.
    fn index(&self, len: usize) -> usize;

    /// Uniform value in `[0, 1)`.
    fn unit(&self) -> f64;
}

/// `RandomSource` backed by the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }

    fn unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Rule-based text classification.
pub fn classify_text_by_keywords(text: &str, rules: &[KeywordRule]) -> ClassificationResult {
    let lower = text.to_lowercase();

    let (category, confidence) = rules
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
        .map(|rule| (rule.category, rule.confidence))
        .unwrap_or((DEFAULT_TEXT_CATEGORY, DEFAULT_TEXT_CONFIDENCE));

    ClassificationResult::new(
        category,
        confidence,
        format!(
            "Classified as {} based on text analysis. Confidence: {}%",
            category,
            (confidence * 100.0).round() as i64
        ),
    )
}

/// Random placeholder classification for images.
pub fn mock_image_classification(random: &dyn RandomSource) -> ClassificationResult {
    let categories = WasteCategory::ALL;
    let category = categories[random.index(categories.len()) % categories.len()];

    let r = random.unit();
    let r = if (0.0..1.0).contains(&r) { r } else { 0.0 };
    let upper = IMAGE_CONFIDENCE_BASE + IMAGE_CONFIDENCE_SPREAD;
    // keep the upper bound exclusive after float rounding
    let confidence = (IMAGE_CONFIDENCE_BASE + r * IMAGE_CONFIDENCE_SPREAD).min(upper - f64::EPSILON);

    ClassificationResult::new(
        category,
        confidence,
        format!(
            "This appears to be {} waste. (Mock classification - AI service unavailable)",
            category.as_str().to_lowercase()
        ),
    )
}

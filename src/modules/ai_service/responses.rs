use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Response shape the AI service is deployed to return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// `{category, confidence, description}`
    Simple,
    /// Full record with risk, disposal and detection details
    #[default]
    Comprehensive,
}

impl FromStr for ResponseFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "comprehensive" => Ok(Self::Comprehensive),
            other => Err(format!(
                "AI_SERVICE_RESPONSE_FORMAT must be 'simple' or 'comprehensive', got '{}'",
                other
            )),
        }
    }
}

impl ResponseFormat {
    /// Decode a response body according to this format
    pub fn decode(self, body: &[u8]) -> Result<AiClassification, serde_json::Error> {
        match self {
            Self::Simple => serde_json::from_slice(body).map(AiClassification::Simple),
            Self::Comprehensive => serde_json::from_slice(body).map(AiClassification::Comprehensive),
        }
    }
}

/// A classification as returned by the AI service, tagged with the shape
/// that was requested.
#[derive(Debug, Clone, PartialEq)]
pub enum AiClassification {
    Simple(SimpleClassification),
    Comprehensive(ComprehensiveClassification),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleClassification {
    pub category: String,
    pub confidence: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprehensiveClassification {
    pub category: String,
    pub confidence: f64,
    pub waste_name: Option<String>,
    pub risk_level: Option<String>,
    pub risk_reason: Option<String>,
    pub disposal: Option<DisposalGuide>,
    pub detection_method: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DisposalGuide {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub methods: Vec<String>,
}

/// `null` and a missing key both mean "no entries"
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_format_from_str() {
        assert_eq!("simple".parse::<ResponseFormat>(), Ok(ResponseFormat::Simple));
        assert_eq!(
            " Comprehensive ".parse::<ResponseFormat>(),
            Ok(ResponseFormat::Comprehensive)
        );
        assert!("detailed".parse::<ResponseFormat>().is_err());
    }

    #[test]
    fn test_decode_comprehensive_ignores_extra_fields() {
        let body = br#"{
            "category": "Organic",
            "confidence": 0.92,
            "waste_name": "Banana Peel",
            "risk_level": "Low",
            "risk_reason": "Attracts pests",
            "storage": {"instructions": ["Keep covered"]},
            "disposal": {"methods": ["Compost it"], "tips": []},
            "detection_method": "Image model"
        }"#;

        let decoded = ResponseFormat::Comprehensive.decode(body).unwrap();

        match decoded {
            AiClassification::Comprehensive(c) => {
                assert_eq!(c.waste_name.as_deref(), Some("Banana Peel"));
                assert_eq!(c.disposal.unwrap().methods, vec!["Compost it".to_string()]);
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_decode_null_disposal_methods_as_empty() {
        let body = br#"{
            "category": "Recyclable",
            "confidence": 0.87,
            "disposal": {"methods": null}
        }"#;

        let decoded = ResponseFormat::Comprehensive.decode(body).unwrap();

        match decoded {
            AiClassification::Comprehensive(c) => {
                assert_eq!(c.category, "Recyclable");
                assert!(c.disposal.unwrap().methods.is_empty());
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_decode_comprehensive_with_minimal_fields() {
        let body = br#"{"category": "Hazardous", "confidence": 0.8}"#;

        let decoded = ResponseFormat::Comprehensive.decode(body).unwrap();

        assert!(matches!(
            decoded,
            AiClassification::Comprehensive(ComprehensiveClassification {
                waste_name: None,
                disposal: None,
                ..
            })
        ));
    }

    #[test]
    fn test_decode_simple_requires_description() {
        let body = br#"{"category": "Organic", "confidence": 0.8}"#;

        assert!(ResponseFormat::Simple.decode(body).is_err());
    }
}

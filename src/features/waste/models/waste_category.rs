use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::Type;
use thiserror::Error;
use utoipa::ToSchema;

/// The five waste categories the application sorts into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "waste_category")]
pub enum WasteCategory {
    Organic,
    Recyclable,
    Hazardous,
    #[serde(rename = "E-Waste")]
    #[sqlx(rename = "E-Waste")]
    EWaste,
    #[serde(rename = "Dry Waste")]
    #[sqlx(rename = "Dry Waste")]
    DryWaste,
}

impl WasteCategory {
    pub const ALL: [WasteCategory; 5] = [
        WasteCategory::Organic,
        WasteCategory::Recyclable,
        WasteCategory::Hazardous,
        WasteCategory::EWaste,
        WasteCategory::DryWaste,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WasteCategory::Organic => "Organic",
            WasteCategory::Recyclable => "Recyclable",
            WasteCategory::Hazardous => "Hazardous",
            WasteCategory::EWaste => "E-Waste",
            WasteCategory::DryWaste => "Dry Waste",
        }
    }
}

impl std::fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown waste category: '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for WasteCategory {
    type Err = UnknownCategory;

    /// Case-insensitive; accepts the display names ("E-Waste", "Dry Waste").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

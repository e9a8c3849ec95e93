//! FoodData Central search records as consumed by the resolver.
//!
//! Field names follow the upstream camelCase JSON. Only the fields the
//! resolver reads or passes through are modelled; everything else in the
//! upstream document is ignored on deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// FoodData Central data type of a food record.
///
/// Unknown upstream values are preserved verbatim in [`DataType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DataType {
    /// Curated analytical reference data.
    Foundation,
    /// Standard Reference legacy release.
    SrLegacy,
    /// Food and Nutrient Database for Dietary Studies survey foods.
    Survey,
    /// Commercial branded products. Never selected by the resolver.
    Branded,
    /// Any other value reported upstream.
    Other(String),
}

impl DataType {
    /// Returns the upstream spelling of this data type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Foundation => "Foundation",
            Self::SrLegacy => "SR Legacy",
            Self::Survey => "Survey (FNDDS)",
            Self::Branded => "Branded",
            Self::Other(other) => other,
        }
    }

    /// Whether this is one of the generic (non-branded) reference types.
    pub fn is_generic(&self) -> bool {
        matches!(self, Self::Foundation | Self::SrLegacy | Self::Survey)
    }
}

impl From<String> for DataType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Foundation" => Self::Foundation,
            "SR Legacy" => Self::SrLegacy,
            "Survey (FNDDS)" => Self::Survey,
            "Branded" => Self::Branded,
            _ => Self::Other(value),
        }
    }
}

impl From<DataType> for String {
    fn from(value: DataType) -> Self {
        match value {
            DataType::Other(other) => other,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `foodCategory` field, which upstream reports either as a plain
/// string or as an object carrying a `description`.
///
/// The upstream shape is kept so it can be passed through untouched;
/// scoring only ever sees [`FoodCategory::label`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FoodCategory {
    /// Flat category name, e.g. `"Dairy and Egg Products"`.
    Name(String),
    /// Structured category object, e.g. `{"id": 1, "description": "..."}`.
    Detailed(serde_json::Map<String, serde_json::Value>),
}

impl FoodCategory {
    /// The category name as a single string (empty if the structured form
    /// has no string `description`).
    pub fn label(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Detailed(fields) => fields
                .get("description")
                .and_then(serde_json::Value::as_str)
                .unwrap_or(""),
        }
    }
}

/// One nutrient measurement attached to a food record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientEntry {
    /// FDC nutrient id.
    pub nutrient_id: Option<u64>,
    /// Nutrient name, e.g. `"Protein"`.
    #[serde(rename = "nutrientName")]
    pub name: Option<String>,
    /// Nutrient code, e.g. `"203"`.
    #[serde(rename = "nutrientNumber")]
    pub number: Option<String>,
    /// Amount per 100 g. Absent when upstream has no measurement.
    pub value: Option<f64>,
    /// Unit, e.g. `"G"` or `"KCAL"`.
    #[serde(rename = "unitName")]
    pub unit: Option<String>,
    /// Percent of daily value, when upstream provides it.
    pub percent_daily_value: Option<f64>,
    /// Display ordering hint; lower ranks are more prominent.
    pub rank: Option<f64>,
}

/// A candidate food record returned by a FoodData Central search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecord {
    /// FoodData Central id.
    pub fdc_id: Option<u64>,
    /// Canonical upstream name, e.g. `"Milk, whole, 3.25% milkfat"`.
    #[serde(default)]
    pub description: String,
    /// Upstream data type.
    pub data_type: Option<DataType>,
    /// Category in whichever shape upstream used.
    pub food_category: Option<FoodCategory>,
    /// Common names, when present.
    pub common_names: Option<String>,
    /// Additional descriptions, when present.
    pub additional_descriptions: Option<String>,
    /// Nutrient measurements in upstream order.
    #[serde(default)]
    pub food_nutrients: Vec<NutrientEntry>,
}

impl FoodRecord {
    /// The category normalized to a string (empty if absent).
    pub fn category_label(&self) -> &str {
        self.food_category.as_ref().map_or("", FoodCategory::label)
    }

    /// Whether upstream marked this record as a branded product.
    pub fn is_branded(&self) -> bool {
        self.data_type == Some(DataType::Branded)
    }
}

/// Body of a `GET /foods/search` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Matching foods in upstream relevance order.
    #[serde(default)]
    pub foods: Vec<FoodRecord>,
    /// Total number of hits upstream reported, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_hits: Option<u64>,
}

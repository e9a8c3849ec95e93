//! Nutrition profile projection of a selected food.
//!
//! Generic FoodData Central data (Foundation, SR Legacy, Survey) is
//! reported per 100 g, so the serving is a fixed constant rather than
//! anything read from the record.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::{DataType, FoodCategory, FoodRecord, NutrientEntry};

/// Reference serving size of every profile.
pub const REFERENCE_SERVING_SIZE: u32 = 100;

/// Unit of [`REFERENCE_SERVING_SIZE`].
pub const REFERENCE_SERVING_UNIT: &str = "g";

/// Nutrient profile of the selected generic food, per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionProfile {
    /// Display name of the ingredient (the upstream description).
    pub ingredient_name: String,
    /// Upstream description.
    pub description: String,
    /// FoodData Central id.
    pub fdc_id: Option<u64>,
    /// Upstream data type.
    pub data_type: Option<DataType>,
    /// Category exactly as upstream reported it.
    pub food_category: Option<FoodCategory>,
    /// Common names, when present.
    pub common_names: Option<String>,
    /// Additional descriptions, when present.
    pub additional_descriptions: Option<String>,
    /// Always [`REFERENCE_SERVING_SIZE`].
    pub serving_size: u32,
    /// Always [`REFERENCE_SERVING_UNIT`].
    pub serving_size_unit: String,
    /// Measured nutrients, most prominent (lowest rank) first.
    pub nutrients: Vec<ProfileNutrient>,
}

/// A nutrient with a measured value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileNutrient {
    /// FDC nutrient id.
    pub nutrient_id: Option<u64>,
    /// Nutrient name.
    pub nutrient_name: Option<String>,
    /// Nutrient code.
    pub nutrient_number: Option<String>,
    /// Amount per 100 g.
    pub value: f64,
    /// Unit of `value`.
    pub unit_name: Option<String>,
    /// Percent of daily value, when known.
    pub percent_daily_value: Option<f64>,
    /// Display ordering hint.
    pub rank: Option<f64>,
}

impl ProfileNutrient {
    /// Convert an upstream entry, dropping it if it has no value.
    pub fn from_entry(entry: NutrientEntry) -> Option<Self> {
        Some(Self {
            value: entry.value?,
            nutrient_id: entry.nutrient_id,
            nutrient_name: entry.name,
            nutrient_number: entry.number,
            unit_name: entry.unit,
            percent_daily_value: entry.percent_daily_value,
            rank: entry.rank,
        })
    }
}

impl NutritionProfile {
    /// Project a selected food into a profile.
    ///
    /// Nutrients without a value are dropped; the rest are sorted by rank
    /// ascending, unranked ones last, keeping upstream order among equals.
    pub fn from_food(food: FoodRecord) -> Self {
        let mut nutrients: Vec<ProfileNutrient> = food
            .food_nutrients
            .into_iter()
            .filter_map(ProfileNutrient::from_entry)
            .collect();
        nutrients.sort_by(|a, b| compare_rank(a.rank, b.rank));

        Self {
            ingredient_name: food.description.clone(),
            description: food.description,
            fdc_id: food.fdc_id,
            data_type: food.data_type,
            food_category: food.food_category,
            common_names: food.common_names,
            additional_descriptions: food.additional_descriptions,
            serving_size: REFERENCE_SERVING_SIZE,
            serving_size_unit: REFERENCE_SERVING_UNIT.to_owned(),
            nutrients,
        }
    }

    /// Find a nutrient by name, ignoring case.
    pub fn nutrient(&self, name: &str) -> Option<&ProfileNutrient> {
        self.nutrients.iter().find(|n| {
            n.nutrient_name
                .as_deref()
                .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name))
        })
    }
}

fn compare_rank(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

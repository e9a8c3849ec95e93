//! Plain-text rendering and persistence of nutrition profiles.

use std::fmt;
use std::path::{Path, PathBuf};

use fdc_search::{Explanation, NutritionProfile};

use crate::error::Result;

const RULE_WIDTH: usize = 80;

/// Human-readable report of a profile, rendered through [`fmt::Display`].
pub struct ProfileReport<'a>(pub &'a NutritionProfile);

impl fmt::Display for ProfileReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.0;
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(f, "{heavy}")?;
        writeln!(f, "GENERIC NUTRITION PROFILE")?;
        writeln!(f, "{heavy}")?;
        writeln!(f)?;
        writeln!(f, "Ingredient: {}", profile.ingredient_name)?;
        writeln!(f, "Description: {}", profile.description)?;
        if let Some(names) = profile.common_names.as_deref().filter(|s| !s.is_empty()) {
            writeln!(f, "Common Names: {names}")?;
        }
        if let Some(extra) = profile
            .additional_descriptions
            .as_deref()
            .filter(|s| !s.is_empty())
        {
            writeln!(f, "Additional Info: {extra}")?;
        }
        writeln!(f, "FDC ID: {}", display_or_na(profile.fdc_id))?;
        writeln!(f, "Data Type: {}", display_or_na(profile.data_type.as_ref()))?;
        writeln!(
            f,
            "Food Category: {}",
            profile
                .food_category
                .as_ref()
                .map(|c| c.label())
                .filter(|label| !label.is_empty())
                .unwrap_or("N/A")
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Serving Size: {} {}",
            profile.serving_size, profile.serving_size_unit
        )?;
        writeln!(f, "Total Nutrients: {}", profile.nutrients.len())?;
        writeln!(f)?;
        writeln!(f, "{light}")?;
        writeln!(
            f,
            "NUTRITION INFORMATION (per {}{})",
            profile.serving_size, profile.serving_size_unit
        )?;
        writeln!(f, "{light}")?;

        for nutrient in &profile.nutrients {
            write!(
                f,
                "  • {}: {} {}",
                nutrient.nutrient_name.as_deref().unwrap_or("Unknown"),
                nutrient.value,
                nutrient.unit_name.as_deref().unwrap_or("")
            )?;
            if let Some(dv) = nutrient.percent_daily_value {
                write!(f, " ({dv}% DV)")?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(f, "{heavy}")
    }
}

/// Candidate ranking behind a resolution, rendered as a table.
pub struct RankingReport<'a>(pub &'a Explanation);

impl fmt::Display for RankingReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let explanation = self.0;
        let Some(tier) = explanation.tier else {
            return writeln!(f, "No generic candidates found for '{}'.", explanation.query);
        };

        writeln!(
            f,
            "Candidates for '{}' from {} ({}):",
            explanation.query,
            tier,
            explanation.ranking.len()
        )?;
        writeln!(
            f,
            "{:>4}  {:>8}  {:>4}  {:>9}  {:<16}  DESCRIPTION",
            "#", "SCORE", "POS", "FDC ID", "DATA TYPE"
        )?;
        for (i, candidate) in explanation.ranking.iter().enumerate() {
            writeln!(
                f,
                "{:>4}  {:>8.1}  {:>4}  {:>9}  {:<16}  {}",
                i + 1,
                candidate.score,
                candidate.position,
                display_or_na(candidate.food.fdc_id),
                display_or_na(candidate.food.data_type.as_ref()),
                candidate.food.description
            )?;
        }
        Ok(())
    }
}

/// Render a profile as a human-readable report.
pub fn format_profile(profile: &NutritionProfile) -> String {
    ProfileReport(profile).to_string()
}

/// Render the candidate ranking behind a resolution as a table.
pub fn format_ranking(explanation: &Explanation) -> String {
    RankingReport(explanation).to_string()
}

/// Default file name for a saved profile:
/// `<query with spaces as underscores, lowercased>_nutrition_profile.json`.
pub fn default_save_path(query: &str) -> PathBuf {
    let stem = query.trim().replace(' ', "_").to_lowercase();
    PathBuf::from(format!("{stem}_nutrition_profile.json"))
}

/// Write a profile as pretty-printed JSON, creating parent directories.
///
/// # Errors
///
/// Returns an error if the profile cannot be serialized or written.
pub fn save_profile(profile: &NutritionProfile, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(profile)?;
    std::fs::write(path, json)?;
    Ok(())
}

fn display_or_na<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "N/A".to_owned(), |v| v.to_string())
}

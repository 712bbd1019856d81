use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::models::{FoodCategory, FoodDefinition, NutritionFacts, PlateItem, RecipeVariation};
use crate::planner::constants::KEY_DELIMITER;
use crate::state::FoodCatalog;

/// Catalog shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../../data/food_database.json");

/// One catalog entry as stored on disk (facts per 100 g).
#[derive(Debug, Deserialize)]
struct FoodRecord {
    name: String,
    category: FoodCategory,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
}

/// Parse a catalog from JSON: an object keyed by food id. Key order becomes catalog order.
pub fn parse_catalog(json: &str) -> Result<FoodCatalog> {
    let entries: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;

    let mut foods = Vec::with_capacity(entries.len());
    for (id, value) in entries {
        if id.is_empty() || id.contains(KEY_DELIMITER) {
            return Err(PlannerError::InvalidInput(format!(
                "Invalid food id: {:?}",
                id
            )));
        }

        let record: FoodRecord = serde_json::from_value(value)?;
        let facts = NutritionFacts::new(record.calories, record.protein, record.carbs, record.fat);
        if !facts.is_valid() {
            return Err(PlannerError::InvalidInput(format!(
                "Invalid nutrition facts for {}",
                id
            )));
        }

        foods.push(FoodDefinition {
            id,
            name: record.name,
            category: record.category,
            facts,
        });
    }

    debug!(foods = foods.len(), "catalog parsed");
    Ok(FoodCatalog::new(foods))
}

/// Load a catalog from a JSON file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let content = fs::read_to_string(path)?;
    parse_catalog(&content)
}

/// The bundled default catalog.
pub fn builtin_catalog() -> Result<FoodCatalog> {
    parse_catalog(BUILTIN_CATALOG)
}

/// Describe a variation's items, e.g. `250g Chicken Breast + 150g Potato`.
pub fn describe_items(items: &[PlateItem]) -> String {
    items
        .iter()
        .map(|item| format!("{}g {}", item.amount_g(), item.name()))
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Write ranked variations to a CSV file.
pub fn write_variations_csv<P: AsRef<Path>>(variations: &[RecipeVariation], path: P) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["rank", "id", "name", "items", "calories", "protein", "carbs", "fat"])?;

    for (i, variation) in variations.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            variation.id.to_string(),
            variation.name.clone(),
            describe_items(&variation.items),
            format!("{:.0}", variation.total.calories),
            format!("{:.1}", variation.total.protein),
            format!("{:.1}", variation.total.carbs),
            format!("{:.1}", variation.total.fat),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

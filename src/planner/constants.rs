use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::MacroSplit;

// ─────────────────────────────────────────────────────────────────────────────
// Nutrition
// ─────────────────────────────────────────────────────────────────────────────

/// Catalog facts are expressed per this many grams.
pub const FACTS_BASIS_G: f64 = 100.0;

/// Energy per gram of protein and carbohydrate.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// Energy per gram of fat.
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Default daily calorie goal.
pub const DEFAULT_DAILY_CALORIES: f64 = 1600.0;

/// Default plate: (food id, grams).
pub const DEFAULT_PLATE: &[(&str, f64)] = &[("chicken_breast", 250.0), ("potato", 150.0)];

// ─────────────────────────────────────────────────────────────────────────────
// Variation generation
// ─────────────────────────────────────────────────────────────────────────────

/// Default cap on enumerated combinations before generation is refused.
pub const DEFAULT_MAX_COMBINATIONS: usize = 10_000;

/// Separates tokens in a canonical variation key.
pub const KEY_DELIMITER: char = '|';

/// Separates food id and amount inside a key token.
pub const TOKEN_SEPARATOR: char = '-';

/// Number of search hits shown in previews.
pub const SEARCH_PREVIEW_COUNT: usize = 10;

// ─────────────────────────────────────────────────────────────────────────────
// BMR (Mifflin-St Jeor)
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_COEF: f64 = 10.0;
pub const BMR_HEIGHT_COEF: f64 = 6.25;
pub const BMR_AGE_COEF: f64 = 5.0;
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

pub const LB_PER_KG: f64 = 2.20462;
pub const CM_PER_INCH: f64 = 2.54;

pub const ACTIVITY_SEDENTARY: f64 = 1.2;
pub const ACTIVITY_LIGHT: f64 = 1.375;
pub const ACTIVITY_MODERATE: f64 = 1.55;
pub const ACTIVITY_ACTIVE: f64 = 1.725;
pub const ACTIVITY_VERY_ACTIVE: f64 = 1.9;

/// Fraction of maintenance kept by each cut tier.
pub const MILD_CUT_FACTOR: f64 = 0.91;
pub const MODERATE_CUT_FACTOR: f64 = 0.82;
pub const EXTREME_CUT_FACTOR: f64 = 0.63;

/// Expected loss per tier, pounds per week.
pub const MILD_CUT_LOSS_LB: f64 = 0.5;
pub const MODERATE_CUT_LOSS_LB: f64 = 1.0;
pub const EXTREME_CUT_LOSS_LB: f64 = 2.0;

/// Calories added to maintenance for a bulk.
pub const BULK_SURPLUS: i64 = 500;

// ─────────────────────────────────────────────────────────────────────────────
// Macro split presets
// ─────────────────────────────────────────────────────────────────────────────

/// Preset names in display order.
pub const MACRO_PRESET_NAMES: &[&str] =
    &["balanced", "high-protein", "low-carb", "keto", "endurance"];

pub static MACRO_PRESETS: LazyLock<HashMap<&'static str, MacroSplit>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("balanced", MacroSplit::new(30.0, 40.0, 30.0));
    m.insert("high-protein", MacroSplit::new(40.0, 30.0, 30.0));
    m.insert("low-carb", MacroSplit::new(40.0, 20.0, 40.0));
    m.insert("keto", MacroSplit::new(25.0, 5.0, 70.0));
    m.insert("endurance", MacroSplit::new(20.0, 55.0, 25.0));
    m
});

/// Look up a preset by name (case-insensitive).
pub fn macro_preset(name: &str) -> Option<MacroSplit> {
    MACRO_PRESETS.get(name.to_lowercase().as_str()).copied()
}

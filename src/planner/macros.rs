use crate::models::{MacroSplit, MacroTargets, NutritionFacts, TargetProgress};
use crate::planner::constants::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// Convert a calorie goal and percent split into daily grams per macro.
///
/// The split is used as given; it does not have to sum to 100.
pub fn calculate_macro_targets(calorie_goal: f64, split: &MacroSplit) -> MacroTargets {
    let grams = |pct: f64, kcal_per_g: f64| (calorie_goal * pct / 100.0 / kcal_per_g).round() as i64;

    MacroTargets {
        protein_g: grams(split.protein, KCAL_PER_G_PROTEIN),
        carbs_g: grams(split.carbs, KCAL_PER_G_CARBS),
        fat_g: grams(split.fat, KCAL_PER_G_FAT),
    }
}

/// `round(value / target * 100)`, or 0 when the target is not positive.
pub fn percent_of(value: f64, target: f64) -> i64 {
    if target > 0.0 {
        (value / target * 100.0).round() as i64
    } else {
        0
    }
}

/// How far a plate total goes toward the calorie goal and macro targets.
pub fn calculate_progress(
    total: &NutritionFacts,
    calorie_goal: f64,
    targets: &MacroTargets,
) -> TargetProgress {
    TargetProgress {
        calories_pct: percent_of(total.calories, calorie_goal),
        protein_pct: percent_of(total.protein, targets.protein_g as f64),
        carbs_pct: percent_of(total.carbs, targets.carbs_g as f64),
        fat_pct: percent_of(total.fat, targets.fat_g as f64),
    }
}

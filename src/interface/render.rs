use crate::models::{
    CalorieTargets, CutTarget, FoodDefinition, MacroTargets, Plate, RecipeVariation,
    TargetProgress, UnitSystem,
};
use crate::planner::bmr::kg_from_lb;
use crate::state::describe_items;

/// Display a plate with its totals and progress toward the daily targets.
pub fn display_plate(
    plate: &Plate,
    calorie_goal: f64,
    targets: &MacroTargets,
    progress: &TargetProgress,
) {
    println!();
    println!("=== Current Plate ===");
    println!();

    if plate.is_empty() {
        println!("  (empty)");
        println!();
        return;
    }

    let max_name_len = plate
        .items()
        .iter()
        .map(|item| item.name().len())
        .max()
        .unwrap_or(10);

    for item in plate.items() {
        let n = item.nutrition();
        println!(
            "  #{:<3} {:>6}g {:<width$} - {:>4.0} cal | P {:>5.1}g  C {:>5.1}g  F {:>5.1}g",
            item.id(),
            item.amount_g(),
            item.name(),
            n.calories,
            n.protein,
            n.carbs,
            n.fat,
            width = max_name_len
        );
    }

    let total = plate.total();
    println!();
    println!("--- Total ---");
    println!(
        "Calories: {:.0} / {:.0} ({}% of target)",
        total.calories, calorie_goal, progress.calories_pct
    );
    println!(
        "Protein:  {:.1}g / {}g ({}% of target)",
        total.protein, targets.protein_g, progress.protein_pct
    );
    println!(
        "Carbs:    {:.1}g / {}g ({}% of target)",
        total.carbs, targets.carbs_g, progress.carbs_pct
    );
    println!(
        "Fat:      {:.1}g / {}g ({}% of target)",
        total.fat, targets.fat_g, progress.fat_pct
    );
    println!();
}

/// Display ranked variations, at most `limit` of them.
pub fn display_variations(variations: &[RecipeVariation], limit: Option<usize>) {
    if variations.is_empty() {
        println!("No recipe variations (plate is empty).");
        return;
    }

    let shown = limit.unwrap_or(variations.len()).min(variations.len());

    println!();
    println!("=== Recipe Variations ({} of {}) ===", shown, variations.len());
    println!();

    for variation in variations.iter().take(shown) {
        let t = &variation.total;
        println!(
            "{:<22} {:>5.0} cal | P {:>5.1}g  C {:>5.1}g  F {:>5.1}g",
            variation.name, t.calories, t.protein, t.carbs, t.fat
        );
        println!("    {}", describe_items(&variation.items));
    }

    println!();
}

fn format_cut(label: &str, cut: &CutTarget, unit_system: UnitSystem) {
    let loss = match unit_system {
        UnitSystem::Imperial => format!("{:.1} lb/week", cut.weekly_loss_lb),
        UnitSystem::Metric => format!("{:.2} kg/week", kg_from_lb(cut.weekly_loss_lb)),
    };
    println!("  {:<14} {:>5} cal  (~{})", label, cut.calories, loss);
}

/// Display BMR, maintenance and the cut/bulk tiers.
pub fn display_calorie_targets(targets: &CalorieTargets, unit_system: UnitSystem) {
    println!();
    println!("=== Calorie Targets ===");
    println!();
    println!("  {:<14} {:>5} cal", "BMR", targets.bmr);
    println!("  {:<14} {:>5} cal", "Maintenance", targets.maintenance);
    format_cut("Mild cut", &targets.mild_cut, unit_system);
    format_cut("Moderate cut", &targets.moderate_cut, unit_system);
    format_cut("Extreme cut", &targets.extreme_cut, unit_system);
    println!("  {:<14} {:>5} cal", "Bulk", targets.bulk);
    println!();
}

/// Display daily macro targets for a calorie goal.
pub fn display_macro_targets(calorie_goal: f64, targets: &MacroTargets) {
    println!();
    println!("=== Target Macros ({:.0} cal) ===", calorie_goal);
    println!("  Protein: {}g", targets.protein_g);
    println!("  Carbs:   {}g", targets.carbs_g);
    println!("  Fat:     {}g", targets.fat_g);
    println!();
}

/// Display a simple list of foods with their per-100g facts.
pub fn display_food_list(foods: &[&FoodDefinition], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!(
            "  {:<20} {:<24} {:<10} {} cal/100g, P:{} C:{} F:{}",
            food.id,
            food.name,
            food.category.to_string(),
            food.facts.calories,
            food.facts.protein,
            food.facts.carbs,
            food.facts.fat
        );
    }

    println!();
}

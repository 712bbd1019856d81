use dialoguer::{Confirm, Input, Select};

use crate::error::{PlannerError, Result};
use crate::models::{FoodDefinition, Plate};
use crate::planner::constants::SEARCH_PREVIEW_COUNT;
use crate::state::FoodCatalog;

/// Prompt for a food by name. Returns `None` when the user enters nothing.
pub fn prompt_food<'a>(catalog: &'a FoodCatalog) -> Result<Option<&'a FoodDefinition>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Search for a food (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        let mut matches = catalog.search(input);
        if matches.is_empty() {
            matches = catalog.suggest(input);
            if matches.is_empty() {
                println!("No matching food found for '{}'", input);
                continue;
            }
            println!("No exact match for '{}'. Did you mean:", input);
        }

        if matches.len() == 1 {
            let food = matches[0];
            let confirm = Confirm::new()
                .with_prompt(format!("Use '{}'?", food.name))
                .default(true)
                .interact()?;
            if confirm {
                return Ok(Some(food));
            }
            continue;
        }

        let preview: Vec<&FoodDefinition> =
            matches.into_iter().take(SEARCH_PREVIEW_COUNT).collect();
        let mut options: Vec<String> = preview
            .iter()
            .map(|f| format!("{} ({} cal/100g)", f.name, f.facts.calories))
            .collect();
        options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which food?")
            .items(&options)
            .default(0)
            .interact()?;

        if selection < preview.len() {
            return Ok(Some(preview[selection]));
        }
    }
}

/// Prompt for an amount in grams.
pub fn prompt_amount(food_name: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("How many grams of {}?", food_name))
        .default("100".to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Build a plate interactively, one food at a time.
///
/// Invalid amounts are reported and the food is skipped; the plate is kept.
pub fn build_plate(catalog: &FoodCatalog) -> Result<Plate> {
    let mut plate = Plate::new();

    while let Some(food) = prompt_food(catalog)? {
        let amount = match prompt_amount(&food.name) {
            Ok(amount) => amount,
            Err(PlannerError::InvalidInput(msg)) => {
                println!("{}", msg);
                continue;
            }
            Err(e) => return Err(e),
        };

        match plate.add(food, amount) {
            Ok(_) => println!("Added: {}g {}", amount, food.name),
            Err(e) => println!("{}", e),
        }
    }

    Ok(plate)
}

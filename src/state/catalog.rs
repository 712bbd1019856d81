use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::{FoodCategory, FoodDefinition};

/// Minimum Jaro-Winkler score for a fuzzy name suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Read-only food reference data, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: Vec<FoodDefinition>,
    /// Food id -> index into `foods`.
    index: HashMap<String, usize>,
}

impl FoodCatalog {
    /// Build a catalog. A repeated id replaces the earlier entry in place.
    pub fn new(foods: Vec<FoodDefinition>) -> Self {
        let mut catalog = Self::default();
        for food in foods {
            match catalog.index.get(&food.id) {
                Some(&i) => catalog.foods[i] = food,
                None => {
                    catalog.index.insert(food.id.clone(), catalog.foods.len());
                    catalog.foods.push(food);
                }
            }
        }
        catalog
    }

    /// Get a food by id.
    pub fn get(&self, id: &str) -> Option<&FoodDefinition> {
        self.index.get(id).map(|&i| &self.foods[i])
    }

    /// Get a food by id, failing with `FoodNotFound`.
    pub fn lookup(&self, id: &str) -> Result<&FoodDefinition> {
        self.get(id)
            .ok_or_else(|| PlannerError::FoodNotFound(id.to_string()))
    }

    /// All foods in a category, in catalog order.
    pub fn find_by_category(&self, category: FoodCategory) -> Vec<&FoodDefinition> {
        self.foods
            .iter()
            .filter(|f| f.category == category)
            .collect()
    }

    /// Foods whose name contains `term` (case-insensitive). An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<&FoodDefinition> {
        let needle = term.to_lowercase();
        self.foods
            .iter()
            .filter(|f| f.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Foods with names similar to `term`, best match first.
    pub fn suggest(&self, term: &str) -> Vec<&FoodDefinition> {
        let needle = term.to_lowercase();
        let mut scored: Vec<(&FoodDefinition, f64)> = self
            .foods
            .iter()
            .map(|f| (f, jaro_winkler(&f.name.to_lowercase(), &needle)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().map(|(f, _)| f).collect()
    }

    /// All foods in catalog order.
    pub fn all_foods(&self) -> &[FoodDefinition] {
        &self.foods
    }

    /// Count of foods in the catalog.
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Check if catalog has no foods.
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

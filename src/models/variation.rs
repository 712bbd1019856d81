use serde::Serialize;

use crate::models::{NutritionFacts, PlateItem};

/// An alternative plate: same-category substitutes at every position, original amounts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeVariation {
    /// 1-based discovery index.
    pub id: usize,
    pub name: String,
    pub items: Vec<PlateItem>,
    pub total: NutritionFacts,
}

impl RecipeVariation {
    pub fn new(id: usize, items: Vec<PlateItem>, total: NutritionFacts) -> Self {
        Self {
            id,
            name: format!("Recipe Variation {}", id),
            items,
            total,
        }
    }

    /// Ids of the foods in this variation, in item order.
    pub fn food_ids(&self) -> Vec<&str> {
        self.items.iter().map(PlateItem::food_id).collect()
    }
}

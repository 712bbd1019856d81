use serde::Serialize;

use crate::error::{PlannerError, Result};
use crate::models::{FoodDefinition, NutritionFacts};
use crate::planner::nutrition;

/// One food on a plate. The nutrition snapshot is always derived from (food, amount).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlateItem {
    id: u64,
    food_id: String,
    name: String,
    amount_g: f64,
    nutrition: NutritionFacts,
}

impl PlateItem {
    /// Build an item, scaling the food's per-100g facts to `amount_g`.
    pub fn new(id: u64, food: &FoodDefinition, amount_g: f64) -> Result<Self> {
        let nutrition = nutrition::scale(food, amount_g)?;
        Ok(Self {
            id,
            food_id: food.id.clone(),
            name: food.name.clone(),
            amount_g,
            nutrition,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn food_id(&self) -> &str {
        &self.food_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount_g(&self) -> f64 {
        self.amount_g
    }

    pub fn nutrition(&self) -> NutritionFacts {
        self.nutrition
    }

    /// Same item with a different amount; nutrition is recomputed.
    pub fn with_amount(&self, food: &FoodDefinition, amount_g: f64) -> Result<Self> {
        Self::new(self.id, food, amount_g)
    }
}

/// The user's ordered list of food selections.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Plate {
    items: Vec<PlateItem>,
    #[serde(skip)]
    next_id: u64,
}

impl Plate {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a food; returns the new item's id.
    pub fn add(&mut self, food: &FoodDefinition, amount_g: f64) -> Result<u64> {
        let id = self.next_id.max(1);
        let item = PlateItem::new(id, food, amount_g)?;
        self.items.push(item);
        self.next_id = id + 1;
        Ok(id)
    }

    /// Remove an item by id, keeping the order of the rest.
    pub fn remove(&mut self, id: u64) -> Result<PlateItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(PlannerError::ItemNotFound(id))?;
        Ok(self.items.remove(index))
    }

    pub fn items(&self) -> &[PlateItem] {
        &self.items
    }

    /// Sum of the items' (already rounded) nutrition.
    pub fn total(&self) -> NutritionFacts {
        nutrition::aggregate(self.items.iter().map(PlateItem::nutrition))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodCategory;

    fn chicken() -> FoodDefinition {
        FoodDefinition::new(
            "chicken_breast",
            "Chicken Breast",
            FoodCategory::Protein,
            NutritionFacts::new(165.0, 31.0, 0.0, 3.6),
        )
    }

    #[test]
    fn test_add_assigns_increasing_ids() {
        let mut plate = Plate::new();
        let a = plate.add(&chicken(), 100.0).unwrap();
        let b = plate.add(&chicken(), 200.0).unwrap();
        assert_eq!((a, b), (1, 2));
        assert_eq!(plate.len(), 2);
    }

    #[test]
    fn test_add_rejects_non_positive_amount() {
        let mut plate = Plate::new();
        assert!(matches!(
            plate.add(&chicken(), 0.0),
            Err(PlannerError::InvalidAmount(_))
        ));
        assert!(plate.is_empty());
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut plate = Plate::new();
        let a = plate.add(&chicken(), 100.0).unwrap();
        let b = plate.add(&chicken(), 150.0).unwrap();
        let c = plate.add(&chicken(), 200.0).unwrap();

        plate.remove(b).unwrap();
        let ids: Vec<u64> = plate.items().iter().map(PlateItem::id).collect();
        assert_eq!(ids, vec![a, c]);

        assert!(matches!(plate.remove(b), Err(PlannerError::ItemNotFound(_))));
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut plate = Plate::new();
        let a = plate.add(&chicken(), 100.0).unwrap();
        plate.remove(a).unwrap();
        let b = plate.add(&chicken(), 100.0).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_with_amount_recomputes_nutrition() {
        let item = PlateItem::new(1, &chicken(), 100.0).unwrap();
        assert_eq!(item.nutrition().calories, 165.0);

        let doubled = item.with_amount(&chicken(), 200.0).unwrap();
        assert_eq!(doubled.id(), 1);
        assert_eq!(doubled.nutrition().calories, 330.0);
        assert_eq!(doubled.nutrition().protein, 62.0);
    }
}

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Substitution group of a food. Variations only swap foods within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Protein,
    #[serde(alias = "carbs")]
    Carb,
    Fat,
    Vegetable,
    Fruit,
    Dairy,
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FoodCategory::Protein => "protein",
            FoodCategory::Carb => "carb",
            FoodCategory::Fat => "fat",
            FoodCategory::Vegetable => "vegetable",
            FoodCategory::Fruit => "fruit",
            FoodCategory::Dairy => "dairy",
        };
        f.write_str(name)
    }
}

/// Energy and macronutrients, either per 100 g (catalog facts) or for a scaled amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionFacts {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// All-zero facts; identity for aggregation.
    pub fn zero() -> Self {
        Self::default()
    }

    /// True if no value is negative or non-finite.
    pub fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fat]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
    }
}

impl Add for NutritionFacts {
    type Output = NutritionFacts;

    fn add(self, rhs: Self) -> Self::Output {
        NutritionFacts {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl Sum for NutritionFacts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutritionFacts::zero(), |acc, n| acc + n)
    }
}

impl<'a> Sum<&'a NutritionFacts> for NutritionFacts {
    fn sum<I: Iterator<Item = &'a NutritionFacts>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// A catalog entry. Facts are per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDefinition {
    pub id: String,
    pub name: String,
    pub category: FoodCategory,
    pub facts: NutritionFacts,
}

impl FoodDefinition {
    pub fn new(id: &str, name: &str, category: FoodCategory, facts: NutritionFacts) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            facts,
        }
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} ({}): {} cal, P:{} C:{} F:{} per 100g",
            self.name,
            self.category,
            self.facts.calories,
            self.facts.protein,
            self.facts.carbs,
            self.facts.fat
        )
    }
}

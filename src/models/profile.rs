use serde::{Deserialize, Serialize};

use crate::planner::constants::{
    ACTIVITY_ACTIVE, ACTIVITY_LIGHT, ACTIVITY_MODERATE, ACTIVITY_SEDENTARY, ACTIVITY_VERY_ACTIVE,
};

/// Gender for the Mifflin-St Jeor offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Activity tier used to scale BMR into maintenance calories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => ACTIVITY_SEDENTARY,
            ActivityLevel::Light => ACTIVITY_LIGHT,
            ActivityLevel::Moderate => ACTIVITY_MODERATE,
            ActivityLevel::Active => ACTIVITY_ACTIVE,
            ActivityLevel::VeryActive => ACTIVITY_VERY_ACTIVE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilograms and centimeters.
    Metric,
    /// Pounds and inches.
    Imperial,
}

/// Body measurements for BMR. Weight/height are stored in the active unit system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrProfile {
    pub weight: f64,
    pub height: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub unit_system: UnitSystem,
}

impl Default for BmrProfile {
    fn default() -> Self {
        Self {
            weight: 70.0,
            height: 175.0,
            age: 25,
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
            unit_system: UnitSystem::Metric,
        }
    }
}

/// Partial update of a profile; `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BmrProfileUpdate {
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub activity_level: Option<ActivityLevel>,
}

impl BmrProfile {
    pub fn apply(&self, update: &BmrProfileUpdate) -> BmrProfile {
        BmrProfile {
            weight: update.weight.unwrap_or(self.weight),
            height: update.height.unwrap_or(self.height),
            age: update.age.unwrap_or(self.age),
            gender: update.gender.unwrap_or(self.gender),
            activity_level: update.activity_level.unwrap_or(self.activity_level),
            unit_system: self.unit_system,
        }
    }
}

/// A calorie deficit tier. Weekly loss is always in pounds per week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CutTarget {
    pub calories: i64,
    pub weekly_loss_lb: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalorieTargets {
    pub bmr: i64,
    pub maintenance: i64,
    pub mild_cut: CutTarget,
    pub moderate_cut: CutTarget,
    pub extreme_cut: CutTarget,
    pub bulk: i64,
}

/// Percent of daily calories per macro. Not required to sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroSplit {
    pub fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
        }
    }
}

impl Default for MacroSplit {
    fn default() -> Self {
        Self::new(30.0, 40.0, 30.0)
    }
}

/// Daily grams per macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MacroTargets {
    pub protein_g: i64,
    pub carbs_g: i64,
    pub fat_g: i64,
}

/// How much of each target a plate covers, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetProgress {
    pub calories_pct: i64,
    pub protein_pct: i64,
    pub carbs_pct: i64,
    pub fat_pct: i64,
}

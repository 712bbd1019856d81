pub mod food;
pub mod plate;
pub mod profile;
pub mod variation;

pub use food::{FoodCategory, FoodDefinition, NutritionFacts};
pub use plate::{Plate, PlateItem};
pub use profile::{
    ActivityLevel, BmrProfile, BmrProfileUpdate, CalorieTargets, CutTarget, Gender, MacroSplit,
    MacroTargets, TargetProgress, UnitSystem,
};
pub use variation::RecipeVariation;

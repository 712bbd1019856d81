use tracing::{debug, warn};

use crate::error::{PlannerError, Result};
use crate::models::{
    BmrProfile, BmrProfileUpdate, CalorieTargets, MacroSplit, MacroTargets, NutritionFacts, Plate,
    RecipeVariation, TargetProgress, UnitSystem,
};
use crate::planner::constants::{macro_preset, DEFAULT_DAILY_CALORIES, DEFAULT_PLATE};
use crate::planner::{
    calculate_macro_targets, calculate_progress, calculate_targets, convert_profile,
    generate_variations, sort_variations, SortDirection, SortMetric, VariationConfig,
};
use crate::state::FoodCatalog;

/// A user action that changes planner state.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannerEvent {
    AddItem { food_id: String, amount_g: f64 },
    RemoveItem(u64),
    SetCalorieGoal(f64),
    SetMacroSplit(MacroSplit),
    SetMacroPreset(String),
    SetBmrProfile(BmrProfileUpdate),
    SetUnitSystem(UnitSystem),
    SetSort {
        metric: SortMetric,
        direction: SortDirection,
    },
}

/// Everything the planner knows about the current user: plate, goals, profile and the
/// results derived from them.
///
/// Sessions are values. `apply` returns a new session and leaves `self` untouched, so a
/// rejected event never disturbs the previous state.
#[derive(Debug, Clone)]
pub struct PlannerSession {
    plate: Plate,
    calorie_goal: f64,
    macro_split: MacroSplit,
    profile: BmrProfile,
    sort_metric: SortMetric,
    sort_direction: SortDirection,
    config: VariationConfig,

    // Derived
    variations: Vec<RecipeVariation>,
    calorie_targets: Option<CalorieTargets>,
}

impl PlannerSession {
    /// Empty plate, default goals and profile.
    pub fn new(config: VariationConfig) -> Self {
        Self {
            plate: Plate::new(),
            calorie_goal: DEFAULT_DAILY_CALORIES,
            macro_split: MacroSplit::default(),
            profile: BmrProfile::default(),
            sort_metric: SortMetric::Calories,
            sort_direction: SortDirection::Ascending,
            config,
            variations: Vec::new(),
            calorie_targets: None,
        }
    }

    /// Session with the default plate already on it.
    pub fn with_default_plate(catalog: &FoodCatalog, config: VariationConfig) -> Result<Self> {
        let mut session = Self::new(config);
        for (food_id, amount_g) in DEFAULT_PLATE {
            session.plate.add(catalog.lookup(food_id)?, *amount_g)?;
        }
        session.refresh_variations(catalog)?;
        Ok(session)
    }

    /// Apply an event and recompute whatever depends on it.
    pub fn apply(&self, catalog: &FoodCatalog, event: PlannerEvent) -> Result<PlannerSession> {
        debug!(?event, "applying event");
        let result = self.clone().apply_owned(catalog, event);
        if let Err(e) = &result {
            warn!(error = %e, "event rejected");
        }
        result
    }

    fn apply_owned(mut self, catalog: &FoodCatalog, event: PlannerEvent) -> Result<Self> {
        match event {
            PlannerEvent::AddItem { food_id, amount_g } => {
                let food = catalog.lookup(&food_id)?;
                debug!(food = %food.debug_string(), amount_g, "adding plate item");
                self.plate.add(food, amount_g)?;
                self.refresh_variations(catalog)?;
            }
            PlannerEvent::RemoveItem(id) => {
                self.plate.remove(id)?;
                self.refresh_variations(catalog)?;
            }
            PlannerEvent::SetCalorieGoal(goal) => {
                if !goal.is_finite() || goal < 0.0 {
                    return Err(PlannerError::InvalidInput(format!(
                        "Calorie goal must be non-negative, got {}",
                        goal
                    )));
                }
                self.calorie_goal = goal;
            }
            PlannerEvent::SetMacroSplit(split) => {
                self.macro_split = split;
            }
            PlannerEvent::SetMacroPreset(name) => {
                self.macro_split =
                    macro_preset(&name).ok_or(PlannerError::UnknownPreset(name))?;
            }
            PlannerEvent::SetBmrProfile(update) => {
                let profile = self.profile.apply(&update);
                self.calorie_targets = Some(calculate_targets(&profile)?);
                self.profile = profile;
            }
            PlannerEvent::SetUnitSystem(unit_system) => {
                // Targets stay as they were until the profile is next recomputed
                self.profile = convert_profile(&self.profile, unit_system);
            }
            PlannerEvent::SetSort { metric, direction } => {
                self.sort_metric = metric;
                self.sort_direction = direction;
            }
        }
        Ok(self)
    }

    /// Replace the variation set for the current plate.
    fn refresh_variations(&mut self, catalog: &FoodCatalog) -> Result<()> {
        self.variations = generate_variations(catalog, self.plate.items(), &self.config)?;
        Ok(())
    }

    pub fn plate(&self) -> &Plate {
        &self.plate
    }

    pub fn plate_total(&self) -> NutritionFacts {
        self.plate.total()
    }

    pub fn calorie_goal(&self) -> f64 {
        self.calorie_goal
    }

    pub fn macro_split(&self) -> MacroSplit {
        self.macro_split
    }

    pub fn macro_targets(&self) -> MacroTargets {
        calculate_macro_targets(self.calorie_goal, &self.macro_split)
    }

    pub fn progress(&self) -> TargetProgress {
        calculate_progress(&self.plate_total(), self.calorie_goal, &self.macro_targets())
    }

    pub fn profile(&self) -> &BmrProfile {
        &self.profile
    }

    pub fn calorie_targets(&self) -> Option<&CalorieTargets> {
        self.calorie_targets.as_ref()
    }

    pub fn sort(&self) -> (SortMetric, SortDirection) {
        (self.sort_metric, self.sort_direction)
    }

    /// Variations in discovery order.
    pub fn variations(&self) -> &[RecipeVariation] {
        &self.variations
    }

    /// Variations ordered by the session's sort settings.
    pub fn ranked_variations(&self) -> Vec<RecipeVariation> {
        sort_variations(&self.variations, self.sort_metric, self.sort_direction)
    }
}

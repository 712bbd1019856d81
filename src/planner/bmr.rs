//! Basal metabolic rate and calorie targets.
//!
//! Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//! *American Journal of Clinical Nutrition*, 51(2), 241-247.

use crate::error::{PlannerError, Result};
use crate::models::{BmrProfile, CalorieTargets, CutTarget, Gender, UnitSystem};
use crate::planner::constants::*;
use crate::planner::nutrition::round_tenth;

#[inline]
pub fn kg_from_lb(lb: f64) -> f64 {
    lb / LB_PER_KG
}

#[inline]
pub fn lb_from_kg(kg: f64) -> f64 {
    kg * LB_PER_KG
}

#[inline]
pub fn cm_from_in(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

#[inline]
pub fn in_from_cm(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Weight (kg) and height (cm) of a profile, converting from imperial if needed.
pub fn metric_measurements(profile: &BmrProfile) -> (f64, f64) {
    match profile.unit_system {
        UnitSystem::Metric => (profile.weight, profile.height),
        UnitSystem::Imperial => (kg_from_lb(profile.weight), cm_from_in(profile.height)),
    }
}

/// Mifflin-St Jeor BMR in kcal/day, unrounded.
///
/// `BMR = 10 x weight_kg + 6.25 x height_cm - 5 x age + (5 | -161)`
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let offset = match gender {
        Gender::Male => BMR_MALE_OFFSET,
        Gender::Female => BMR_FEMALE_OFFSET,
    };
    BMR_WEIGHT_COEF * weight_kg + BMR_HEIGHT_COEF * height_cm - BMR_AGE_COEF * f64::from(age)
        + offset
}

/// Derive every calorie target from a profile.
///
/// Intermediate values stay unrounded; each output is rounded once.
pub fn calculate_targets(profile: &BmrProfile) -> Result<CalorieTargets> {
    for (label, value) in [("weight", profile.weight), ("height", profile.height)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(PlannerError::InvalidInput(format!(
                "{} must be positive, got {}",
                label, value
            )));
        }
    }

    let (weight_kg, height_cm) = metric_measurements(profile);
    let bmr = calculate_bmr(weight_kg, height_cm, profile.age, profile.gender);
    let maintenance = bmr * profile.activity_level.multiplier();

    let cut = |factor: f64, weekly_loss_lb: f64| CutTarget {
        calories: (maintenance * factor).round() as i64,
        weekly_loss_lb,
    };

    Ok(CalorieTargets {
        bmr: bmr.round() as i64,
        maintenance: maintenance.round() as i64,
        mild_cut: cut(MILD_CUT_FACTOR, MILD_CUT_LOSS_LB),
        moderate_cut: cut(MODERATE_CUT_FACTOR, MODERATE_CUT_LOSS_LB),
        extreme_cut: cut(EXTREME_CUT_FACTOR, EXTREME_CUT_LOSS_LB),
        bulk: maintenance.round() as i64 + BULK_SURPLUS,
    })
}

/// Switch a profile's unit system, converting weight/height to one decimal.
///
/// Returns the profile unchanged if it already uses `target`.
pub fn convert_profile(profile: &BmrProfile, target: UnitSystem) -> BmrProfile {
    if profile.unit_system == target {
        return profile.clone();
    }

    let (weight, height) = match target {
        UnitSystem::Imperial => (lb_from_kg(profile.weight), in_from_cm(profile.height)),
        UnitSystem::Metric => (kg_from_lb(profile.weight), cm_from_in(profile.height)),
    };

    BmrProfile {
        weight: round_tenth(weight),
        height: round_tenth(height),
        unit_system: target,
        ..profile.clone()
    }
}

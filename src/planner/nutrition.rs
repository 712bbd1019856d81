use crate::error::{PlannerError, Result};
use crate::models::{FoodDefinition, NutritionFacts};
use crate::planner::constants::FACTS_BASIS_G;

/// Round to one decimal place.
#[inline]
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Scale a food's per-100g facts to `amount_g`.
///
/// Calories are rounded to the nearest integer, macros to one decimal.
/// Non-positive (or non-finite) amounts are rejected with `InvalidAmount`.
pub fn scale(food: &FoodDefinition, amount_g: f64) -> Result<NutritionFacts> {
    if !amount_g.is_finite() || amount_g <= 0.0 {
        return Err(PlannerError::InvalidAmount(amount_g));
    }

    let multiplier = amount_g / FACTS_BASIS_G;
    let facts = &food.facts;

    Ok(NutritionFacts {
        calories: (facts.calories * multiplier).round(),
        protein: round_tenth(facts.protein * multiplier),
        carbs: round_tenth(facts.carbs * multiplier),
        fat: round_tenth(facts.fat * multiplier),
    })
}

/// Element-wise sum. Callers pass already-rounded per-item values; no re-rounding happens here.
pub fn aggregate<I>(items: I) -> NutritionFacts
where
    I: IntoIterator<Item = NutritionFacts>,
{
    items.into_iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodCategory;

    fn food(cal: f64, p: f64, c: f64, f: f64) -> FoodDefinition {
        FoodDefinition::new(
            "test_food",
            "Test Food",
            FoodCategory::Protein,
            NutritionFacts::new(cal, p, c, f),
        )
    }

    #[test]
    fn test_scale_at_basis_returns_facts() {
        let f = food(165.0, 31.0, 0.0, 3.6);
        assert_eq!(scale(&f, 100.0).unwrap(), f.facts);
    }

    #[test]
    fn test_scale_rounding() {
        // 250g of 165 cal / 31 P / 3.6 F
        let f = food(165.0, 31.0, 0.0, 3.6);
        let n = scale(&f, 250.0).unwrap();
        assert_eq!(n.calories, 413.0); // 412.5 rounds up
        assert_eq!(n.protein, 77.5);
        assert_eq!(n.fat, 9.0);
    }

    #[test]
    fn test_scale_rejects_non_positive() {
        let f = food(100.0, 1.0, 1.0, 1.0);
        assert!(matches!(scale(&f, 0.0), Err(PlannerError::InvalidAmount(_))));
        assert!(matches!(scale(&f, -5.0), Err(PlannerError::InvalidAmount(_))));
        assert!(matches!(
            scale(&f, f64::NAN),
            Err(PlannerError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(aggregate(Vec::new()), NutritionFacts::zero());
    }

    #[test]
    fn test_round_tenth() {
        assert_eq!(round_tenth(1.25), 1.3);
        assert_eq!(round_tenth(1.24), 1.2);
        assert_eq!(round_tenth(7.0), 7.0);
    }
}

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::{NutritionFacts, RecipeVariation};

/// Nutrient used to order variations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortMetric {
    Calories,
    Protein,
    Carbs,
    Fat,
}

impl SortMetric {
    pub fn value(self, facts: &NutritionFacts) -> f64 {
        match self {
            SortMetric::Calories => facts.calories,
            SortMetric::Protein => facts.protein,
            SortMetric::Carbs => facts.carbs,
            SortMetric::Fat => facts.fat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Order variations by one nutrient of their totals.
///
/// The sort is stable: equal values keep their input (discovery) order in both directions.
pub fn sort_variations(
    variations: &[RecipeVariation],
    metric: SortMetric,
    direction: SortDirection,
) -> Vec<RecipeVariation> {
    let mut sorted = variations.to_vec();
    sorted.sort_by(|a, b| {
        let va = metric.value(&a.total);
        let vb = metric.value(&b.total);
        let ord = match direction {
            SortDirection::Ascending => va.partial_cmp(&vb),
            SortDirection::Descending => vb.partial_cmp(&va),
        };
        ord.unwrap_or(Ordering::Equal)
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variation(id: usize, calories: f64, protein: f64) -> RecipeVariation {
        RecipeVariation::new(
            id,
            Vec::new(),
            NutritionFacts::new(calories, protein, 0.0, 0.0),
        )
    }

    fn ids(vs: &[RecipeVariation]) -> Vec<usize> {
        vs.iter().map(|v| v.id).collect()
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let vs = vec![
            variation(1, 500.0, 0.0),
            variation(2, 300.0, 0.0),
            variation(3, 700.0, 0.0),
        ];

        let asc = sort_variations(&vs, SortMetric::Calories, SortDirection::Ascending);
        assert_eq!(ids(&asc), vec![2, 1, 3]);

        let desc = sort_variations(&vs, SortMetric::Calories, SortDirection::Descending);
        assert_eq!(ids(&desc), vec![3, 1, 2]);
    }

    #[test]
    fn test_ties_keep_discovery_order() {
        let vs = vec![
            variation(1, 400.0, 0.0),
            variation(2, 300.0, 0.0),
            variation(3, 400.0, 0.0),
        ];

        let asc = sort_variations(&vs, SortMetric::Calories, SortDirection::Ascending);
        assert_eq!(ids(&asc), vec![2, 1, 3]);

        let desc = sort_variations(&vs, SortMetric::Calories, SortDirection::Descending);
        assert_eq!(ids(&desc), vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_by_protein_leaves_input_untouched() {
        let vs = vec![variation(1, 0.0, 20.5), variation(2, 0.0, 10.1)];
        let sorted = sort_variations(&vs, SortMetric::Protein, SortDirection::Ascending);
        assert_eq!(ids(&sorted), vec![2, 1]);
        assert_eq!(ids(&vs), vec![1, 2]);
    }
}

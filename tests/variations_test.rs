use std::collections::HashSet;

use plate_planner_rs::error::PlannerError;
use plate_planner_rs::models::{FoodCategory, FoodDefinition, NutritionFacts, Plate, PlateItem};
use plate_planner_rs::planner::{
    aggregate, canonical_key, generate_variations, sort_variations, SortDirection, SortMetric,
    VariationConfig,
};
use plate_planner_rs::state::FoodCatalog;
use plate_planner_rs::RecipeVariation;

fn food(id: &str, category: FoodCategory, cal: f64, p: f64, c: f64, f: f64) -> FoodDefinition {
    FoodDefinition::new(id, id, category, NutritionFacts::new(cal, p, c, f))
}

/// Proteins listed so catalog order differs from alphabetical order.
fn sample_catalog() -> FoodCatalog {
    FoodCatalog::new(vec![
        food("tuna", FoodCategory::Protein, 132.0, 28.0, 0.0, 1.3),
        food("beef", FoodCategory::Protein, 183.0, 27.0, 0.0, 8.0),
        food("tofu", FoodCategory::Protein, 76.0, 8.0, 1.9, 4.8),
        food("rice", FoodCategory::Carb, 130.0, 2.7, 28.0, 0.3),
        food("potato", FoodCategory::Carb, 77.0, 2.0, 17.0, 0.1),
        food("olive_oil", FoodCategory::Fat, 884.0, 0.0, 0.0, 100.0),
        food("apple", FoodCategory::Fruit, 52.0, 0.3, 13.8, 0.2),
        food("banana", FoodCategory::Fruit, 89.0, 1.1, 22.8, 0.3),
    ])
}

fn plate_of(catalog: &FoodCatalog, items: &[(&str, f64)]) -> Plate {
    let mut plate = Plate::new();
    for (id, amount) in items {
        plate.add(catalog.lookup(id).unwrap(), *amount).unwrap();
    }
    plate
}

fn keys(variations: &[RecipeVariation]) -> Vec<String> {
    variations
        .iter()
        .map(|v| canonical_key(v.items.iter().map(|i| (i.food_id(), i.amount_g()))))
        .collect()
}

#[test]
fn test_empty_plate_has_no_variations() {
    let catalog = sample_catalog();
    let variations = generate_variations(&catalog, &[], &VariationConfig::default()).unwrap();
    assert!(variations.is_empty());
}

#[test]
fn test_single_item_yields_category_size() {
    let catalog = sample_catalog();
    let plate = plate_of(&catalog, &[("beef", 200.0)]);

    let variations =
        generate_variations(&catalog, plate.items(), &VariationConfig::default()).unwrap();

    assert_eq!(variations.len(), 3);
    let foods: Vec<&str> = variations.iter().map(|v| v.items[0].food_id()).collect();
    assert_eq!(foods, vec!["tuna", "beef", "tofu"]);
}

#[test]
fn test_discovery_order_not_key_order() {
    let catalog = sample_catalog();
    let plate = plate_of(&catalog, &[("tuna", 100.0)]);

    let variations =
        generate_variations(&catalog, plate.items(), &VariationConfig::default()).unwrap();

    // "beef-100" sorts before "tuna-100", but tuna is enumerated first
    assert_eq!(variations[0].id, 1);
    assert_eq!(variations[0].name, "Recipe Variation 1");
    assert_eq!(variations[0].items[0].food_id(), "tuna");
    assert_eq!(variations[1].items[0].food_id(), "beef");
}

#[test]
fn test_single_member_category_always_present() {
    let catalog = sample_catalog();
    let plate = plate_of(&catalog, &[("olive_oil", 10.0), ("rice", 150.0)]);

    let variations =
        generate_variations(&catalog, plate.items(), &VariationConfig::default()).unwrap();

    assert_eq!(variations.len(), 2);
    for v in &variations {
        assert!(v.food_ids().contains(&"olive_oil"));
        assert_eq!(v.items.len(), 2);
    }
}

#[test]
fn test_swapped_positions_collapse_to_same_keys() {
    let catalog = sample_catalog();
    let ab = plate_of(&catalog, &[("apple", 100.0), ("banana", 100.0)]);
    let ba = plate_of(&catalog, &[("banana", 100.0), ("apple", 100.0)]);

    let config = VariationConfig::default();
    let from_ab = generate_variations(&catalog, ab.items(), &config).unwrap();
    let from_ba = generate_variations(&catalog, ba.items(), &config).unwrap();

    // apple+apple, apple+banana, banana+banana; banana+apple collapses
    assert_eq!(from_ab.len(), 3);
    assert_eq!(keys(&from_ab), keys(&from_ba));
    assert_eq!(
        keys(&from_ab),
        vec![
            "apple-100|apple-100".to_string(),
            "apple-100|banana-100".to_string(),
            "banana-100|banana-100".to_string(),
        ]
    );
}

#[test]
fn test_different_amounts_do_not_collapse() {
    let catalog = sample_catalog();
    let plate = plate_of(&catalog, &[("apple", 100.0), ("apple", 50.0)]);

    let variations =
        generate_variations(&catalog, plate.items(), &VariationConfig::default()).unwrap();
    assert_eq!(variations.len(), 4);

    let unique: HashSet<String> = keys(&variations).into_iter().collect();
    assert_eq!(unique.len(), 4);
}

#[test]
fn test_amounts_are_never_substituted() {
    let catalog = sample_catalog();
    let plate = plate_of(&catalog, &[("tofu", 120.0), ("potato", 300.0), ("banana", 80.0)]);

    let variations =
        generate_variations(&catalog, plate.items(), &VariationConfig::default()).unwrap();
    assert_eq!(variations.len(), 3 * 2 * 2);

    let mut expected: Vec<f64> = plate.items().iter().map(PlateItem::amount_g).collect();
    expected.sort_by(|a, b| a.partial_cmp(b).unwrap());

    for v in &variations {
        let mut amounts: Vec<f64> = v.items.iter().map(PlateItem::amount_g).collect();
        amounts.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(amounts, expected);

        let total = aggregate(v.items.iter().map(PlateItem::nutrition));
        assert_eq!(v.total, total);
    }
}

#[test]
fn test_items_follow_key_order() {
    let catalog = sample_catalog();
    let plate = plate_of(&catalog, &[("rice", 150.0), ("beef", 250.0)]);

    let variations =
        generate_variations(&catalog, plate.items(), &VariationConfig::default()).unwrap();

    // First discovered: rice + tuna, rebuilt as "rice-150|tuna-250"
    assert_eq!(variations[0].food_ids(), vec!["rice", "tuna"]);
    assert_eq!(variations[0].items[1].amount_g(), 250.0);
}

#[test]
fn test_generation_cap() {
    let catalog = sample_catalog();
    let plate = plate_of(&catalog, &[("tuna", 100.0), ("rice", 100.0), ("apple", 100.0)]);

    let tight = VariationConfig {
        max_combinations: Some(11),
    };
    let err = generate_variations(&catalog, plate.items(), &tight).unwrap_err();
    assert!(matches!(
        err,
        PlannerError::GenerationTooLarge {
            combinations: 12,
            limit: 11
        }
    ));

    let exact = VariationConfig {
        max_combinations: Some(12),
    };
    assert_eq!(
        generate_variations(&catalog, plate.items(), &exact)
            .unwrap()
            .len(),
        12
    );

    let unbounded = VariationConfig::unbounded();
    assert_eq!(
        generate_variations(&catalog, plate.items(), &unbounded)
            .unwrap()
            .len(),
        12
    );
}

#[test]
fn test_unknown_food_in_plate() {
    let catalog = sample_catalog();
    let other = FoodCatalog::new(vec![food("seitan", FoodCategory::Protein, 370.0, 75.0, 14.0, 1.9)]);
    let plate = plate_of(&other, &[("seitan", 100.0)]);

    let err = generate_variations(&catalog, plate.items(), &VariationConfig::default()).unwrap_err();
    assert!(matches!(err, PlannerError::FoodNotFound(id) if id == "seitan"));
}

#[test]
fn test_ranked_variations_by_calories() {
    let catalog = sample_catalog();
    let plate = plate_of(&catalog, &[("beef", 100.0)]);
    let variations =
        generate_variations(&catalog, plate.items(), &VariationConfig::default()).unwrap();

    // tuna 132, beef 183, tofu 76
    let asc = sort_variations(&variations, SortMetric::Calories, SortDirection::Ascending);
    let cals: Vec<f64> = asc.iter().map(|v| v.total.calories).collect();
    assert_eq!(cals, vec![76.0, 132.0, 183.0]);

    let desc = sort_variations(&variations, SortMetric::Calories, SortDirection::Descending);
    let cals: Vec<f64> = desc.iter().map(|v| v.total.calories).collect();
    assert_eq!(cals, vec![183.0, 132.0, 76.0]);
}

#[test]
fn test_regeneration_replaces_previous_set() {
    let catalog = sample_catalog();
    let mut plate = plate_of(&catalog, &[("beef", 100.0), ("rice", 100.0)]);
    let config = VariationConfig::default();

    let first = generate_variations(&catalog, plate.items(), &config).unwrap();
    assert_eq!(first.len(), 6);

    let id = plate.items()[1].id();
    plate.remove(id).unwrap();
    let second = generate_variations(&catalog, plate.items(), &config).unwrap();
    assert_eq!(second.len(), 3);
    assert_eq!(second.last().map(|v| v.id), Some(3));
}

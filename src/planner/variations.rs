//! Same-category substitution enumeration.
//!
//! Every plate position may be replaced by any catalog food of the same category while the
//! position keeps its original amount. The full Cartesian product over positions is walked
//! and combinations are deduplicated by a canonical key built from the *sorted* list of
//! `<food_id>-<amount>` tokens, so two assignments with the same multiset of (food, amount)
//! pairs collapse into one variation regardless of which position holds which food.
//!
//! Cost is `Π |candidates[i]|`, exponential in plate length. `VariationConfig` carries a cap
//! that is checked before enumeration starts.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{PlannerError, Result};
use crate::models::{FoodDefinition, PlateItem, RecipeVariation};
use crate::planner::constants::{DEFAULT_MAX_COMBINATIONS, KEY_DELIMITER, TOKEN_SEPARATOR};
use crate::planner::nutrition;
use crate::state::FoodCatalog;

/// Limits for variation generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariationConfig {
    /// Refuse to enumerate more combinations than this. `None` disables the check.
    pub max_combinations: Option<usize>,
}

impl Default for VariationConfig {
    fn default() -> Self {
        Self {
            max_combinations: Some(DEFAULT_MAX_COMBINATIONS),
        }
    }
}

impl VariationConfig {
    pub fn unbounded() -> Self {
        Self {
            max_combinations: None,
        }
    }
}

/// Iterative Cartesian product over index ranges `0..sizes[i]`.
///
/// Yields index tuples depth-first with position 0 varying slowest. An empty `sizes` (or any
/// zero-sized position) yields nothing.
#[derive(Debug, Clone)]
pub struct CartesianProduct {
    sizes: Vec<usize>,
    current: Vec<usize>,
    done: bool,
}

impl CartesianProduct {
    pub fn new(sizes: Vec<usize>) -> Self {
        let done = sizes.is_empty() || sizes.contains(&0);
        let current = vec![0; sizes.len()];
        Self {
            sizes,
            current,
            done,
        }
    }
}

impl Iterator for CartesianProduct {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let out = self.current.clone();

        // Odometer increment from the last position
        for pos in (0..self.sizes.len()).rev() {
            self.current[pos] += 1;
            if self.current[pos] < self.sizes[pos] {
                return Some(out);
            }
            self.current[pos] = 0;
        }

        self.done = true;
        Some(out)
    }
}

/// Number of combinations for the given candidate counts. Zero positions means zero.
pub fn count_combinations(sizes: &[usize]) -> u128 {
    if sizes.is_empty() {
        return 0;
    }
    sizes
        .iter()
        .fold(1u128, |acc, &n| acc.saturating_mul(n as u128))
}

/// Canonical dedup key: sorted `<food_id>-<amount>` tokens joined by `|`.
pub fn canonical_key<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut tokens: Vec<String> = pairs
        .into_iter()
        .map(|(food_id, amount)| format!("{}{}{}", food_id, TOKEN_SEPARATOR, amount))
        .collect();
    tokens.sort();
    tokens.join(&KEY_DELIMITER.to_string())
}

/// Split a canonical key back into (food id, amount) pairs, in key order.
pub fn parse_key(key: &str) -> Result<Vec<(String, f64)>> {
    key.split(KEY_DELIMITER)
        .map(|token| -> Result<(String, f64)> {
            let (food_id, amount) = token.rsplit_once(TOKEN_SEPARATOR).ok_or_else(|| {
                PlannerError::InvalidInput(format!("Malformed variation token: {}", token))
            })?;
            let amount: f64 = amount.parse().map_err(|_| {
                PlannerError::InvalidInput(format!("Malformed amount in token: {}", token))
            })?;
            Ok((food_id.to_string(), amount))
        })
        .collect()
}

/// Rebuild a variation from its canonical key. Items follow key (sorted) order.
fn build_variation(catalog: &FoodCatalog, id: usize, key: &str) -> Result<RecipeVariation> {
    let items = parse_key(key)?
        .into_iter()
        .enumerate()
        .map(|(i, (food_id, amount))| -> Result<PlateItem> {
            let food = catalog.lookup(&food_id)?;
            PlateItem::new(i as u64 + 1, food, amount)
        })
        .collect::<Result<Vec<_>>>()?;

    let total = nutrition::aggregate(items.iter().map(PlateItem::nutrition));
    Ok(RecipeVariation::new(id, items, total))
}

/// Generate the distinct same-category variations of a plate, in discovery order.
///
/// Returns an empty list for an empty plate. Fails with `GenerationTooLarge` when the
/// combination count exceeds `config.max_combinations`, and with `FoodNotFound` when a plate
/// item references a food missing from the catalog.
pub fn generate_variations(
    catalog: &FoodCatalog,
    plate: &[PlateItem],
    config: &VariationConfig,
) -> Result<Vec<RecipeVariation>> {
    if plate.is_empty() {
        return Ok(Vec::new());
    }

    let mut candidates: Vec<Vec<&FoodDefinition>> = Vec::with_capacity(plate.len());
    for item in plate {
        let food = catalog.lookup(item.food_id())?;
        candidates.push(catalog.find_by_category(food.category));
    }

    let sizes: Vec<usize> = candidates.iter().map(Vec::len).collect();
    let combinations = count_combinations(&sizes);

    if let Some(limit) = config.max_combinations {
        if combinations > limit as u128 {
            warn!(combinations, limit, "variation generation refused");
            return Err(PlannerError::GenerationTooLarge {
                combinations,
                limit,
            });
        }
    }

    debug!(positions = plate.len(), combinations, "enumerating variations");

    let amounts: Vec<f64> = plate.iter().map(PlateItem::amount_g).collect();
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut variations: Vec<RecipeVariation> = Vec::new();

    for combo in CartesianProduct::new(sizes) {
        let key = canonical_key(
            combo
                .iter()
                .enumerate()
                .map(|(pos, &choice)| (candidates[pos][choice].id.as_str(), amounts[pos])),
        );

        if seen.contains_key(&key) {
            continue;
        }

        let variation = build_variation(catalog, variations.len() + 1, &key)?;
        seen.insert(key, variations.len());
        variations.push(variation);
    }

    debug!(unique = variations.len(), "variations generated");
    Ok(variations)
}

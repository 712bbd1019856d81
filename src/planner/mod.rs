pub mod bmr;
pub mod constants;
pub mod macros;
pub mod nutrition;
pub mod ranking;
pub mod variations;

pub use bmr::{calculate_bmr, calculate_targets, convert_profile};
pub use constants::*;
pub use macros::{calculate_macro_targets, calculate_progress, percent_of};
pub use nutrition::{aggregate, scale};
pub use ranking::{sort_variations, SortDirection, SortMetric};
pub use variations::{
    canonical_key, count_combinations, generate_variations, CartesianProduct, VariationConfig,
};

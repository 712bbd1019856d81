mod catalog;
mod persistence;
mod session;

pub use catalog::{FoodCatalog, SUGGESTION_THRESHOLD};
pub use persistence::{
    builtin_catalog, describe_items, load_catalog, parse_catalog, write_variations_csv,
};
pub use session::{PlannerEvent, PlannerSession};

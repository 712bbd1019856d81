pub mod prompts;
pub mod render;

pub use prompts::{build_plate, prompt_amount, prompt_food, prompt_yes_no};
pub use render::{
    display_calorie_targets, display_food_list, display_macro_targets, display_plate,
    display_variations,
};

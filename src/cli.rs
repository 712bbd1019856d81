use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::{ActivityLevel, FoodCategory, Gender, MacroSplit};
use crate::planner::SortMetric;

/// PlatePlanner: plan meals against calorie/macro targets and explore recipe variations.
#[derive(Parser, Debug)]
#[command(name = "plate_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a food catalog JSON file (defaults to the bundled catalog).
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List or search the food catalog.
    Foods {
        /// Case-insensitive name substring.
        #[arg(short, long)]
        search: Option<String>,

        /// Only show foods in this category.
        #[arg(long, value_enum)]
        category: Option<FoodCategory>,
    },

    /// Show a plate, its progress toward targets, and its recipe variations.
    Variations(VariationArgs),

    /// Calculate BMR, maintenance and cut/bulk calorie targets.
    Bmr {
        /// Body weight (kg, or lb with --imperial).
        #[arg(long)]
        weight: f64,

        /// Height (cm, or inches with --imperial).
        #[arg(long)]
        height: f64,

        #[arg(long)]
        age: u32,

        #[arg(long, value_enum)]
        gender: Gender,

        #[arg(long, value_enum, default_value = "moderate")]
        activity: ActivityLevel,

        /// Interpret weight/height as pounds/inches.
        #[arg(long)]
        imperial: bool,
    },

    /// Convert a calorie goal and macro split into gram targets.
    Macros {
        #[arg(short, long)]
        goal: f64,

        #[command(flatten)]
        split: SplitArgs,
    },

    /// Build a plate interactively, then show its variations.
    Build(ViewArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Variations(VariationArgs::default())
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct SplitArgs {
    /// Macro split as PROTEIN/CARBS/FAT percent, e.g. 30/40/30.
    #[arg(long, value_parser = parse_split, conflicts_with = "preset")]
    pub split: Option<MacroSplit>,

    /// Named macro split preset (balanced, high-protein, low-carb, keto, endurance).
    #[arg(long)]
    pub preset: Option<String>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct ViewArgs {
    /// Nutrient to sort variations by.
    #[arg(long, value_enum)]
    pub sort: Option<SortMetric>,

    /// Sort descending instead of ascending.
    #[arg(long)]
    pub desc: bool,

    /// Show at most this many variations.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Refuse to enumerate more combinations than this.
    #[arg(long)]
    pub max_combinations: Option<usize>,

    /// Enumerate every combination regardless of size.
    #[arg(long, conflicts_with = "max_combinations")]
    pub unbounded: bool,

    /// Write the ranked variations to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Daily calorie goal.
    #[arg(short, long)]
    pub goal: Option<f64>,

    #[command(flatten)]
    pub split: SplitArgs,
}

#[derive(Args, Debug, Default, Clone)]
pub struct VariationArgs {
    /// Plate item as FOOD_ID:GRAMS; repeatable. Uses the default plate when omitted.
    #[arg(short, long = "item", value_parser = parse_item)]
    pub items: Vec<(String, f64)>,

    #[command(flatten)]
    pub view: ViewArgs,
}

/// Parse `FOOD_ID:GRAMS`.
pub fn parse_item(s: &str) -> Result<(String, f64), String> {
    let (food_id, amount) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("expected FOOD_ID:GRAMS, got '{}'", s))?;
    let amount: f64 = amount
        .trim()
        .parse()
        .map_err(|_| format!("invalid amount '{}'", amount))?;
    Ok((food_id.trim().to_string(), amount))
}

/// Parse `PROTEIN/CARBS/FAT`.
pub fn parse_split(s: &str) -> Result<MacroSplit, String> {
    let parts: Vec<f64> = s
        .split('/')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| format!("invalid macro split '{}'", s))?;

    match parts.as_slice() {
        [protein, carbs, fat] => Ok(MacroSplit::new(*protein, *carbs, *fat)),
        _ => Err(format!("expected PROTEIN/CARBS/FAT, got '{}'", s)),
    }
}

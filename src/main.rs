use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use plate_planner_rs::cli::{Cli, Command, SplitArgs, ViewArgs};
use plate_planner_rs::error::Result;
use plate_planner_rs::interface::{
    build_plate, display_calorie_targets, display_food_list, display_macro_targets,
    display_plate, display_variations, prompt_yes_no,
};
use plate_planner_rs::models::{
    ActivityLevel, BmrProfileUpdate, FoodCategory, Gender, UnitSystem,
};
use plate_planner_rs::planner::{SortDirection, SortMetric, VariationConfig};
use plate_planner_rs::state::{
    builtin_catalog, load_catalog, write_variations_csv, FoodCatalog, PlannerEvent,
    PlannerSession,
};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install a stderr subscriber. `--verbose` forces debug, otherwise `RUST_LOG` or warn.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => builtin_catalog()?,
    };
    info!(foods = catalog.len(), "catalog loaded");

    match cli.command.unwrap_or_default() {
        Command::Foods { search, category } => cmd_foods(&catalog, search.as_deref(), category),
        Command::Variations(args) => cmd_variations(&catalog, &args.items, &args.view),
        Command::Bmr {
            weight,
            height,
            age,
            gender,
            activity,
            imperial,
        } => cmd_bmr(&catalog, weight, height, age, gender, activity, imperial),
        Command::Macros { goal, split } => cmd_macros(&catalog, goal, &split),
        Command::Build(view) => cmd_build(&catalog, &view),
    }
}

/// List or search the catalog.
fn cmd_foods(catalog: &FoodCatalog, search: Option<&str>, category: Option<FoodCategory>) -> Result<()> {
    let foods: Vec<_> = catalog
        .search(search.unwrap_or(""))
        .into_iter()
        .filter(|f| category.is_none_or(|c| f.category == c))
        .collect();

    display_food_list(&foods, "Foods");
    Ok(())
}

fn variation_config(view: &ViewArgs) -> VariationConfig {
    if view.unbounded {
        VariationConfig::unbounded()
    } else {
        match view.max_combinations {
            Some(limit) => VariationConfig {
                max_combinations: Some(limit),
            },
            None => VariationConfig::default(),
        }
    }
}

/// Apply goal/split options to a session.
fn apply_split(
    catalog: &FoodCatalog,
    mut session: PlannerSession,
    split: &SplitArgs,
) -> Result<PlannerSession> {
    if let Some(split) = split.split {
        session = session.apply(catalog, PlannerEvent::SetMacroSplit(split))?;
    }
    if let Some(preset) = &split.preset {
        session = session.apply(catalog, PlannerEvent::SetMacroPreset(preset.clone()))?;
    }
    Ok(session)
}

/// Apply view options (goal, split, sort) and print plate + variations.
fn show_session(catalog: &FoodCatalog, mut session: PlannerSession, view: &ViewArgs) -> Result<()> {
    if let Some(goal) = view.goal {
        session = session.apply(catalog, PlannerEvent::SetCalorieGoal(goal))?;
    }
    session = apply_split(catalog, session, &view.split)?;

    let direction = if view.desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    session = session.apply(
        catalog,
        PlannerEvent::SetSort {
            metric: view.sort.unwrap_or(SortMetric::Calories),
            direction,
        },
    )?;

    display_plate(
        session.plate(),
        session.calorie_goal(),
        &session.macro_targets(),
        &session.progress(),
    );

    let ranked = session.ranked_variations();
    display_variations(&ranked, view.limit);

    if let Some(path) = &view.csv {
        write_variations_csv(&ranked, path)?;
        println!("Wrote {} variations to {}", ranked.len(), path.display());
    }

    Ok(())
}

/// Show variations for a plate given on the command line (or the default plate).
fn cmd_variations(catalog: &FoodCatalog, items: &[(String, f64)], view: &ViewArgs) -> Result<()> {
    let config = variation_config(view);

    let mut session = if items.is_empty() {
        PlannerSession::with_default_plate(catalog, config)?
    } else {
        PlannerSession::new(config)
    };

    for (food_id, amount_g) in items {
        session = session.apply(
            catalog,
            PlannerEvent::AddItem {
                food_id: food_id.clone(),
                amount_g: *amount_g,
            },
        )?;
    }

    show_session(catalog, session, view)
}

/// Calculate calorie targets for a body profile.
fn cmd_bmr(
    catalog: &FoodCatalog,
    weight: f64,
    height: f64,
    age: u32,
    gender: Gender,
    activity: ActivityLevel,
    imperial: bool,
) -> Result<()> {
    let mut session = PlannerSession::new(VariationConfig::default());

    if imperial {
        session = session.apply(catalog, PlannerEvent::SetUnitSystem(UnitSystem::Imperial))?;
    }

    session = session.apply(
        catalog,
        PlannerEvent::SetBmrProfile(BmrProfileUpdate {
            weight: Some(weight),
            height: Some(height),
            age: Some(age),
            gender: Some(gender),
            activity_level: Some(activity),
        }),
    )?;

    if let Some(targets) = session.calorie_targets() {
        display_calorie_targets(targets, session.profile().unit_system);
    }
    Ok(())
}

/// Print gram targets for a calorie goal.
fn cmd_macros(catalog: &FoodCatalog, goal: f64, split: &SplitArgs) -> Result<()> {
    let session = PlannerSession::new(VariationConfig::default())
        .apply(catalog, PlannerEvent::SetCalorieGoal(goal))?;
    let session = apply_split(catalog, session, split)?;

    display_macro_targets(session.calorie_goal(), &session.macro_targets());
    Ok(())
}

/// Build a plate with prompts, then show it like `variations`.
fn cmd_build(catalog: &FoodCatalog, view: &ViewArgs) -> Result<()> {
    let plate = build_plate(catalog)?;
    if plate.is_empty() {
        println!("Plate is empty; nothing to show.");
        return Ok(());
    }

    let mut session = PlannerSession::new(variation_config(view));
    for item in plate.items() {
        session = session.apply(
            catalog,
            PlannerEvent::AddItem {
                food_id: item.food_id().to_string(),
                amount_g: item.amount_g(),
            },
        )?;
    }

    let mut view = view.clone();
    if view.csv.is_none() && prompt_yes_no("Export variations to variations.csv?", false)? {
        view.csv = Some("variations.csv".into());
    }

    show_session(catalog, session, &view)
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Invalid amount: {0} g (must be greater than zero)")]
    InvalidAmount(f64),

    #[error("Too many combinations: {combinations} exceeds the limit of {limit}")]
    GenerationTooLarge { combinations: u128, limit: usize },

    #[error("Plate item not found: {0}")]
    ItemNotFound(u64),

    #[error("Unknown macro split preset: {0}")]
    UnknownPreset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Not enough {food} in stock: need {required:.2} kg, have {available:.2} kg")]
    InsufficientStock {
        food: String,
        required: f64,
        available: f64,
    },

    #[error("Battery critical at {level}%, feeding halted")]
    CriticalBattery { level: u32 },

    #[error("Unknown food: {name}{}", suggestion_hint(.suggestion))]
    UnknownFood {
        name: String,
        suggestion: Option<String>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean {}?)", name),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;

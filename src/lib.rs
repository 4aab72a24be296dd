pub mod cli;
pub mod conditions;
pub mod config;
pub mod cycle;
pub mod distribution;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod state;

pub use conditions::{Conditions, RandomConditions};
pub use config::FarmConfig;
pub use cycle::{CycleDriver, CycleReport};
pub use error::{FeedError, Result};
pub use models::{FoodType, NutritionPlan, Shed};

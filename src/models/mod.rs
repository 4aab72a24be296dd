pub mod food;
pub mod log;
pub mod plan;
pub mod shed;

pub use food::FoodType;
pub use log::{FeedEvent, FeedLog, LogEntry};
pub use plan::{FoodMix, NutritionPlan, PlanEntry};
pub use shed::Shed;

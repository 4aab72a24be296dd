pub mod engine;
pub mod path;

pub use engine::{distribute, Distribution, FoodOutcome};
pub use path::{check_clear_path, PathCheck};

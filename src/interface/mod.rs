pub mod render;

pub use render::{display_farm, display_log, display_summary};

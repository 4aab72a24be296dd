pub mod constants;
pub mod ration;

pub use constants::*;
pub use ration::{adaptive_multiplier, compute_load, compute_load_for, mean_appetite};

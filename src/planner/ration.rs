use crate::models::FoodType;
use crate::planner::constants::*;

/// Mean of the appetite samples, `None` when there are none.
pub fn mean_appetite(history: &[f64]) -> Option<f64> {
    if history.is_empty() {
        return None;
    }
    Some(history.iter().sum::<f64>() / history.len() as f64)
}

/// Load multiplier from past average consumption per cow.
///
/// Three buckets, no smoothing: below 0.8x the target reduces the next load
/// to 0.9, above 1.1x raises it to 1.1, anything else (or no history) is 1.0.
pub fn adaptive_multiplier(target_per_cow: f64, history: &[f64]) -> f64 {
    let Some(mean) = mean_appetite(history) else {
        return NEUTRAL_MULTIPLIER;
    };

    if mean < LOW_APPETITE_RATIO * target_per_cow {
        REDUCE_MULTIPLIER
    } else if mean > HIGH_APPETITE_RATIO * target_per_cow {
        INCREASE_MULTIPLIER
    } else {
        NEUTRAL_MULTIPLIER
    }
}

/// Kilograms to prepare for `cow_count` cows at `kg_per_cow` each.
pub fn compute_load_for(kg_per_cow: f64, cow_count: u32, history: &[f64]) -> f64 {
    let load = kg_per_cow * cow_count as f64 * adaptive_multiplier(kg_per_cow, history);
    load.max(0.0)
}

/// Kilograms of `food` to prepare this cycle, based on its nominal weight.
pub fn compute_load(food: &FoodType, cow_count: u32, history: &[f64]) -> f64 {
    compute_load_for(food.nominal_weight_per_cow, cow_count, history)
}

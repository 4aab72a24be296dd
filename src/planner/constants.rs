/// Mean appetite below this fraction of the per-cow target shrinks the next load.
pub const LOW_APPETITE_RATIO: f64 = 0.8;

/// Mean appetite above this fraction of the per-cow target grows the next load.
pub const HIGH_APPETITE_RATIO: f64 = 1.1;

/// Multiplier applied after a low-appetite cycle.
pub const REDUCE_MULTIPLIER: f64 = 0.9;

/// Multiplier applied after a high-appetite cycle.
pub const INCREASE_MULTIPLIER: f64 = 1.1;

/// Multiplier with no history or steady appetite.
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

// ─────────────────────────────────────────────────────────────────────────────
// Distribution behaviour
// ─────────────────────────────────────────────────────────────────────────────

/// Chance each obstacle sensor (camera, radar) fires for a cow.
pub const OBSTACLE_PROBABILITY: f64 = 1.0 / 3.0;

/// Chance a single path check finds the lane clear (2:1 toward clear).
pub const PATH_CLEAR_PROBABILITY: f64 = 2.0 / 3.0;

/// Path checks before a shed is skipped for the round.
pub const PATH_CHECK_ATTEMPTS: u32 = 3;

/// Lower bound of the fraction of a portion a cow eats.
pub const APPETITE_MIN: f64 = 0.7;

/// Upper bound of the fraction of a portion a cow eats.
pub const APPETITE_MAX: f64 = 1.0;

// ─────────────────────────────────────────────────────────────────────────────
// Farm defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Stock of each food when it is added to the farm.
pub const DEFAULT_INITIAL_STOCK_KG: f64 = 1000.0;

pub const DEFAULT_WATER_CAPACITY_LITERS: f64 = 200.0;

/// Water drawn to soften one mix.
pub const DEFAULT_WATER_PER_MIX_LITERS: f64 = 30.0;

pub const DEFAULT_DISTRIBUTIONS_PER_DAY: u32 = 4;

pub const DEFAULT_FOOD_PUSHES_PER_DAY: u32 = 6;

// ─────────────────────────────────────────────────────────────────────────────
// Battery (percent)
// ─────────────────────────────────────────────────────────────────────────────

pub const BATTERY_FULL: u32 = 100;

pub const BATTERY_WARN_BELOW: u32 = 20;

pub const BATTERY_CRITICAL_BELOW: u32 = 5;

pub const BATTERY_DRAIN_MIN: u32 = 1;

pub const BATTERY_DRAIN_MAX: u32 = 3;

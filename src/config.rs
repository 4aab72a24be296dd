use serde::{Deserialize, Serialize};

use crate::error::{FeedError, Result};
use crate::models::{FoodMix, FoodType, NutritionPlan, Shed};
use crate::planner::constants::*;

/// Water tank settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterConfig {
    pub capacity_liters: f64,
    /// Liters drawn to soften each mix.
    pub per_mix_liters: f64,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            capacity_liters: DEFAULT_WATER_CAPACITY_LITERS,
            per_mix_liters: DEFAULT_WATER_PER_MIX_LITERS,
        }
    }
}

/// How often the robot serves and pushes food each day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub distributions_per_day: u32,
    pub food_pushes_per_day: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            distributions_per_day: DEFAULT_DISTRIBUTIONS_PER_DAY,
            food_pushes_per_day: DEFAULT_FOOD_PUSHES_PER_DAY,
        }
    }
}

/// Battery thresholds and drain per check, in percent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryConfig {
    pub initial: u32,
    pub warn_below: u32,
    pub critical_below: u32,
    pub drain_min: u32,
    pub drain_max: u32,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            initial: BATTERY_FULL,
            warn_below: BATTERY_WARN_BELOW,
            critical_below: BATTERY_CRITICAL_BELOW,
            drain_min: BATTERY_DRAIN_MIN,
            drain_max: BATTERY_DRAIN_MAX,
        }
    }
}

/// Probabilities behind the random outcomes of a feeding round.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviourConfig {
    /// Chance that each of the camera and the radar reports an obstacle.
    pub obstacle_probability: f64,
    /// Chance that a single path check finds the lane clear.
    pub path_clear_probability: f64,
    pub path_attempts: u32,
    /// Bounds of the fraction of its portion a cow eats.
    pub appetite_min: f64,
    pub appetite_max: f64,
}

impl Default for BehaviourConfig {
    fn default() -> Self {
        Self {
            obstacle_probability: OBSTACLE_PROBABILITY,
            path_clear_probability: PATH_CLEAR_PROBABILITY,
            path_attempts: PATH_CHECK_ATTEMPTS,
            appetite_min: APPETITE_MIN,
            appetite_max: APPETITE_MAX,
        }
    }
}

/// Everything needed to set up a farm and run feeding cycles on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmConfig {
    pub foods: Vec<FoodType>,
    pub sheds: Vec<Shed>,
    pub plan: NutritionPlan,

    #[serde(default = "default_initial_stock")]
    pub initial_stock_kg: f64,

    #[serde(default)]
    pub water: WaterConfig,

    #[serde(default)]
    pub schedule: ScheduleConfig,

    #[serde(default)]
    pub battery: BatteryConfig,

    #[serde(default)]
    pub behaviour: BehaviourConfig,

    /// Scale loads by recent appetite.
    #[serde(default = "default_true")]
    pub adaptive: bool,

    /// Check the lane before serving each shed.
    #[serde(default = "default_true")]
    pub path_check: bool,
}

fn default_initial_stock() -> f64 {
    DEFAULT_INITIAL_STOCK_KG
}

fn default_true() -> bool {
    true
}

impl Default for FarmConfig {
    /// The demo farm: four foods, two sheds, a spring plan.
    fn default() -> Self {
        let food = |name: &str, nominal: f64, location: &str| FoodType {
            name: name.to_string(),
            nominal_weight_per_cow: nominal,
            storage_location: Some(location.to_string()),
        };
        let shed = |id: &str, cow_type: &str, cow_count: u32| Shed {
            shed_id: id.to_string(),
            cow_type: cow_type.to_string(),
            cow_count,
        };
        let mix = |items: &[(&str, f64)]| -> FoodMix {
            items
                .iter()
                .map(|(name, kg)| (name.to_string(), *kg))
                .collect()
        };

        let mut plan = NutritionPlan::new("Spring", Some("Passover"));
        plan.set_plan(
            "Shed1",
            "Milking Cows",
            mix(&[("Hay", 4.0), ("Corn", 3.0), ("Minerals", 0.5)]),
        );
        plan.set_plan("Shed2", "Calves", mix(&[("Hay", 2.0), ("Silage", 3.0)]));

        Self {
            foods: vec![
                food("Hay", 4.0, "Ground Zone A"),
                food("Corn", 3.0, "Bag Area B"),
                food("Minerals", 0.5, "Bag Area C"),
                food("Silage", 3.0, "Ground Zone D"),
            ],
            sheds: vec![shed("Shed1", "Milking Cows", 5), shed("Shed2", "Calves", 4)],
            plan,
            initial_stock_kg: DEFAULT_INITIAL_STOCK_KG,
            water: WaterConfig::default(),
            schedule: ScheduleConfig::default(),
            battery: BatteryConfig::default(),
            behaviour: BehaviourConfig::default(),
            adaptive: true,
            path_check: true,
        }
    }
}

impl FarmConfig {
    /// Check every value the simulation depends on.
    pub fn validate(&self) -> Result<()> {
        for food in &self.foods {
            food.validate()?;
        }
        for shed in &self.sheds {
            shed.validate()?;
        }
        for (shed_id, cow_type, mix) in self.plan.entries() {
            let mut seen = Vec::with_capacity(mix.len());
            for (food, kg) in mix {
                non_negative(&format!("plan {}/{} {}", shed_id, cow_type, food), *kg)?;
                let key = food.to_lowercase();
                if seen.contains(&key) {
                    return Err(FeedError::InvalidInput(format!(
                        "plan {}/{} lists {} more than once",
                        shed_id, cow_type, food
                    )));
                }
                seen.push(key);
            }
        }

        non_negative("initial_stock_kg", self.initial_stock_kg)?;
        non_negative("water.capacity_liters", self.water.capacity_liters)?;
        non_negative("water.per_mix_liters", self.water.per_mix_liters)?;

        let b = &self.battery;
        if b.drain_min == 0 || b.drain_min > b.drain_max {
            return Err(FeedError::InvalidInput(format!(
                "battery drain range {}..={} is invalid",
                b.drain_min, b.drain_max
            )));
        }
        if b.critical_below > b.warn_below || b.warn_below > b.initial {
            return Err(FeedError::InvalidInput(
                "battery thresholds must satisfy critical <= warn <= initial".to_string(),
            ));
        }

        let p = &self.behaviour;
        probability("behaviour.obstacle_probability", p.obstacle_probability)?;
        probability("behaviour.path_clear_probability", p.path_clear_probability)?;
        if p.path_attempts == 0 {
            return Err(FeedError::InvalidInput(
                "behaviour.path_attempts must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&p.appetite_min)
            || !(0.0..=1.0).contains(&p.appetite_max)
            || p.appetite_min > p.appetite_max
        {
            return Err(FeedError::InvalidInput(format!(
                "appetite bounds {}..{} must lie within 0..1",
                p.appetite_min, p.appetite_max
            )));
        }

        Ok(())
    }
}

fn non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FeedError::InvalidInput(format!("{} must be >= 0, got {}", field, value)))
    }
}

fn probability(field: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(FeedError::InvalidInput(format!(
            "{} must be within 0..1, got {}",
            field, value
        )))
    }
}

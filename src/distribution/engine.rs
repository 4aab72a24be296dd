use tracing::debug;

use crate::conditions::Conditions;
use crate::error::{FeedError, Result};
use crate::models::{FeedEvent, FoodMix};
use crate::state::{AppetiteHistory, FeedLedger};

/// What happened to one food during a distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodOutcome {
    pub food: String,
    pub loaded: f64,
    pub portion: f64,
    pub eaten: f64,
    pub leftover: f64,
    /// Kilograms never served because an obstacle blocked the cow.
    pub skipped: f64,
    pub cows_fed: u32,
    /// Eaten divided by the whole herd, skipped cows included.
    pub average_eaten: f64,
}

/// Result of serving a herd: per-food totals and the per-cow events.
#[derive(Debug, Clone, Default)]
pub struct Distribution {
    pub outcomes: Vec<FoodOutcome>,
    pub events: Vec<FeedEvent>,
}

/// Serve `food_loads` to a herd of `cow_count` cows.
///
/// Every cow gets an equal portion of each food unless the camera or the radar
/// reports an obstacle in front of it; then the cow is skipped for that food
/// and its portion counts as skipped, not as leftover. A served cow eats a
/// fraction of its portion drawn from `conditions`, the rest is leftover.
///
/// After each food, the average eaten per cow is appended to `history`.
pub fn distribute(
    food_loads: &FoodMix,
    cow_count: u32,
    conditions: &mut impl Conditions,
    ledger: &mut FeedLedger,
    history: &mut AppetiteHistory,
) -> Result<Distribution> {
    if cow_count == 0 {
        return Err(FeedError::InvalidInput(
            "cannot distribute food to zero cows".to_string(),
        ));
    }

    let mut distribution = Distribution::default();

    for (food, &load) in food_loads {
        let portion = load / cow_count as f64;
        let mut outcome = FoodOutcome {
            food: food.clone(),
            loaded: load,
            portion,
            eaten: 0.0,
            leftover: 0.0,
            skipped: 0.0,
            cows_fed: 0,
            average_eaten: 0.0,
        };

        for cow in 1..=cow_count {
            let camera = conditions.camera_obstacle();
            let radar = conditions.radar_obstacle();
            if camera || radar {
                outcome.skipped += portion;
                debug!(cow, food = %food, camera, radar, "obstacle, cow skipped");
                distribution.events.push(FeedEvent::ObstacleSkip {
                    cow,
                    food: food.clone(),
                    camera,
                    radar,
                });
                continue;
            }

            let fraction = conditions.appetite().clamp(0.0, 1.0);
            let eaten = portion * fraction;
            outcome.eaten += eaten;
            outcome.leftover += portion - eaten;
            outcome.cows_fed += 1;
            debug!(cow, food = %food, portion, eaten, "cow fed");
            distribution.events.push(FeedEvent::CowFed {
                cow,
                food: food.clone(),
                given: portion,
                eaten,
            });
        }

        outcome.average_eaten = outcome.eaten / cow_count as f64;
        history.record(food, outcome.average_eaten);

        ledger.add_loaded(food, load);
        ledger.add_eaten(food, outcome.eaten);
        ledger.add_leftover(food, outcome.leftover);
        ledger.add_skipped(food, outcome.skipped);

        distribution.outcomes.push(outcome);
    }

    Ok(distribution)
}

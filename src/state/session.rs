use std::collections::BTreeMap;

use crate::config::FarmConfig;
use crate::error::Result;
use crate::models::{FeedLog, FoodType, NutritionPlan, Shed};
use crate::state::{AppetiteHistory, Battery, FeedLedger, FoodCatalog, Inventory, WaterTank};

/// All mutable state of one simulated farm.
pub struct FarmSession {
    pub catalog: FoodCatalog,
    pub sheds: Vec<Shed>,
    pub plan: NutritionPlan,
    pub inventory: Inventory,
    pub water: WaterTank,
    pub battery: Battery,
    pub ledger: FeedLedger,
    pub log: FeedLog,
    /// Appetite history per shed id.
    histories: BTreeMap<String, AppetiteHistory>,
}

impl FarmSession {
    /// Build a session from a configuration.
    ///
    /// Fails if the configuration is invalid or the plan names a food the
    /// catalog does not know.
    pub fn new(config: &FarmConfig) -> Result<Self> {
        config.validate()?;

        let catalog = FoodCatalog::new(config.foods.iter().cloned());
        for (_, _, mix) in config.plan.entries() {
            for food in mix.keys() {
                catalog.require(food)?;
            }
        }

        let mut inventory = Inventory::new();
        for food in catalog.iter() {
            inventory.add_food(&food.name, config.initial_stock_kg);
        }

        Ok(Self {
            catalog,
            sheds: config.sheds.clone(),
            plan: config.plan.clone(),
            inventory,
            water: WaterTank::new(config.water.capacity_liters, config.water.per_mix_liters),
            battery: Battery::new(&config.battery),
            ledger: FeedLedger::default(),
            log: FeedLog::default(),
            histories: BTreeMap::new(),
        })
    }

    /// Add a food type with the given starting stock.
    pub fn add_food_type(&mut self, food: FoodType, stock_kg: f64) -> Result<()> {
        food.validate()?;
        self.inventory.add_food(&food.name, stock_kg);
        self.catalog.add(food);
        Ok(())
    }

    pub fn add_shed(&mut self, shed: Shed) -> Result<()> {
        shed.validate()?;
        self.sheds.push(shed);
        Ok(())
    }

    pub fn history(&self, shed_id: &str) -> Option<&AppetiteHistory> {
        self.histories.get(shed_id)
    }

    /// The ledger and a shed's appetite history, borrowed together for a distribution.
    pub fn ledger_and_history(&mut self, shed_id: &str) -> (&mut FeedLedger, &mut AppetiteHistory) {
        let history = self.histories.entry(shed_id.to_string()).or_default();
        (&mut self.ledger, history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FeedError;
    use crate::models::FoodMix;

    #[test]
    fn test_new_stocks_every_food() {
        let session = FarmSession::new(&FarmConfig::default()).unwrap();
        assert_eq!(session.catalog.len(), 4);
        for food in session.catalog.iter() {
            assert_eq!(session.inventory.stock(&food.name), Some(1000.0));
        }
        assert_eq!(session.battery.level(), 100);
        assert_eq!(session.water.liters(), 200.0);
    }

    #[test]
    fn test_plan_with_unknown_food_rejected() {
        let mut config = FarmConfig::default();
        config.plan.set_plan(
            "Shed2",
            "Calves",
            FoodMix::from([("Silag".to_string(), 1.0)]),
        );
        match FarmSession::new(&config) {
            Err(FeedError::UnknownFood { suggestion, .. }) => {
                assert_eq!(suggestion.as_deref(), Some("Silage"))
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("unknown food accepted"),
        }
    }

    #[test]
    fn test_add_food_type_and_shed() {
        let mut session = FarmSession::new(&FarmConfig::default()).unwrap();
        session
            .add_food_type(FoodType::new("Oats", 1.0, Some("Bag Area E")).unwrap(), 50.0)
            .unwrap();
        assert_eq!(session.inventory.stock("oats"), Some(50.0));
        assert!(session.catalog.get("Oats").is_some());

        assert!(session
            .add_shed(Shed {
                shed_id: "Shed3".to_string(),
                cow_type: "Bulls".to_string(),
                cow_count: 0,
            })
            .is_err());
    }
}

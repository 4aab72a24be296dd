use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{FeedError, Result};
use crate::models::{FoodMix, NutritionPlan, Shed};

/// Stock of each food in kilograms. Never negative.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    /// Kilograms keyed by lowercase food name.
    stock: BTreeMap<String, f64>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a food with an initial stock.
    pub fn add_food(&mut self, name: &str, kg: f64) {
        self.stock.insert(name.to_lowercase(), kg.max(0.0));
    }

    /// Current stock of a food, `None` if it is not tracked.
    pub fn stock(&self, name: &str) -> Option<f64> {
        self.stock.get(&name.to_lowercase()).copied()
    }

    /// Add stock to a tracked food.
    pub fn restock(&mut self, name: &str, kg: f64) -> Result<()> {
        if !kg.is_finite() || kg < 0.0 {
            return Err(FeedError::InvalidInput(format!(
                "cannot restock {} kg of {}",
                kg, name
            )));
        }
        let stock = self.stock_mut(name)?;
        *stock += kg;
        Ok(())
    }

    /// Take `kg` of one food out of storage.
    pub fn withdraw(&mut self, name: &str, kg: f64) -> Result<()> {
        self.ensure_available(name, kg)?;
        let stock = self.stock_mut(name)?;
        *stock -= kg;
        Ok(())
    }

    /// Take every food of `required` out of storage, all or nothing.
    ///
    /// All foods are checked before any stock is touched, so a shortfall on
    /// one food leaves the whole inventory unchanged. Keys naming the same
    /// food in different case draw on the same stock and are checked together.
    pub fn collect(&mut self, required: &FoodMix) -> Result<FoodMix> {
        let mut totals: BTreeMap<String, (&str, f64)> = BTreeMap::new();
        for (name, kg) in required {
            check_weight(name, *kg)?;
            let total = totals.entry(name.to_lowercase()).or_insert((name.as_str(), 0.0));
            total.1 += kg;
        }
        for (name, kg) in totals.values() {
            self.ensure_available(name, *kg)?;
        }

        for (name, kg) in totals.values() {
            let stock = self.stock_mut(name)?;
            *stock -= kg;
            debug!(food = %name, kg, remaining = *stock, "withdrew from storage");
        }

        Ok(required.clone())
    }

    /// Collect a shed's planned mix: kg per cow times the number of cows.
    ///
    /// A shed without a plan collects nothing.
    pub fn collect_food(&mut self, shed: &Shed, plan: &NutritionPlan) -> Result<FoodMix> {
        let Some(mix) = plan.mix_for(shed) else {
            return Ok(FoodMix::new());
        };
        let required: FoodMix = mix
            .iter()
            .map(|(name, kg_per_cow)| (name.clone(), kg_per_cow * shed.cow_count as f64))
            .collect();
        self.collect(&required)
    }

    fn ensure_available(&self, name: &str, kg: f64) -> Result<()> {
        check_weight(name, kg)?;
        let available = self.stock(name).ok_or_else(|| FeedError::UnknownFood {
            name: name.to_string(),
            suggestion: None,
        })?;
        if available < kg {
            return Err(FeedError::InsufficientStock {
                food: name.to_string(),
                required: kg,
                available,
            });
        }
        Ok(())
    }

    fn stock_mut(&mut self, name: &str) -> Result<&mut f64> {
        self.stock
            .get_mut(&name.to_lowercase())
            .ok_or_else(|| FeedError::UnknownFood {
                name: name.to_string(),
                suggestion: None,
            })
    }
}

fn check_weight(name: &str, kg: f64) -> Result<()> {
    if kg.is_finite() && kg >= 0.0 {
        Ok(())
    } else {
        Err(FeedError::InvalidInput(format!("cannot collect {} kg of {}", kg, name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.add_food("Hay", 100.0);
        inventory.add_food("Corn", 10.0);
        inventory
    }

    fn plan() -> NutritionPlan {
        let mut plan = NutritionPlan::new("Spring", None);
        plan.set_plan(
            "Shed1",
            "Milking Cows",
            FoodMix::from([("Hay".to_string(), 4.0), ("Corn".to_string(), 3.0)]),
        );
        plan
    }

    #[test]
    fn test_collect_food_deducts_stock() {
        let mut inventory = inventory();
        let shed = Shed::new("Shed1", "Milking Cows", 3).unwrap();
        let collected = inventory.collect_food(&shed, &plan()).unwrap();

        assert_eq!(collected.get("Hay"), Some(&12.0));
        assert_eq!(collected.get("Corn"), Some(&9.0));
        assert_eq!(inventory.stock("hay"), Some(88.0));
        assert_eq!(inventory.stock("corn"), Some(1.0));
    }

    #[test]
    fn test_collect_food_shortfall_leaves_stock_unchanged() {
        let mut inventory = Inventory::new();
        inventory.add_food("Corn", 100.0);
        inventory.add_food("Hay", 10.0);
        // Corn (15 kg) is checked first and would be available; Hay needs 20 kg
        let shed = Shed::new("Shed1", "Milking Cows", 5).unwrap();
        let err = inventory.collect_food(&shed, &plan()).unwrap_err();

        match err {
            FeedError::InsufficientStock {
                food,
                required,
                available,
            } => {
                assert_eq!(food, "Hay");
                assert_eq!(required, 20.0);
                assert_eq!(available, 10.0);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(inventory.stock("Hay"), Some(10.0));
        assert_eq!(inventory.stock("Corn"), Some(100.0));
    }

    #[test]
    fn test_collect_food_without_plan() {
        let mut inventory = inventory();
        let shed = Shed::new("Shed9", "Calves", 2).unwrap();
        assert!(inventory.collect_food(&shed, &plan()).unwrap().is_empty());
        assert_eq!(inventory.stock("Hay"), Some(100.0));
    }

    #[test]
    fn test_withdraw_exact_stock() {
        let mut inventory = inventory();
        inventory.withdraw("Corn", 10.0).unwrap();
        assert_eq!(inventory.stock("Corn"), Some(0.0));
        assert!(inventory.withdraw("Corn", 0.1).is_err());
        assert_eq!(inventory.stock("Corn"), Some(0.0));
    }

    #[test]
    fn test_unknown_food() {
        let mut inventory = inventory();
        assert!(matches!(
            inventory.withdraw("Oats", 1.0),
            Err(FeedError::UnknownFood { .. })
        ));
    }

    #[test]
    fn test_collect_same_food_in_two_cases_counts_once() {
        let mut inventory = Inventory::new();
        inventory.add_food("Hay", 5.0);
        let required = FoodMix::from([("Hay".to_string(), 4.0), ("hay".to_string(), 4.0)]);

        match inventory.collect(&required) {
            Err(FeedError::InsufficientStock { required, available, .. }) => {
                assert_eq!(required, 8.0);
                assert_eq!(available, 5.0);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(inventory.stock("Hay"), Some(5.0));

        let required = FoodMix::from([("Hay".to_string(), 2.0), ("HAY".to_string(), 3.0)]);
        inventory.collect(&required).unwrap();
        assert_eq!(inventory.stock("Hay"), Some(0.0));
    }

    #[test]
    fn test_negative_or_nan_weight_rejected() {
        let mut inventory = inventory();
        for kg in [-4.0, f64::NAN, f64::INFINITY] {
            let required = FoodMix::from([("Hay".to_string(), kg)]);
            assert!(matches!(
                inventory.collect(&required),
                Err(FeedError::InvalidInput(_))
            ));
            assert!(matches!(
                inventory.withdraw("Corn", kg),
                Err(FeedError::InvalidInput(_))
            ));
        }
        assert_eq!(inventory.stock("Hay"), Some(100.0));
        assert_eq!(inventory.stock("Corn"), Some(10.0));

        let mut plan = NutritionPlan::new("Spring", None);
        plan.set_plan("Shed1", "Milking Cows", FoodMix::from([("Hay".to_string(), -4.0)]));
        let shed = Shed::new("Shed1", "Milking Cows", 2).unwrap();
        assert!(inventory.collect_food(&shed, &plan).is_err());
        assert_eq!(inventory.stock("Hay"), Some(100.0));
    }

    #[test]
    fn test_restock() {
        let mut inventory = inventory();
        inventory.restock("corn", 5.0).unwrap();
        assert_eq!(inventory.stock("Corn"), Some(15.0));
        assert!(inventory.restock("corn", -1.0).is_err());
    }
}

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::SeedableRng;

use moo_mover_rs::config::FarmConfig;
use moo_mover_rs::distribution::check_clear_path;
use moo_mover_rs::models::{FeedEvent, FoodType, NutritionPlan, Shed};
use moo_mover_rs::{Conditions, CycleDriver, FeedError, RandomConditions};

/// Outcomes fixed up front: queued path looks, then clear lanes; no obstacles.
struct Fixed {
    appetite: f64,
    paths: VecDeque<bool>,
    path_looks: u32,
}

impl Fixed {
    fn new(appetite: f64) -> Self {
        Self {
            appetite,
            paths: VecDeque::new(),
            path_looks: 0,
        }
    }
}

impl Conditions for Fixed {
    fn camera_obstacle(&mut self) -> bool {
        false
    }

    fn radar_obstacle(&mut self) -> bool {
        false
    }

    fn appetite(&mut self) -> f64 {
        self.appetite
    }

    fn path_clear(&mut self) -> bool {
        self.path_looks += 1;
        self.paths.pop_front().unwrap_or(true)
    }

    fn battery_drain(&mut self) -> u32 {
        2
    }
}

fn herd_of_six() -> FarmConfig {
    let mut config = FarmConfig::default();
    config.foods = vec![FoodType::new("Hay", 4.5, Some("Ground Zone A")).unwrap()];
    config.sheds = vec![Shed::new("Barn", "Heifers", 6).unwrap()];
    config.plan = NutritionPlan::new("Winter", None);
    config.schedule.distributions_per_day = 1;
    config
}

fn collected_kg(entries: &[moo_mover_rs::models::LogEntry]) -> f64 {
    entries
        .iter()
        .filter_map(|e| match &e.event {
            FeedEvent::Collected { kg, .. } => Some(*kg),
            _ => None,
        })
        .sum()
}

#[test]
fn test_end_to_end_adaptive_scenario() {
    let mut driver = CycleDriver::from_config(&herd_of_six(), Fixed::new(3.0 / 4.5)).unwrap();

    let reports = driver.run(2).unwrap();
    assert_eq!(collected_kg(&reports[0].entries), 27.0);
    assert!((collected_kg(&reports[1].entries) - 24.3).abs() < 1e-9);

    let multiplier = reports[0].entries.iter().find_map(|e| match e.event {
        FeedEvent::NextMultiplier { multiplier, .. } => Some(multiplier),
        _ => None,
    });
    assert_eq!(multiplier, Some(0.9));
}

#[test]
fn test_conservation_with_random_outcomes() {
    for seed in [1_u64, 7, 42, 1234] {
        let config = FarmConfig::default();
        let conditions = RandomConditions::new(
            StdRng::seed_from_u64(seed),
            &config.behaviour,
            &config.battery,
        );
        let mut driver = CycleDriver::from_config(&config, conditions).unwrap();
        // Stop at whatever ends the run first; the books must balance either way
        let _ = driver.run(5);

        let session = driver.session();
        assert!(session.ledger.iter().count() > 0, "seed {seed}: nothing was fed");
        for (food, totals) in session.ledger.iter() {
            assert!(
                totals.eaten + totals.leftover <= totals.loaded + 1e-6,
                "seed {seed}: {food} served more than loaded"
            );
            assert!(
                (totals.eaten + totals.leftover + totals.skipped - totals.loaded).abs() < 1e-6,
                "seed {seed}: {food} totals do not add up"
            );
            let stock = session.inventory.stock(food).unwrap();
            assert!(stock >= 0.0);
            assert!((stock + totals.loaded - config.initial_stock_kg).abs() < 1e-6);
        }
    }
}

#[test]
fn test_path_check_clear_within_three_looks() {
    let shed = Shed::new("Shed1", "Milking Cows", 5).unwrap();

    // Every pattern of three looks: clear unless all three are blocked
    for pattern in 0..8_u8 {
        let looks: Vec<bool> = (0..3).map(|bit| pattern & (1 << bit) != 0).collect();
        let mut conditions = Fixed::new(1.0);
        conditions.paths = looks.iter().copied().collect();

        let check = check_clear_path(&shed, 3, &mut conditions);
        assert_eq!(check.is_clear(), looks.contains(&true), "pattern {looks:?}");
        assert!(conditions.path_looks <= 3);
    }
}

#[test]
fn test_battery_eventually_critical() {
    let mut config = herd_of_six();
    config.initial_stock_kg = 1_000_000.0;
    let mut driver = CycleDriver::from_config(&config, Fixed::new(1.0)).unwrap();

    // 100% drained by 2 per day drops below 5% on day 48
    match driver.run(100) {
        Err(FeedError::CriticalBattery { level }) => assert_eq!(level, 4),
        other => panic!("unexpected result: {:?}", other.map(|r| r.len())),
    }
    assert_eq!(driver.current_cycle(), 48);

    let last = driver.session().log.entries().last().unwrap();
    assert_eq!(last.event, FeedEvent::BatteryCritical { level: 4 });
}

#[test]
fn test_insufficient_stock_ends_run() {
    let mut config = herd_of_six();
    config.initial_stock_kg = 50.0;
    config.adaptive = false;
    let mut driver = CycleDriver::from_config(&config, Fixed::new(1.0)).unwrap();

    match driver.run(3) {
        Err(FeedError::InsufficientStock { food, required, available }) => {
            assert_eq!(food, "Hay");
            assert_eq!(required, 27.0);
            assert_eq!(available, 23.0);
        }
        other => panic!("unexpected result: {:?}", other.map(|r| r.len())),
    }
    assert_eq!(driver.session().inventory.stock("Hay"), Some(23.0));
}

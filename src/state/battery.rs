use tracing::{debug, warn};

use crate::conditions::Conditions;
use crate::config::BatteryConfig;
use crate::error::{FeedError, Result};

/// Result of a battery check that did not halt the robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryStatus {
    Ok(u32),
    Low(u32),
}

/// The robot's battery charge in percent. Only ever goes down.
#[derive(Debug, Clone)]
pub struct Battery {
    level: u32,
    warn_below: u32,
    critical_below: u32,
}

impl Battery {
    pub fn new(config: &BatteryConfig) -> Self {
        Self {
            level: config.initial,
            warn_below: config.warn_below,
            critical_below: config.critical_below,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Drain the battery for the work done since the last check.
    ///
    /// Returns [`FeedError::CriticalBattery`] once the level drops below the
    /// critical threshold; the caller decides whether to stop.
    pub fn monitor(&mut self, conditions: &mut impl Conditions) -> Result<BatteryStatus> {
        let drain = conditions.battery_drain();
        self.level = self.level.saturating_sub(drain);
        debug!(level = self.level, drain, "battery check");

        if self.level < self.critical_below {
            return Err(FeedError::CriticalBattery { level: self.level });
        }
        if self.level < self.warn_below {
            warn!(level = self.level, "battery low");
            return Ok(BatteryStatus::Low(self.level));
        }
        Ok(BatteryStatus::Ok(self.level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::testing::Scripted;
    use crate::conditions::RandomConditions;
    use crate::config::BehaviourConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn battery_at(initial: u32) -> Battery {
        Battery::new(&BatteryConfig {
            initial,
            ..Default::default()
        })
    }

    #[test]
    fn test_thresholds() {
        let mut battery = battery_at(22);
        let mut conditions = Scripted {
            drains: [2, 3, 3, 3, 3].into(),
            ..Default::default()
        };

        assert_eq!(battery.monitor(&mut conditions).unwrap(), BatteryStatus::Ok(20));
        assert_eq!(battery.monitor(&mut conditions).unwrap(), BatteryStatus::Low(17));
        assert_eq!(battery.monitor(&mut conditions).unwrap(), BatteryStatus::Low(14));
        assert_eq!(battery.monitor(&mut conditions).unwrap(), BatteryStatus::Low(11));
        assert_eq!(battery.monitor(&mut conditions).unwrap(), BatteryStatus::Low(8));
    }

    #[test]
    fn test_critical_is_an_error() {
        let mut battery = battery_at(6);
        let mut conditions = Scripted {
            drains: [2].into(),
            ..Default::default()
        };
        match battery.monitor(&mut conditions) {
            Err(FeedError::CriticalBattery { level }) => assert_eq!(level, 4),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_strictly_decreasing_by_one_to_three() {
        let config = BatteryConfig::default();
        let mut battery = Battery::new(&config);
        let mut conditions = RandomConditions::new(
            StdRng::seed_from_u64(99),
            &BehaviourConfig::default(),
            &config,
        );

        let mut previous = battery.level();
        loop {
            let result = battery.monitor(&mut conditions);
            let drop = previous - battery.level();
            assert!((1..=3).contains(&drop), "dropped by {drop}");
            previous = battery.level();
            if result.is_err() {
                assert!(battery.level() < config.critical_below);
                break;
            }
        }
    }

    #[test]
    fn test_saturates_at_zero() {
        let mut battery = battery_at(1);
        let mut conditions = Scripted {
            drains: [3].into(),
            ..Default::default()
        };
        assert!(battery.monitor(&mut conditions).is_err());
        assert_eq!(battery.level(), 0);
    }
}

use rand::Rng;

use crate::config::{BatteryConfig, BehaviourConfig};

/// Source of every uncertain outcome on the farm.
///
/// The simulation never touches a random number generator directly, so tests
/// can script exact outcomes (a blocked lane, an obstacle in front of a cow).
pub trait Conditions {
    /// Whether the camera sees an obstacle in front of the current cow.
    fn camera_obstacle(&mut self) -> bool;

    /// Whether the radar sees an obstacle in front of the current cow.
    fn radar_obstacle(&mut self) -> bool;

    /// Fraction of its portion the current cow eats.
    fn appetite(&mut self) -> f64;

    /// Outcome of one look down the feeding lane, true when clear.
    fn path_clear(&mut self) -> bool;

    /// Battery percent used since the last check.
    fn battery_drain(&mut self) -> u32;
}

/// [`Conditions`] drawn from a random number generator.
pub struct RandomConditions<R: Rng> {
    rng: R,
    behaviour: BehaviourConfig,
    drain: (u32, u32),
}

impl<R: Rng> RandomConditions<R> {
    pub fn new(rng: R, behaviour: &BehaviourConfig, battery: &BatteryConfig) -> Self {
        Self {
            rng,
            behaviour: behaviour.clone(),
            drain: (battery.drain_min, battery.drain_max),
        }
    }
}

impl<R: Rng> Conditions for RandomConditions<R> {
    fn camera_obstacle(&mut self) -> bool {
        self.rng.gen_bool(self.behaviour.obstacle_probability)
    }

    fn radar_obstacle(&mut self) -> bool {
        self.rng.gen_bool(self.behaviour.obstacle_probability)
    }

    fn appetite(&mut self) -> f64 {
        let (min, max) = (self.behaviour.appetite_min, self.behaviour.appetite_max);
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    fn path_clear(&mut self) -> bool {
        self.rng.gen_bool(self.behaviour.path_clear_probability)
    }

    fn battery_drain(&mut self) -> u32 {
        self.rng.gen_range(self.drain.0..=self.drain.1)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use super::Conditions;

    /// Scripted outcomes. Queued values are used first, then the defaults.
    #[derive(Default)]
    pub struct Scripted {
        pub obstacles: VecDeque<(bool, bool)>,
        pub appetites: VecDeque<f64>,
        pub paths: VecDeque<bool>,
        pub drains: VecDeque<u32>,
        pub default_appetite: Option<f64>,
        pub default_drain: Option<u32>,
    }

    impl Scripted {
        /// No obstacles, clear lanes, every cow eats `appetite` of its portion.
        pub fn steady(appetite: f64) -> Self {
            Self {
                default_appetite: Some(appetite),
                default_drain: Some(1),
                ..Default::default()
            }
        }
    }

    impl Conditions for Scripted {
        fn camera_obstacle(&mut self) -> bool {
            self.obstacles.front().map(|o| o.0).unwrap_or(false)
        }

        fn radar_obstacle(&mut self) -> bool {
            self.obstacles.pop_front().map(|o| o.1).unwrap_or(false)
        }

        fn appetite(&mut self) -> f64 {
            self.appetites
                .pop_front()
                .or(self.default_appetite)
                .unwrap_or(1.0)
        }

        fn path_clear(&mut self) -> bool {
            self.paths.pop_front().unwrap_or(true)
        }

        fn battery_drain(&mut self) -> u32 {
            self.drains.pop_front().or(self.default_drain).unwrap_or(1)
        }
    }
}

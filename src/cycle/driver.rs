use tracing::{info, warn};

use crate::conditions::Conditions;
use crate::config::{FarmConfig, ScheduleConfig};
use crate::distribution::{check_clear_path, distribute};
use crate::error::{FeedError, Result};
use crate::models::{FeedEvent, FoodMix, LogEntry, Shed};
use crate::planner::{adaptive_multiplier, compute_load, compute_load_for};
use crate::state::{AppetiteHistory, BatteryStatus, FarmSession, FoodTotals};

/// Switches selecting how a feeding round behaves.
#[derive(Debug, Clone)]
pub struct DriverSettings {
    pub schedule: ScheduleConfig,
    pub adaptive: bool,
    pub path_check: bool,
    pub path_attempts: u32,
}

impl From<&FarmConfig> for DriverSettings {
    fn from(config: &FarmConfig) -> Self {
        Self {
            schedule: config.schedule.clone(),
            adaptive: config.adaptive,
            path_check: config.path_check,
            path_attempts: config.behaviour.path_attempts,
        }
    }
}

/// Summary of one completed daily cycle.
#[derive(Debug, Clone)]
pub struct CycleReport {
    pub cycle: u32,
    pub battery: u32,
    pub water_liters: f64,
    /// Shed servings completed across all rounds.
    pub servings: u32,
    /// Shed servings skipped because the lane stayed blocked.
    pub blocked: u32,
    /// Cumulative totals per food at the end of the cycle.
    pub totals: Vec<(String, FoodTotals)>,
    /// Everything logged during the cycle.
    pub entries: Vec<LogEntry>,
}

/// Runs the fixed daily pipeline on a farm session.
pub struct CycleDriver<C: Conditions> {
    session: FarmSession,
    conditions: C,
    settings: DriverSettings,
    cycle: u32,
}

/// Counters for the cycle in progress.
#[derive(Default)]
struct RoundTally {
    servings: u32,
    blocked: u32,
}

impl<C: Conditions> CycleDriver<C> {
    pub fn new(session: FarmSession, conditions: C, settings: DriverSettings) -> Self {
        Self {
            session,
            conditions,
            settings,
            cycle: 0,
        }
    }

    /// Build a session from `config` and a driver around it.
    pub fn from_config(config: &FarmConfig, conditions: C) -> Result<Self> {
        let session = FarmSession::new(config)?;
        Ok(Self::new(session, conditions, DriverSettings::from(config)))
    }

    pub fn session(&self) -> &FarmSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut FarmSession {
        &mut self.session
    }

    /// Number of the last cycle started.
    pub fn current_cycle(&self) -> u32 {
        self.cycle
    }

    /// Run `cycles` daily cycles, stopping at the first error.
    pub fn run(&mut self, cycles: u32) -> Result<Vec<CycleReport>> {
        let mut reports = Vec::with_capacity(cycles as usize);
        for _ in 0..cycles {
            reports.push(self.run_cycle()?);
        }
        Ok(reports)
    }

    /// Run one daily cycle.
    ///
    /// Diagnostics, then each feeding round (battery check, then path check,
    /// collection, mixing, watering and distribution per shed), then the
    /// push-back rounds, leftover analysis and cleanup.
    pub fn run_cycle(&mut self) -> Result<CycleReport> {
        self.cycle += 1;
        let cycle = self.cycle;
        let mut tally = RoundTally::default();
        info!(cycle, plan = %self.session.plan.label(), "starting daily feeding cycle");

        self.diagnostics();

        let sheds = self.session.sheds.clone();
        for round in 1..=self.settings.schedule.distributions_per_day {
            info!(cycle, round, "feeding round");
            self.battery_check(round)?;
            for shed in &sheds {
                self.feed_shed(round, shed, &mut tally)?;
            }
        }

        for push in 1..=self.settings.schedule.food_pushes_per_day {
            info!(cycle, push, "food push round");
            for shed in &sheds {
                self.push_food_back(shed);
            }
        }

        self.analyze_leftovers();
        self.cleanup();
        let report = self.report(&tally);

        info!(cycle, servings = report.servings, blocked = report.blocked, "daily cycle completed");
        Ok(report)
    }

    /// Log battery, water and any food that will not last the day.
    fn diagnostics(&mut self) {
        let battery = self.session.battery.level();
        let water_liters = self.session.water.liters();
        self.log(0, None, FeedEvent::Diagnostics { battery, water_liters });

        let rounds = self.settings.schedule.distributions_per_day as f64;
        let mut low = Vec::new();
        for food in self.session.catalog.iter() {
            let daily_need: f64 = self
                .session
                .sheds
                .iter()
                .map(|shed| match self.session.plan.mix_for(shed) {
                    Some(mix) => planned_kg(mix, &food.name) * shed.cow_count as f64,
                    None => food.nominal_weight_per_cow * shed.cow_count as f64,
                })
                .sum::<f64>()
                * rounds;
            let stock = self.session.inventory.stock(&food.name).unwrap_or(0.0);
            if stock < daily_need {
                warn!(food = %food.name, stock, daily_need, "stock will not last the day");
                low.push(FeedEvent::LowStock {
                    food: food.name.clone(),
                    stock,
                    daily_need,
                });
            }
        }
        for event in low {
            self.log(0, None, event);
        }
    }

    fn battery_check(&mut self, round: u32) -> Result<()> {
        match self.session.battery.monitor(&mut self.conditions) {
            Ok(BatteryStatus::Ok(_)) => Ok(()),
            Ok(BatteryStatus::Low(level)) => {
                self.log(round, None, FeedEvent::BatteryLow { level });
                Ok(())
            }
            Err(FeedError::CriticalBattery { level }) => {
                self.log(round, None, FeedEvent::BatteryCritical { level });
                Err(FeedError::CriticalBattery { level })
            }
            Err(e) => Err(e),
        }
    }

    fn feed_shed(&mut self, round: u32, shed: &Shed, tally: &mut RoundTally) -> Result<()> {
        let id = shed.shed_id.as_str();

        if self.settings.path_check {
            let check = check_clear_path(shed, self.settings.path_attempts, &mut self.conditions);
            for (i, clear) in check.attempts.iter().enumerate() {
                let attempt = i as u32 + 1;
                self.log(round, Some(id), FeedEvent::PathAttempt { attempt, clear: *clear });
            }
            if !check.is_clear() {
                let attempts = check.attempts.len() as u32;
                self.log(round, Some(id), FeedEvent::PathBlocked { attempts });
                tally.blocked += 1;
                return Ok(());
            }
        }

        let loads = self.plan_loads(round, shed);
        if loads.is_empty() {
            return Ok(());
        }

        let collected = self.session.inventory.collect(&loads)?;
        for (name, kg) in &collected {
            let location = self
                .session
                .catalog
                .get(name)
                .map(|f| f.location().to_string())
                .unwrap_or_else(|| "storage".to_string());
            self.log(
                round,
                Some(id),
                FeedEvent::Collected {
                    food: name.clone(),
                    kg: *kg,
                    location,
                },
            );
        }

        let mixed = self.mix_food(round, id, collected);
        let softened = self.add_water(round, id, mixed);

        let (ledger, history) = self.session.ledger_and_history(id);
        let distribution =
            distribute(&softened, shed.cow_count, &mut self.conditions, ledger, history)?;
        for event in distribution.events {
            self.log(round, Some(id), event);
        }

        tally.servings += 1;
        Ok(())
    }

    /// Kilograms of each food to collect for a shed this round.
    ///
    /// Sheds with a plan use its kg per cow; sheds without one get the nominal
    /// ration of every food in the catalog.
    fn plan_loads(&mut self, round: u32, shed: &Shed) -> FoodMix {
        let history = self.session.history(&shed.shed_id);
        let adaptive = self.settings.adaptive;

        let (loads, nominal) = match self.session.plan.mix_for(shed) {
            Some(mix) => (
                mix.iter()
                    .map(|(food, kg)| {
                        let samples = samples_for(history, adaptive, food);
                        (food.clone(), compute_load_for(*kg, shed.cow_count, samples))
                    })
                    .collect::<FoodMix>(),
                false,
            ),
            None => (
                self.session
                    .catalog
                    .iter()
                    .filter(|food| food.nominal_weight_per_cow > 0.0)
                    .map(|food| {
                        let samples = samples_for(history, adaptive, &food.name);
                        (food.name.clone(), compute_load(food, shed.cow_count, samples))
                    })
                    .collect::<FoodMix>(),
                true,
            ),
        };

        if nominal {
            self.log(round, Some(&shed.shed_id), FeedEvent::NominalRation);
        }
        loads
    }

    /// Blend the collected foods into one ration.
    pub fn mix_food(&mut self, round: u32, shed_id: &str, mix: FoodMix) -> FoodMix {
        self.log(round, Some(shed_id), FeedEvent::Mixed);
        mix
    }

    /// Soften a mix with water from the tank, dry when the tank is empty.
    pub fn add_water(&mut self, round: u32, shed_id: &str, mix: FoodMix) -> FoodMix {
        let liters = self.session.water.draw();
        if liters > 0.0 {
            self.log(round, Some(shed_id), FeedEvent::WaterAdded { liters });
        } else {
            warn!(shed = shed_id, "water tank empty");
            self.log(round, Some(shed_id), FeedEvent::TankEmpty);
        }
        mix
    }

    /// Push spilled food back within reach of the cows.
    pub fn push_food_back(&mut self, shed: &Shed) {
        self.log(0, Some(&shed.shed_id), FeedEvent::PushedBack);
    }

    /// Log cumulative leftovers per food and each shed's next load multiplier.
    fn analyze_leftovers(&mut self) {
        let mut events = Vec::new();

        for (food, totals) in self.session.ledger.iter() {
            events.push((
                None,
                FeedEvent::Leftover {
                    food: food.to_string(),
                    leftover: totals.leftover,
                    skipped: totals.skipped,
                },
            ));
        }

        if self.settings.adaptive {
            for shed in &self.session.sheds {
                let Some(history) = self.session.history(&shed.shed_id) else {
                    continue;
                };
                let targets: Vec<(String, f64)> = match self.session.plan.mix_for(shed) {
                    Some(mix) => mix.iter().map(|(f, kg)| (f.clone(), *kg)).collect(),
                    None => self
                        .session
                        .catalog
                        .iter()
                        .map(|f| (f.name.clone(), f.nominal_weight_per_cow))
                        .collect(),
                };
                for (food, target) in targets {
                    let Some(average_eaten) = history.last(&food) else {
                        continue;
                    };
                    events.push((
                        Some(shed.shed_id.clone()),
                        FeedEvent::NextMultiplier {
                            multiplier: adaptive_multiplier(target, history.samples(&food)),
                            food,
                            average_eaten,
                        },
                    ));
                }
            }
        }

        for (shed, event) in events {
            self.log(0, shed.as_deref(), event);
        }
    }

    fn report(&self, tally: &RoundTally) -> CycleReport {
        CycleReport {
            cycle: self.cycle,
            battery: self.session.battery.level(),
            water_liters: self.session.water.liters(),
            servings: tally.servings,
            blocked: tally.blocked,
            totals: self
                .session
                .ledger
                .iter()
                .map(|(food, totals)| (food.to_string(), *totals))
                .collect(),
            entries: self.session.log.cycle(self.cycle).cloned().collect(),
        }
    }

    /// Clear the feeding lane once the day's work is done.
    fn cleanup(&mut self) {
        info!(cycle = self.cycle, "cleaning feeding lane");
        self.log(0, None, FeedEvent::Cleanup);
    }

    fn log(&mut self, round: u32, shed: Option<&str>, event: FeedEvent) {
        self.session.log.push(self.cycle, round, shed, event);
    }
}

/// Appetite samples that drive the next load, none when adaptation is off.
fn samples_for<'a>(history: Option<&'a AppetiteHistory>, adaptive: bool, food: &str) -> &'a [f64] {
    match history {
        Some(history) if adaptive => history.samples(food),
        _ => &[],
    }
}

/// Planned kg per cow of `food` in a mix, matched case-insensitively.
fn planned_kg(mix: &FoodMix, food: &str) -> f64 {
    mix.iter()
        .filter(|(name, _)| name.eq_ignore_ascii_case(food))
        .map(|(_, kg)| *kg)
        .sum()
}

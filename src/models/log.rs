use std::fmt;

use serde::Serialize;

/// Something the robot did or observed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedEvent {
    Diagnostics {
        battery: u32,
        water_liters: f64,
    },
    LowStock {
        food: String,
        stock: f64,
        daily_need: f64,
    },
    BatteryLow {
        level: u32,
    },
    BatteryCritical {
        level: u32,
    },
    NominalRation,
    PathAttempt {
        attempt: u32,
        clear: bool,
    },
    PathBlocked {
        attempts: u32,
    },
    Collected {
        food: String,
        kg: f64,
        location: String,
    },
    Mixed,
    WaterAdded {
        liters: f64,
    },
    TankEmpty,
    CowFed {
        cow: u32,
        food: String,
        given: f64,
        eaten: f64,
    },
    ObstacleSkip {
        cow: u32,
        food: String,
        camera: bool,
        radar: bool,
    },
    PushedBack,
    Leftover {
        food: String,
        leftover: f64,
        skipped: f64,
    },
    NextMultiplier {
        food: String,
        average_eaten: f64,
        multiplier: f64,
    },
    Cleanup,
}

impl fmt::Display for FeedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedEvent::Diagnostics {
                battery,
                water_liters,
            } => write!(
                f,
                "Diagnostics OK: battery {}%, water {:.0} L",
                battery, water_liters
            ),
            FeedEvent::LowStock {
                food,
                stock,
                daily_need,
            } => write!(
                f,
                "Low stock of {}: {:.2} kg left, {:.2} kg needed per day",
                food, stock, daily_need
            ),
            FeedEvent::BatteryLow { level } => write!(f, "Battery low: {}%", level),
            FeedEvent::BatteryCritical { level } => {
                write!(f, "Battery critical: {}%, returning to dock", level)
            }
            FeedEvent::NominalRation => write!(f, "No nutrition plan, serving nominal rations"),
            FeedEvent::PathAttempt { attempt, clear } => write!(
                f,
                "Path check {}: {}",
                attempt,
                if *clear { "clear" } else { "blocked" }
            ),
            FeedEvent::PathBlocked { attempts } => write!(
                f,
                "Path still blocked after {} attempts, shed skipped this round",
                attempts
            ),
            FeedEvent::Collected { food, kg, location } => {
                write!(f, "Collected {:.2} kg of {} from {}", kg, food, location)
            }
            FeedEvent::Mixed => write!(f, "Mix completed"),
            FeedEvent::WaterAdded { liters } => write!(f, "{:.0} liters of water added", liters),
            FeedEvent::TankEmpty => write!(f, "Water tank empty, serving dry mix"),
            FeedEvent::CowFed {
                cow,
                food,
                given,
                eaten,
            } => write!(
                f,
                "Cow {}: given {:.2} kg of {}, ate {:.2} kg",
                cow, given, food, eaten
            ),
            FeedEvent::ObstacleSkip {
                cow,
                food,
                camera,
                radar,
            } => {
                let sensor = match (camera, radar) {
                    (true, true) => "camera+radar",
                    (true, false) => "camera",
                    _ => "radar",
                };
                write!(f, "Cow {}: obstacle ({}), skipped {}", cow, sensor, food)
            }
            FeedEvent::PushedBack => write!(f, "Food pushed back"),
            FeedEvent::Leftover {
                food,
                leftover,
                skipped,
            } => write!(
                f,
                "{}: {:.2} kg left over, {:.2} kg skipped so far",
                food, leftover, skipped
            ),
            FeedEvent::NextMultiplier {
                food,
                average_eaten,
                multiplier,
            } => write!(
                f,
                "{}: last average {:.2} kg per cow, next load x{:.1}",
                food, average_eaten, multiplier
            ),
            FeedEvent::Cleanup => write!(f, "Feeding lane cleaned"),
        }
    }
}

/// A log line tagged with where in the day it happened.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub cycle: u32,
    /// Feeding round, 0 outside of the feeding rounds.
    pub round: u32,
    pub shed: Option<String>,
    pub event: FeedEvent,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.shed {
            Some(shed) => write!(f, "[{}] {}", shed, self.event),
            None => write!(f, "{}", self.event),
        }
    }
}

/// Ordered record of everything that happened during a run.
#[derive(Debug, Clone, Default)]
pub struct FeedLog {
    entries: Vec<LogEntry>,
}

impl FeedLog {
    pub fn push(&mut self, cycle: u32, round: u32, shed: Option<&str>, event: FeedEvent) {
        self.entries.push(LogEntry {
            cycle,
            round,
            shed: shed.map(str::to_string),
            event,
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries recorded for one cycle.
    pub fn cycle(&self, cycle: u32) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.cycle == cycle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

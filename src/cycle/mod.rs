mod driver;

pub use driver::{CycleDriver, CycleReport, DriverSettings};

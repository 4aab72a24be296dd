mod battery;
mod catalog;
mod inventory;
mod ledger;
mod persistence;
mod session;
mod water;

pub use battery::{Battery, BatteryStatus};
pub use catalog::FoodCatalog;
pub use inventory::Inventory;
pub use ledger::{AppetiteHistory, FeedLedger, FoodTotals};
pub use persistence::{load_config, save_config, write_log_csv};
pub use session::FarmSession;
pub use water::WaterTank;

use serde::{Deserialize, Serialize};

use crate::error::{FeedError, Result};

/// A shed housing a homogeneous group of cows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shed {
    pub shed_id: String,
    pub cow_type: String,
    pub cow_count: u32,
}

impl Shed {
    pub fn new(
        shed_id: impl Into<String>,
        cow_type: impl Into<String>,
        cow_count: u32,
    ) -> Result<Self> {
        let shed = Self {
            shed_id: shed_id.into(),
            cow_type: cow_type.into(),
            cow_count,
        };
        shed.validate()?;
        Ok(shed)
    }

    /// A shed must hold at least one cow, every portion is divided by the count.
    pub fn validate(&self) -> Result<()> {
        if self.cow_count == 0 {
            return Err(FeedError::InvalidInput(format!(
                "shed {} has no cows",
                self.shed_id
            )));
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

use crate::error::{FeedError, Result};

/// A type of food the robot can collect and serve.
///
/// Names are compared case-insensitively, so "Hay" and "HAY" are the same food.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodType {
    pub name: String,

    /// Kilograms one cow is expected to eat per serving.
    #[serde(default)]
    pub nominal_weight_per_cow: f64,

    /// Where the robot picks the food up (ground zone, bag area, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_location: Option<String>,
}

impl FoodType {
    pub fn new(
        name: impl Into<String>,
        nominal_weight_per_cow: f64,
        storage_location: Option<&str>,
    ) -> Result<Self> {
        let food = Self {
            name: name.into(),
            nominal_weight_per_cow,
            storage_location: storage_location.map(str::to_string),
        };
        food.validate()?;
        Ok(food)
    }

    /// Rejects empty names and negative or non-finite weights.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FeedError::InvalidInput("food name is empty".to_string()));
        }
        if !self.nominal_weight_per_cow.is_finite() || self.nominal_weight_per_cow < 0.0 {
            return Err(FeedError::InvalidInput(format!(
                "{} has invalid nominal weight {}",
                self.name, self.nominal_weight_per_cow
            )));
        }
        Ok(())
    }

    /// Storage location for display, "storage" when none was given.
    pub fn location(&self) -> &str {
        self.storage_location.as_deref().unwrap_or("storage")
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for FoodType {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FoodType {}

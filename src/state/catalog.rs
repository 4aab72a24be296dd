use std::collections::BTreeMap;

use strsim::jaro_winkler;

use crate::error::{FeedError, Result};
use crate::models::FoodType;

/// Minimum similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// The foods the farm knows about.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    /// Foods keyed by lowercase name.
    foods: BTreeMap<String, FoodType>,
}

impl FoodCatalog {
    pub fn new(foods: impl IntoIterator<Item = FoodType>) -> Self {
        let mut catalog = Self::default();
        for food in foods {
            catalog.add(food);
        }
        catalog
    }

    /// Add a food, replacing any food with the same name.
    pub fn add(&mut self, food: FoodType) {
        self.foods.insert(food.key(), food);
    }

    /// Get a food by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&FoodType> {
        self.foods.get(&name.to_lowercase())
    }

    /// Get a food by name, or an [`FeedError::UnknownFood`] with the closest match.
    pub fn require(&self, name: &str) -> Result<&FoodType> {
        self.get(name).ok_or_else(|| FeedError::UnknownFood {
            name: name.to_string(),
            suggestion: self.closest(name),
        })
    }

    /// Closest known food name, if any is similar enough.
    pub fn closest(&self, name: &str) -> Option<String> {
        let needle = name.to_lowercase();
        self.foods
            .iter()
            .map(|(key, food)| (jaro_winkler(&needle, key), food))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, food)| food.name.clone())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodType> {
        self.foods.values()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

use std::collections::BTreeMap;

/// Average eaten per cow for each food, one sample per distribution.
#[derive(Debug, Clone, Default)]
pub struct AppetiteHistory {
    samples: BTreeMap<String, Vec<f64>>,
}

impl AppetiteHistory {
    pub fn record(&mut self, food: &str, average_eaten: f64) {
        self.samples
            .entry(food.to_string())
            .or_default()
            .push(average_eaten);
    }

    /// Samples for a food, oldest first. Empty if it was never served.
    pub fn samples(&self, food: &str) -> &[f64] {
        self.samples.get(food).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn last(&self, food: &str) -> Option<f64> {
        self.samples(food).last().copied()
    }
}

/// Running totals per food: loaded, eaten, left over and skipped.
///
/// Portions that were never served because an obstacle blocked the cow are
/// kept apart from leftovers, so `eaten + leftover + skipped == loaded`.
#[derive(Debug, Clone, Default)]
pub struct FeedLedger {
    foods: BTreeMap<String, FoodTotals>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FoodTotals {
    pub loaded: f64,
    pub eaten: f64,
    pub leftover: f64,
    pub skipped: f64,
}

impl FoodTotals {
    /// Kilograms actually put in front of a cow.
    pub fn served(&self) -> f64 {
        self.eaten + self.leftover
    }
}

impl FeedLedger {
    pub fn add_loaded(&mut self, food: &str, kg: f64) {
        self.entry(food).loaded += kg;
    }

    pub fn add_eaten(&mut self, food: &str, kg: f64) {
        self.entry(food).eaten += kg;
    }

    pub fn add_leftover(&mut self, food: &str, kg: f64) {
        self.entry(food).leftover += kg;
    }

    pub fn add_skipped(&mut self, food: &str, kg: f64) {
        self.entry(food).skipped += kg;
    }

    pub fn totals(&self, food: &str) -> FoodTotals {
        self.foods.get(food).copied().unwrap_or_default()
    }

    pub fn leftover(&self, food: &str) -> f64 {
        self.totals(food).leftover
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FoodTotals)> {
        self.foods.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn entry(&mut self, food: &str) -> &mut FoodTotals {
        self.foods.entry(food.to_string()).or_default()
    }
}

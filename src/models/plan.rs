use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Shed;

/// Kilograms per cow of each food, keyed by food name.
pub type FoodMix = BTreeMap<String, f64>;

/// A single shed/cow-type entry of a nutrition plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanEntry {
    pub shed_id: String,
    pub cow_type: String,
    pub mix: FoodMix,
}

/// The feeding plan for the sheds, tied to a season and optionally a holiday.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "PlanFile", into = "PlanFile")]
pub struct NutritionPlan {
    pub season: String,
    pub holiday: Option<String>,
    plans: BTreeMap<String, BTreeMap<String, FoodMix>>,
}

impl NutritionPlan {
    pub fn new(season: impl Into<String>, holiday: Option<&str>) -> Self {
        Self {
            season: season.into(),
            holiday: holiday.map(str::to_string),
            plans: BTreeMap::new(),
        }
    }

    /// Set (or replace) the food mix for a shed and cow type.
    pub fn set_plan(&mut self, shed_id: &str, cow_type: &str, mix: FoodMix) {
        self.plans
            .entry(shed_id.to_string())
            .or_default()
            .insert(cow_type.to_string(), mix);
    }

    /// Food mix for a shed and cow type, if one was planned.
    pub fn food_mix(&self, shed_id: &str, cow_type: &str) -> Option<&FoodMix> {
        self.plans.get(shed_id).and_then(|by_type| by_type.get(cow_type))
    }

    /// Food mix for a shed, looked up by its id and cow type.
    pub fn mix_for(&self, shed: &Shed) -> Option<&FoodMix> {
        self.food_mix(&shed.shed_id, &shed.cow_type)
    }

    /// All planned entries, in shed id then cow type order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &FoodMix)> {
        self.plans.iter().flat_map(|(shed_id, by_type)| {
            by_type
                .iter()
                .map(move |(cow_type, mix)| (shed_id.as_str(), cow_type.as_str(), mix))
        })
    }

    /// Label for display, e.g. "Spring (Passover)".
    pub fn label(&self) -> String {
        match &self.holiday {
            Some(holiday) => format!("{} ({})", self.season, holiday),
            None => self.season.clone(),
        }
    }
}

/// Flat on-disk form of [`NutritionPlan`].
#[derive(Serialize, Deserialize)]
struct PlanFile {
    season: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    holiday: Option<String>,
    #[serde(default)]
    entries: Vec<PlanEntry>,
}

impl From<PlanFile> for NutritionPlan {
    fn from(file: PlanFile) -> Self {
        let mut plan = NutritionPlan::new(file.season, file.holiday.as_deref());
        for entry in file.entries {
            plan.set_plan(&entry.shed_id, &entry.cow_type, entry.mix);
        }
        plan
    }
}

impl From<NutritionPlan> for PlanFile {
    fn from(plan: NutritionPlan) -> Self {
        let entries = plan
            .entries()
            .map(|(shed_id, cow_type, mix)| PlanEntry {
                shed_id: shed_id.to_string(),
                cow_type: cow_type.to_string(),
                mix: mix.clone(),
            })
            .collect();
        PlanFile {
            season: plan.season,
            holiday: plan.holiday,
            entries,
        }
    }
}

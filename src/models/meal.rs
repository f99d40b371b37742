use serde::{Deserialize, Serialize};

use crate::models::{lenient, Ingredient};

/// A user-authored recipe with a cost snapshot.
///
/// `total_cost` and `cost_per_serving` are captured when the meal is saved
/// and are never recomputed from `ingredients` afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Display order only.
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    #[serde(deserialize_with = "lenient::count")]
    pub servings: u32,

    #[serde(deserialize_with = "lenient::amount")]
    pub total_cost: f64,

    #[serde(deserialize_with = "lenient::amount")]
    pub cost_per_serving: f64,

    /// Free text label; empty means uncategorized.
    #[serde(default)]
    pub category: String,

    /// Minutes.
    #[serde(default, deserialize_with = "lenient::count")]
    pub prep_time: u32,

    /// Minutes.
    #[serde(default, deserialize_with = "lenient::count")]
    pub cook_time: u32,
}

impl Meal {
    /// Prep plus cook time, in minutes.
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    pub fn has_category(&self) -> bool {
        !self.category.trim().is_empty()
    }
}

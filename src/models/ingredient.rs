use serde::{Deserialize, Serialize};

use crate::cost::constants::DEFAULT_UNIT;
use crate::models::lenient;

/// A quantity of a named item bought at a unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Unique within the owning meal.
    pub id: String,

    pub name: String,

    #[serde(deserialize_with = "lenient::amount")]
    pub quantity: f64,

    /// Free-form unit label ("g", "cup", ...).
    pub unit: String,

    /// Price for one `unit`.
    #[serde(deserialize_with = "lenient::amount")]
    pub price_per_unit: f64,
}

impl Ingredient {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        price_per_unit: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            unit: unit.into(),
            price_per_unit,
        }
    }

    /// An empty editor row: no name, zero quantity and price, default unit.
    pub fn blank(id: impl Into<String>) -> Self {
        Self::new(id, "", 0.0, DEFAULT_UNIT, 0.0)
    }

    /// Cost contribution to the owning meal.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.quantity * self.price_per_unit
    }

    /// Basic validation: non-negative quantity and price.
    pub fn is_valid(&self) -> bool {
        self.quantity >= 0.0 && self.price_per_unit >= 0.0
    }
}

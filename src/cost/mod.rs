pub mod calculations;
pub mod constants;

pub use calculations::{
    clamp_servings, collection_stats, cost_per_serving, scale_ingredient, scale_meal,
    scale_ratio, total_cost, CollectionStats, ScaledCost, ScaledIngredient,
};
pub use constants::*;

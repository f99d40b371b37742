use crate::cost::constants::MIN_SERVINGS;
use crate::models::{Ingredient, Meal};

/// Costs of a meal previewed at a different serving count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledCost {
    pub servings: u32,
    pub total_cost: f64,
    pub cost_per_serving: f64,
}

/// One ingredient row previewed at a different serving count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledIngredient {
    pub quantity: f64,
    pub cost: f64,
}

/// Aggregates over the stored snapshots of a whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollectionStats {
    pub meal_count: usize,
    pub total_cost: f64,
    pub average_cost: f64,
    pub total_servings: u64,
}

/// Sum of quantity × price-per-unit over all ingredients.
pub fn total_cost(ingredients: &[Ingredient]) -> f64 {
    ingredients.iter().map(Ingredient::cost).sum()
}

/// Total divided by servings, or 0 when there are no servings.
pub fn cost_per_serving(total: f64, servings: u32) -> f64 {
    if servings > 0 {
        total / servings as f64
    } else {
        0.0
    }
}

/// Clamp a requested serving count to the accepted minimum.
#[inline]
pub fn clamp_servings(servings: u32) -> u32 {
    servings.max(MIN_SERVINGS)
}

/// Ratio S′ / S used to scale a stored meal.
///
/// The override is clamped to at least one serving, and a stored count of
/// zero is treated as one so the ratio stays finite.
pub fn scale_ratio(stored_servings: u32, new_servings: u32) -> f64 {
    let stored = clamp_servings(stored_servings) as f64;
    clamp_servings(new_servings) as f64 / stored
}

/// Scale a meal's stored cost snapshot to `new_servings`.
///
/// Works from the frozen `total_cost`, never from current ingredient prices:
/// total = stored × (S′/S), per serving = scaled total / S′.
pub fn scale_meal(meal: &Meal, new_servings: u32) -> ScaledCost {
    let servings = clamp_servings(new_servings);
    let total = meal.total_cost * scale_ratio(meal.servings, servings);

    ScaledCost {
        servings,
        total_cost: total,
        cost_per_serving: total / servings as f64,
    }
}

/// Scale one ingredient row from `stored_servings` to `new_servings`.
pub fn scale_ingredient(
    ingredient: &Ingredient,
    stored_servings: u32,
    new_servings: u32,
) -> ScaledIngredient {
    let quantity = ingredient.quantity * scale_ratio(stored_servings, new_servings);
    ScaledIngredient {
        quantity,
        cost: quantity * ingredient.price_per_unit,
    }
}

/// Count, summed snapshot cost, average cost, and summed servings.
pub fn collection_stats(meals: &[Meal]) -> CollectionStats {
    let total: f64 = meals.iter().map(|m| m.total_cost).sum();
    let average = if meals.is_empty() {
        0.0
    } else {
        total / meals.len() as f64
    };

    CollectionStats {
        meal_count: meals.len(),
        total_cost: total,
        average_cost: average,
        total_servings: meals.iter().map(|m| m.servings as u64).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_meal() -> Meal {
        let ingredients = vec![
            Ingredient::new("1", "Flour", 200.0, "g", 0.01),
            Ingredient::new("2", "Eggs", 2.0, "pcs", 1.50),
        ];
        let total = total_cost(&ingredients);
        Meal {
            id: "m1".to_string(),
            name: "Pancakes".to_string(),
            description: String::new(),
            ingredients,
            servings: 4,
            total_cost: total,
            cost_per_serving: cost_per_serving(total, 4),
            category: String::new(),
            prep_time: 0,
            cook_time: 0,
        }
    }

    #[test]
    fn test_total_cost_empty() {
        assert_eq!(total_cost(&[]), 0.0);
    }

    #[test]
    fn test_cost_per_serving_zero_guard() {
        assert_eq!(cost_per_serving(10.0, 0), 0.0);
        assert!((cost_per_serving(10.0, 4) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_scale_ratio_clamps() {
        assert_eq!(scale_ratio(4, 8), 2.0);
        assert_eq!(scale_ratio(4, 0), 0.25);
        assert_eq!(scale_ratio(0, 3), 3.0);
    }

    #[test]
    fn test_scale_meal_zero_override_stays_finite() {
        let scaled = scale_meal(&sample_meal(), 0);
        assert_eq!(scaled.servings, 1);
        assert!(scaled.total_cost.is_finite());
        assert!(scaled.cost_per_serving.is_finite());
    }

    #[test]
    fn test_scale_meal_uses_snapshot_not_ingredients() {
        let mut meal = sample_meal();
        // Prices drifted after save; the snapshot still wins.
        meal.ingredients[1].price_per_unit = 100.0;

        let scaled = scale_meal(&meal, 8);
        assert!((scaled.total_cost - 10.0).abs() < 1e-9);
        assert!((scaled.cost_per_serving - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_scaled_rows_add_up_to_scaled_total() {
        let meal = sample_meal();
        let scaled = scale_meal(&meal, 8);
        let rows: f64 = meal
            .ingredients
            .iter()
            .map(|ing| scale_ingredient(ing, meal.servings, 8).cost)
            .sum();

        assert!((rows - scaled.total_cost).abs() < 1e-9);
        assert!((scaled.cost_per_serving * 8.0 - scaled.total_cost).abs() < 1e-9);
    }

    #[test]
    fn test_scale_ingredient() {
        let meal = sample_meal();
        let scaled = scale_ingredient(&meal.ingredients[0], meal.servings, 2);
        assert!((scaled.quantity - 100.0).abs() < 1e-9);
        assert!((scaled.cost - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_collection_stats_empty() {
        let stats = collection_stats(&[]);
        assert_eq!(stats, CollectionStats::default());
    }
}

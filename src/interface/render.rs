use crate::config::Config;
use crate::cost::{category_label, CollectionStats, CATALOG_PREVIEW_INGREDIENTS};
use crate::models::{FamousDish, Meal};
use crate::state::{CalculatorView, MealDraft};

/// Landing overview of the three features.
pub fn display_home() {
    println!();
    println!("=== ChefCost ===");
    println!();
    println!("Create Custom Meals");
    println!("  Build recipes with ingredient lists and serving sizes.");
    println!("  -> chef_cost create");
    println!();
    println!("Cost Calculator");
    println!("  Review saved meals and preview costs at other serving counts.");
    println!("  -> chef_cost list | chef_cost calculator");
    println!();
    println!("Famous Dishes");
    println!("  Explore iconic recipes from around the world.");
    println!("  -> chef_cost dishes [--search TEXT] [--origin COUNTRY]");
    println!();
}

/// Live totals while the editor is open.
pub fn display_draft_summary(draft: &MealDraft, config: &Config) {
    println!();
    println!("--- Cost Summary ---");
    println!("Total cost:   {}", config.money(draft.total_cost()));
    println!("Per serving:  {}", config.money(draft.cost_per_serving()));
    println!("Servings:     {}", draft.servings);
    println!("Ingredients:  {}", draft.ingredients().len());
    println!("Total time:   {} min", draft.total_time());
    println!();
}

/// Collection-wide numbers shown above the meal list.
pub fn display_stats(stats: &CollectionStats, config: &Config) {
    println!();
    println!(
        "Meals: {} | Total cost: {} | Avg cost/meal: {} | Total servings: {}",
        stats.meal_count,
        config.money(stats.total_cost),
        config.money(stats.average_cost),
        stats.total_servings
    );
    println!();
}

/// Render one meal card at the view's effective servings.
pub fn display_meal(view: &CalculatorView, meal: &Meal, config: &Config) {
    let scaled = view.scaled(meal);

    let category = if meal.has_category() {
        format!(" [{}]", category_label(&meal.category))
    } else {
        String::new()
    };
    println!("{}{}  (id {})", meal.name, category, meal.id);
    if !meal.description.is_empty() {
        println!("  {}", meal.description);
    }

    let adjusted = if view.is_adjusted(meal) {
        format!(" (saved: {})", meal.servings)
    } else {
        String::new()
    };
    println!(
        "  Total {} | Per serving {} | {} min | Servings {}{}",
        config.money(scaled.total_cost),
        config.money(scaled.cost_per_serving),
        meal.total_time(),
        scaled.servings,
        adjusted
    );

    if view.is_expanded(&meal.id) {
        display_ingredients(view, meal, config);
    }
}

/// Display width of the ingredient name column, in characters.
fn name_column_width(meal: &Meal) -> usize {
    meal.ingredients
        .iter()
        .map(|i| i.name.chars().count())
        .max()
        .unwrap_or(10)
}

fn display_ingredients(view: &CalculatorView, meal: &Meal, config: &Config) {
    println!("  Ingredients ({})", meal.ingredients.len());

    let width = name_column_width(meal);

    for (ing, scaled) in meal.ingredients.iter().zip(view.scaled_ingredients(meal)) {
        println!(
            "    {:<width$}  {:>10.2} {:<5} {:>10}  ({}/{})",
            ing.name,
            scaled.quantity,
            ing.unit,
            config.money(scaled.cost),
            config.money(ing.price_per_unit),
            ing.unit,
            width = width
        );
    }
}

/// Render the visible meals, or an empty-state hint.
pub fn display_meal_list(view: &CalculatorView, config: &Config) {
    let visible = view.visible();

    if visible.is_empty() {
        println!("No meals found.");
        if view.meals().is_empty() {
            println!("Create your first meal to get started: chef_cost create");
        } else {
            println!("Try a different search term.");
        }
        return;
    }

    for meal in visible {
        display_meal(view, meal, config);
        println!();
    }
}

/// Render catalog dishes with a short key-ingredient preview.
pub fn display_dishes(dishes: &[&FamousDish]) {
    if dishes.is_empty() {
        println!("No dishes found matching your criteria.");
        return;
    }

    println!();
    println!("=== Famous Dishes ({} shown) ===", dishes.len());
    println!();

    for dish in dishes {
        println!("{} ({}) [{}]", dish.name, dish.origin, dish.difficulty);
        println!("  {}", dish.description);

        let (shown, more) = dish.ingredient_preview(CATALOG_PREVIEW_INGREDIENTS);
        let mut line = shown.join(", ");
        if more > 0 {
            line.push_str(&format!(", +{} more", more));
        }
        println!("  Key ingredients: {}", line);
        println!();
    }
}

/// Render the catalog's origin list.
pub fn display_origins(origins: &[&str]) {
    println!("All Countries");
    for origin in origins {
        println!("  {}", origin);
    }
}

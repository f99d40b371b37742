use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::config::Config;
use crate::cost::{category_label, CATEGORIES, MIN_SERVINGS, UNITS};
use crate::error::Result;
use crate::interface::render::display_draft_summary;
use crate::models::Meal;
use crate::state::MealDraft;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Coerce free text to a number: blank or unparsable input becomes 0.
pub fn coerce_number(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Coerce free text to a whole, non-negative count. Fractions are truncated.
pub fn coerce_count(input: &str) -> u32 {
    let value = coerce_number(input);
    if value <= 0.0 {
        0
    } else {
        value.min(u32::MAX as f64) as u32
    }
}

/// Meal whose name best matches `query`, if any is close enough.
pub fn closest_meal<'a>(meals: &'a [Meal], query: &str) -> Option<&'a Meal> {
    let query = query.to_lowercase();
    meals
        .iter()
        .map(|m| (m, jaro_winkler(&m.name.to_lowercase(), &query)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(m, _)| m)
}

fn prompt_text(prompt: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(input.trim().to_string())
}

fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(coerce_number(&input))
}

/// Prompt for a serving count of at least one.
pub fn prompt_servings(prompt: &str, default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .validate_with(|s: &String| -> std::result::Result<(), String> {
            if coerce_count(s) >= MIN_SERVINGS {
                Ok(())
            } else {
                Err(format!("Servings must be at least {}", MIN_SERVINGS))
            }
        })
        .interact_text()?;
    Ok(coerce_count(&input))
}

/// Pick a category from the editor's list, or none.
pub fn prompt_category() -> Result<String> {
    let mut options: Vec<&str> = CATEGORIES.iter().map(|(_, label)| *label).collect();
    options.push("(none)");

    let selection = Select::new()
        .with_prompt("Category")
        .items(&options)
        .default(1) // main
        .interact()?;

    Ok(CATEGORIES
        .get(selection)
        .map(|(value, _)| value.to_string())
        .unwrap_or_default())
}

/// Fill in one ingredient row of the draft.
fn prompt_ingredient_row(draft: &mut MealDraft, id: &str) -> Result<()> {
    let name = prompt_text("Ingredient")?;
    let quantity = prompt_number("Quantity", "0")?;

    let unit_idx = Select::new()
        .with_prompt("Unit")
        .items(&UNITS)
        .default(0)
        .interact()?;

    let price = prompt_number("Price per unit", "0")?;

    if let Some(row) = draft.ingredient_mut(id) {
        row.name = name;
        row.quantity = quantity;
        row.unit = UNITS[unit_idx].to_string();
        row.price_per_unit = price;
    }
    Ok(())
}

/// Offer to drop rows entered by mistake. The last row always stays.
fn prompt_remove_rows(draft: &mut MealDraft) -> Result<()> {
    while draft.ingredients().len() > 1 && prompt_yes_no("Remove an ingredient?", false)? {
        let labels: Vec<String> = draft
            .ingredients()
            .iter()
            .map(|ing| format!("{} ({} {})", ing.name, ing.quantity, ing.unit))
            .collect();

        let selection = Select::new()
            .with_prompt("Which one?")
            .items(&labels)
            .default(labels.len() - 1)
            .interact()?;

        let id = draft.ingredients()[selection].id.clone();
        draft.remove_ingredient(&id);
    }
    Ok(())
}

/// Walk the user through the meal editor.
///
/// Returns `None` if the user declines to save.
pub fn prompt_meal_draft(config: &Config) -> Result<Option<MealDraft>> {
    let mut draft = MealDraft::with_servings(config.default_servings);

    draft.name = prompt_text("Meal name")?;
    draft.description = prompt_text("Description")?;
    draft.category = prompt_category()?;
    draft.servings = prompt_servings("Servings", draft.servings)?;
    draft.prep_time = coerce_count(&prompt_text("Prep time (minutes)")?);
    draft.cook_time = coerce_count(&prompt_text("Cook time (minutes)")?);

    println!();
    println!("Ingredients");

    let mut row_id = draft.ingredients()[0].id.clone();
    loop {
        prompt_ingredient_row(&mut draft, &row_id)?;
        display_draft_summary(&draft, config);

        if !prompt_yes_no("Add another ingredient?", true)? {
            break;
        }
        row_id = draft.add_ingredient();
    }

    prompt_remove_rows(&mut draft)?;

    if !draft.can_save() {
        println!("A meal needs a name before it can be saved.");
        return Ok(None);
    }

    display_draft_summary(&draft, config);
    let label = if draft.category.is_empty() {
        String::new()
    } else {
        format!(" [{}]", category_label(&draft.category))
    };
    let save = prompt_yes_no(&format!("Save '{}'{}?", draft.name, label), true)?;
    Ok(save.then_some(draft))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Actions offered for a meal in the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealAction {
    Increase,
    Decrease,
    SetServings,
    ResetServings,
    ToggleIngredients,
    Delete,
    Back,
}

impl MealAction {
    const ALL: [MealAction; 7] = [
        MealAction::Increase,
        MealAction::Decrease,
        MealAction::SetServings,
        MealAction::ResetServings,
        MealAction::ToggleIngredients,
        MealAction::Delete,
        MealAction::Back,
    ];

    fn label(self) -> &'static str {
        match self {
            MealAction::Increase => "+1 serving",
            MealAction::Decrease => "-1 serving",
            MealAction::SetServings => "Set servings",
            MealAction::ResetServings => "Reset servings",
            MealAction::ToggleIngredients => "Show/hide ingredients",
            MealAction::Delete => "Delete meal",
            MealAction::Back => "Back",
        }
    }
}

/// Pick an action for the selected meal.
pub fn prompt_meal_action(meal_name: &str) -> Result<MealAction> {
    let labels: Vec<&str> = MealAction::ALL.iter().map(|a| a.label()).collect();
    let selection = Select::new()
        .with_prompt(format!("'{}'", meal_name))
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(MealAction::ALL[selection])
}

/// Top-level calculator choice: a meal index, a new search, or quit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculatorChoice {
    Meal(usize),
    Search,
    Quit,
}

/// Pick one of the visible meals, change the search, or quit.
pub fn prompt_calculator_choice(meal_labels: &[String]) -> Result<CalculatorChoice> {
    let mut options: Vec<&str> = meal_labels.iter().map(String::as_str).collect();
    options.push("Search...");
    options.push("Quit");

    let selection = Select::new()
        .with_prompt("Select a meal")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        i if i < meal_labels.len() => CalculatorChoice::Meal(i),
        i if i == meal_labels.len() => CalculatorChoice::Search,
        _ => CalculatorChoice::Quit,
    })
}

/// Prompt for a search term; empty clears the filter.
pub fn prompt_search(current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Search (empty shows all)")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(id: &str, name: &str) -> Meal {
        Meal {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            ingredients: Vec::new(),
            servings: 1,
            total_cost: 0.0,
            cost_per_serving: 0.0,
            category: String::new(),
            prep_time: 0,
            cook_time: 0,
        }
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("2.5"), 2.5);
        assert_eq!(coerce_number("  3 "), 3.0);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
    }

    #[test]
    fn test_coerce_count() {
        assert_eq!(coerce_count("12"), 12);
        assert_eq!(coerce_count("7.9"), 7);
        assert_eq!(coerce_count("-4"), 0);
        assert_eq!(coerce_count("x"), 0);
    }

    #[test]
    fn test_closest_meal() {
        let meals = vec![meal("1", "Tomato Soup"), meal("2", "Pancakes")];
        assert_eq!(closest_meal(&meals, "pancake").map(|m| m.id.as_str()), Some("2"));
        assert_eq!(closest_meal(&meals, "tomato sop").map(|m| m.id.as_str()), Some("1"));
        assert!(closest_meal(&meals, "zzzzzz").is_none());
        assert!(closest_meal(&[], "soup").is_none());
    }
}

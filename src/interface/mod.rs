pub mod prompts;
pub mod render;

pub use prompts::{
    closest_meal, coerce_count, coerce_number, prompt_calculator_choice, prompt_meal_action,
    prompt_meal_draft, prompt_search, prompt_servings, prompt_yes_no, CalculatorChoice,
    MealAction,
};
pub use render::{
    display_dishes, display_draft_summary, display_home, display_meal, display_meal_list,
    display_origins, display_stats,
};

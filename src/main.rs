use clap::Parser;

use chef_cost_rs::catalog::famous_dishes;
use chef_cost_rs::cli::{Cli, Command};
use chef_cost_rs::config::Config;
use chef_cost_rs::error::{ChefError, Result};
use chef_cost_rs::interface::{
    closest_meal, display_dishes, display_home, display_meal, display_meal_list, display_origins,
    display_stats, prompt_calculator_choice, prompt_meal_action, prompt_meal_draft,
    prompt_search, prompt_servings, prompt_yes_no, CalculatorChoice, MealAction,
};
use chef_cost_rs::search::{origins, DishFilter};
use chef_cost_rs::state::{CalculatorView, FileStore, MealRepository};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let data_dir = config.resolve_data_dir(cli.data_dir.as_deref());
    log::debug!("Using data dir {:?}", data_dir);

    let mut repo = MealRepository::new(FileStore::new(&data_dir));

    match cli.command.unwrap_or_default() {
        Command::Home => {
            display_home();
            Ok(())
        }
        Command::Create => cmd_create(&mut repo, &config),
        Command::List {
            search,
            servings,
            expand,
        } => cmd_list(&repo, &config, search, &servings, expand.as_deref()),
        Command::Calculator => cmd_calculator(&mut repo, &config),
        Command::Delete { id } => cmd_delete(&mut repo, &id),
        Command::Dishes { search, origin } => {
            let filter = DishFilter::new(search, origin);
            display_dishes(&filter.apply(famous_dishes()));
            Ok(())
        }
        Command::Origins => {
            display_origins(&origins(famous_dishes()));
            Ok(())
        }
    }
}

/// Run the meal editor and append the result to the collection.
fn cmd_create(repo: &mut MealRepository<FileStore>, config: &Config) -> Result<()> {
    let Some(draft) = prompt_meal_draft(config)? else {
        println!("Meal not saved.");
        return Ok(());
    };

    let meal = draft.to_meal(repo.next_meal_id()?)?;
    let name = meal.name.clone();
    let count = repo.add(meal)?.len();

    println!("Meal '{}' saved successfully! ({} meals stored)", name, count);
    Ok(())
}

/// Print saved meals, optionally filtered and with serving previews.
fn cmd_list(
    repo: &MealRepository<FileStore>,
    config: &Config,
    search: String,
    overrides: &[(String, u32)],
    expand: Option<&str>,
) -> Result<()> {
    let mut view = CalculatorView::load(repo)?;
    view.search = search;

    for (id, servings) in overrides {
        if view.meal(id).is_none() {
            log::warn!("Ignoring servings override for unknown meal {}", id);
            continue;
        }
        view.set_servings(id, *servings);
    }

    if let Some(id) = expand {
        view.toggle_expanded(id);
    }

    display_stats(&view.stats(), config);
    display_meal_list(&view, config);
    Ok(())
}

/// Delete a meal by id, suggesting a close name match when the id is unknown.
fn cmd_delete(repo: &mut MealRepository<FileStore>, id: &str) -> Result<()> {
    match repo.remove(id) {
        Ok(remaining) => {
            println!("Deleted meal {}. {} meals remain.", id, remaining.len());
            Ok(())
        }
        Err(ChefError::MealNotFound(_)) => {
            let meals = repo.list()?;
            let Some(suggestion) = closest_meal(&meals, id) else {
                return Err(ChefError::MealNotFound(id.to_string()));
            };

            let prompt = format!(
                "No meal with id {}. Did you mean '{}' (id {})?",
                id, suggestion.name, suggestion.id
            );
            if prompt_yes_no(&prompt, false)? {
                let target = suggestion.id.clone();
                let remaining = repo.remove(&target)?;
                println!("Deleted meal {}. {} meals remain.", target, remaining.len());
            }
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Interactive calculator: pick meals, preview servings, expand, delete.
fn cmd_calculator(repo: &mut MealRepository<FileStore>, config: &Config) -> Result<()> {
    let mut view = CalculatorView::load(repo)?;

    loop {
        display_stats(&view.stats(), config);
        display_meal_list(&view, config);

        let visible: Vec<(String, String)> = view
            .visible()
            .iter()
            .map(|m| {
                let total = config.money(view.scaled(m).total_cost);
                (m.id.clone(), format!("{} ({})", m.name, total))
            })
            .collect();
        let labels: Vec<String> = visible.iter().map(|(_, label)| label.clone()).collect();

        let id = match prompt_calculator_choice(&labels)? {
            CalculatorChoice::Meal(idx) => visible[idx].0.clone(),
            CalculatorChoice::Search => {
                view.search = prompt_search(&view.search)?;
                continue;
            }
            CalculatorChoice::Quit => return Ok(()),
        };

        meal_actions(&mut view, repo, config, &id)?;
    }
}

/// Act on one meal until the user goes back or deletes it.
fn meal_actions(
    view: &mut CalculatorView,
    repo: &mut MealRepository<FileStore>,
    config: &Config,
    id: &str,
) -> Result<()> {
    loop {
        let Some(meal) = view.meal(id) else {
            return Ok(());
        };
        println!();
        display_meal(view, meal, config);
        let name = meal.name.clone();
        let current = view.servings_for(meal);

        match prompt_meal_action(&name)? {
            MealAction::Increase => view.increment(id),
            MealAction::Decrease => view.decrement(id),
            MealAction::SetServings => {
                let servings = prompt_servings("Servings", current)?;
                view.set_servings(id, servings);
            }
            MealAction::ResetServings => view.reset_servings(id),
            MealAction::ToggleIngredients => view.toggle_expanded(id),
            MealAction::Delete => {
                if prompt_yes_no(&format!("Delete '{}'?", name), false)? {
                    view.delete(repo, id)?;
                    println!("Deleted '{}'.", name);
                    return Ok(());
                }
            }
            MealAction::Back => return Ok(()),
        }
    }
}

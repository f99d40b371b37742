use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::{ChefError, Result};

/// ChefCost: record recipes, cost them per serving, and browse famous dishes.
#[derive(Parser, Debug)]
#[command(name = "chef_cost")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding the saved meal collection.
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Path to a config.toml file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Show what the tool can do.
    #[default]
    Home,

    /// Build a new meal interactively with live cost totals.
    Create,

    /// List saved meals with their costs.
    List {
        /// Only show meals whose name or description contains this text.
        #[arg(short, long, default_value = "")]
        search: String,

        /// Preview a meal at another serving count, as MEAL_ID=SERVINGS.
        #[arg(long = "servings", value_parser = parse_servings_override)]
        servings: Vec<(String, u32)>,

        /// Show the ingredient breakdown for this meal.
        #[arg(short, long)]
        expand: Option<String>,
    },

    /// Browse saved meals interactively: adjust servings, expand, delete.
    Calculator,

    /// Delete a saved meal by id.
    Delete {
        /// Id of the meal to delete.
        id: String,
    },

    /// Browse the famous dish catalog.
    Dishes {
        /// Only show dishes whose name or description contains this text.
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only show dishes from this origin (exact match).
        #[arg(short, long)]
        origin: Option<String>,
    },

    /// List the origins present in the dish catalog.
    Origins,
}

/// Parse `MEAL_ID=SERVINGS`.
pub fn parse_servings_override(s: &str) -> Result<(String, u32)> {
    let (id, servings) = s
        .split_once('=')
        .ok_or_else(|| ChefError::InvalidInput(format!("expected MEAL_ID=SERVINGS, got '{}'", s)))?;

    let id = id.trim();
    if id.is_empty() {
        return Err(ChefError::InvalidInput("meal id is empty".to_string()));
    }

    let servings = servings
        .trim()
        .parse()
        .map_err(|_| ChefError::InvalidInput(format!("invalid serving count '{}'", servings)))?;

    Ok((id.to_string(), servings))
}

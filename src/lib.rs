pub mod catalog;
pub mod cli;
pub mod config;
pub mod cost;
pub mod error;
pub mod interface;
pub mod models;
pub mod search;
pub mod state;

pub use config::Config;
pub use error::{ChefError, Result};
pub use models::{Difficulty, FamousDish, Ingredient, Meal};

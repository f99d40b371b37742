pub mod dish;
pub mod ingredient;
pub mod meal;

mod lenient;

pub use dish::{Difficulty, FamousDish};
pub use ingredient::Ingredient;
pub use meal::Meal;

mod calculator;
mod editor;
mod persistence;
mod repository;

pub use calculator::CalculatorView;
pub use editor::MealDraft;
pub use persistence::{FileStore, KeyValueStore, MemoryStore};
pub use repository::MealRepository;

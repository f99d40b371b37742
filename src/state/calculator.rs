use std::collections::HashMap;

use crate::cost::{self, clamp_servings, CollectionStats, ScaledCost, ScaledIngredient};
use crate::error::Result;
use crate::models::Meal;
use crate::search::filter_meals;
use crate::state::persistence::KeyValueStore;
use crate::state::repository::MealRepository;

/// View state for browsing saved meals and previewing other serving counts.
///
/// Serving overrides live only here and are never written back to storage.
#[derive(Debug, Clone, Default)]
pub struct CalculatorView {
    meals: Vec<Meal>,
    pub search: String,
    expanded: Option<String>,
    /// Meal id -> overridden serving count.
    overrides: HashMap<String, u32>,
}

impl CalculatorView {
    pub fn new(meals: Vec<Meal>) -> Self {
        Self {
            meals,
            ..Self::default()
        }
    }

    /// Load the current collection from a repository.
    pub fn load<S: KeyValueStore>(repo: &MealRepository<S>) -> Result<Self> {
        Ok(Self::new(repo.list()?))
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn meal(&self, id: &str) -> Option<&Meal> {
        self.meals.iter().find(|m| m.id == id)
    }

    /// Meals matching the current search term.
    pub fn visible(&self) -> Vec<&Meal> {
        filter_meals(&self.meals, &self.search)
    }

    /// Overridden serving count, or the stored one.
    pub fn servings_for(&self, meal: &Meal) -> u32 {
        self.overrides.get(&meal.id).copied().unwrap_or(meal.servings)
    }

    pub fn is_adjusted(&self, meal: &Meal) -> bool {
        self.servings_for(meal) != meal.servings
    }

    /// Override servings for one meal. Values below one are raised to one.
    pub fn set_servings(&mut self, id: &str, servings: u32) {
        self.overrides.insert(id.to_string(), clamp_servings(servings));
    }

    pub fn increment(&mut self, id: &str) {
        if let Some(current) = self.current_servings(id) {
            self.set_servings(id, current.saturating_add(1));
        }
    }

    pub fn decrement(&mut self, id: &str) {
        if let Some(current) = self.current_servings(id) {
            self.set_servings(id, current.saturating_sub(1));
        }
    }

    /// Drop the override so the stored servings apply again.
    pub fn reset_servings(&mut self, id: &str) {
        self.overrides.remove(id);
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    /// Expand `id`, or collapse it if it is already expanded.
    pub fn toggle_expanded(&mut self, id: &str) {
        if self.is_expanded(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    /// Snapshot costs at the effective serving count.
    pub fn scaled(&self, meal: &Meal) -> ScaledCost {
        cost::scale_meal(meal, self.servings_for(meal))
    }

    /// Each ingredient row at the effective serving count, in display order.
    pub fn scaled_ingredients(&self, meal: &Meal) -> Vec<ScaledIngredient> {
        let servings = self.servings_for(meal);
        meal.ingredients
            .iter()
            .map(|ing| cost::scale_ingredient(ing, meal.servings, servings))
            .collect()
    }

    /// Stats over every loaded meal at stored servings, ignoring the search.
    pub fn stats(&self) -> CollectionStats {
        cost::collection_stats(&self.meals)
    }

    /// Delete through the repository and adopt the collection it wrote.
    pub fn delete<S: KeyValueStore>(
        &mut self,
        repo: &mut MealRepository<S>,
        id: &str,
    ) -> Result<()> {
        self.meals = repo.remove(id)?;
        self.overrides.remove(id);
        if self.is_expanded(id) {
            self.expanded = None;
        }
        Ok(())
    }

    fn current_servings(&self, id: &str) -> Option<u32> {
        self.meal(id).map(|m| self.servings_for(m))
    }
}

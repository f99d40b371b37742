use crate::cost::{self, DEFAULT_SERVINGS};
use crate::error::{ChefError, Result};
use crate::models::{Ingredient, Meal};

/// In-progress meal being edited before save.
///
/// Costs here are always live: they follow the current ingredient rows and
/// servings until `to_meal` freezes them into a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct MealDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub servings: u32,
    pub prep_time: u32,
    pub cook_time: u32,
    ingredients: Vec<Ingredient>,
    next_row_id: u64,
}

impl Default for MealDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl MealDraft {
    /// Empty form with one blank ingredient row.
    pub fn new() -> Self {
        Self::with_servings(DEFAULT_SERVINGS)
    }

    /// Empty form starting at a configured serving count.
    pub fn with_servings(servings: u32) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            category: String::new(),
            servings,
            prep_time: 0,
            cook_time: 0,
            ingredients: vec![Ingredient::blank("1")],
            next_row_id: 2,
        }
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Append a blank row and return its id.
    pub fn add_ingredient(&mut self) -> String {
        let id = self.fresh_row_id();
        self.ingredients.push(Ingredient::blank(id.clone()));
        id
    }

    /// Remove a row. The last remaining row is never removed.
    pub fn remove_ingredient(&mut self, id: &str) -> bool {
        if self.ingredients.len() <= 1 {
            return false;
        }
        let before = self.ingredients.len();
        self.ingredients.retain(|ing| ing.id != id);
        self.ingredients.len() != before
    }

    pub fn ingredient_mut(&mut self, id: &str) -> Option<&mut Ingredient> {
        self.ingredients.iter_mut().find(|ing| ing.id == id)
    }

    pub fn total_cost(&self) -> f64 {
        cost::total_cost(&self.ingredients)
    }

    /// Zero when servings is zero.
    pub fn cost_per_serving(&self) -> f64 {
        cost::cost_per_serving(self.total_cost(), self.servings)
    }

    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    pub fn can_save(&self) -> bool {
        !self.name.trim().is_empty() && !self.ingredients.is_empty()
    }

    /// Freeze the draft into a meal with cost snapshots taken now.
    pub fn to_meal(&self, id: impl Into<String>) -> Result<Meal> {
        if !self.can_save() {
            return Err(ChefError::InvalidInput(
                "A meal needs a name and at least one ingredient".to_string(),
            ));
        }

        Ok(Meal {
            id: id.into(),
            name: self.name.clone(),
            description: self.description.clone(),
            ingredients: self.ingredients.clone(),
            servings: self.servings,
            total_cost: self.total_cost(),
            cost_per_serving: self.cost_per_serving(),
            category: self.category.clone(),
            prep_time: self.prep_time,
            cook_time: self.cook_time,
        })
    }

    /// Clear the form back to its starting state, keeping the default servings.
    pub fn reset(&mut self, default_servings: u32) {
        *self = Self::with_servings(default_servings);
    }

    fn fresh_row_id(&mut self) -> String {
        loop {
            let id = self.next_row_id.to_string();
            self.next_row_id += 1;
            if !self.ingredients.iter().any(|ing| ing.id == id) {
                return id;
            }
        }
    }
}

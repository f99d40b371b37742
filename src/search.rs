use crate::models::{FamousDish, Meal};

/// Case-insensitive substring match of `term` against any of `fields`.
///
/// An empty term matches everything.
pub fn matches_term(term: &str, fields: &[&str]) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Meals whose name or description contains `term`, in input order.
pub fn filter_meals<'a>(meals: &'a [Meal], term: &str) -> Vec<&'a Meal> {
    meals
        .iter()
        .filter(|m| matches_term(term, &[&m.name, &m.description]))
        .collect()
}

/// Text and origin filter over the dish catalog.
#[derive(Debug, Clone, Default)]
pub struct DishFilter {
    pub search: String,
    /// Exact origin to keep; `None` keeps every origin.
    pub origin: Option<String>,
}

impl DishFilter {
    pub fn new(search: impl Into<String>, origin: Option<String>) -> Self {
        Self {
            search: search.into(),
            origin,
        }
    }

    pub fn matches(&self, dish: &FamousDish) -> bool {
        let origin_ok = self.origin.as_deref().is_none_or(|o| o == dish.origin);
        origin_ok && matches_term(&self.search, &[&dish.name, &dish.description])
    }

    /// Matching dishes in input order.
    pub fn apply<'a>(&self, dishes: &'a [FamousDish]) -> Vec<&'a FamousDish> {
        dishes.iter().filter(|d| self.matches(d)).collect()
    }
}

/// Distinct origins in first-seen order.
pub fn origins(dishes: &[FamousDish]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for dish in dishes {
        if !seen.contains(&dish.origin.as_str()) {
            seen.push(&dish.origin);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn dish(name: &str, origin: &str, description: &str) -> FamousDish {
        FamousDish {
            id: name.to_lowercase(),
            name: name.to_string(),
            origin: origin.to_string(),
            description: description.to_string(),
            image: String::new(),
            ingredients: Vec::new(),
            difficulty: Difficulty::Easy,
        }
    }

    #[test]
    fn test_matches_term_case_insensitive() {
        assert!(matches_term("SALM", &["Grilled salmon", ""]));
        assert!(matches_term("herb", &["Fish", "Lemon and Herbs"]));
        assert!(!matches_term("beef", &["Fish", "Lemon"]));
        assert!(matches_term("", &[]));
    }

    #[test]
    fn test_dish_filter_origin_is_exact() {
        let dishes = vec![
            dish("Sushi", "Japan", "Vinegared rice"),
            dish("Ramen", "Japan", "Noodle soup"),
            dish("Tacos", "Mexico", "Corn tortillas"),
        ];

        let japan = DishFilter::new("", Some("Japan".to_string())).apply(&dishes);
        assert_eq!(japan.len(), 2);

        let lower = DishFilter::new("", Some("japan".to_string())).apply(&dishes);
        assert!(lower.is_empty());

        let combined = DishFilter::new("SOUP", Some("Japan".to_string())).apply(&dishes);
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].name, "Ramen");
    }

    #[test]
    fn test_origins_first_seen_order() {
        let dishes = vec![
            dish("Pizza", "Italy", ""),
            dish("Paella", "Spain", ""),
            dish("Risotto", "Italy", ""),
        ];
        assert_eq!(origins(&dishes), vec!["Italy", "Spain"]);
    }
}

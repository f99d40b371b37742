use std::fmt;

use serde::{Deserialize, Serialize};

/// How hard a reference dish is to cook. Ordered from easiest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A well-known dish from the bundled catalog. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamousDish {
    pub id: String,
    pub name: String,
    pub origin: String,
    pub description: String,
    pub image: String,
    /// Plain ingredient names, no quantities or prices.
    pub ingredients: Vec<String>,
    pub difficulty: Difficulty,
}

impl FamousDish {
    /// The first `limit` ingredient names plus how many were left out.
    pub fn ingredient_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.ingredients.len().min(limit);
        (&self.ingredients[..shown], self.ingredients.len() - shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(ingredients: &[&str]) -> FamousDish {
        FamousDish {
            id: "1".to_string(),
            name: "Paella".to_string(),
            origin: "Spain".to_string(),
            description: "Saffron rice".to_string(),
            image: String::new(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            difficulty: Difficulty::Medium,
        }
    }

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
    }

    #[test]
    fn test_ingredient_preview() {
        let d = dish(&["rice", "saffron", "chicken", "rabbit", "beans", "tomato"]);
        let (shown, more) = d.ingredient_preview(4);
        assert_eq!(shown.len(), 4);
        assert_eq!(more, 2);

        let short = dish(&["rice"]);
        let (shown, more) = short.ingredient_preview(4);
        assert_eq!(shown, ["rice".to_string()]);
        assert_eq!(more, 0);
    }

    #[test]
    fn test_difficulty_deserializes_from_label() {
        let d: Difficulty = serde_json::from_str("\"Hard\"").unwrap();
        assert_eq!(d, Difficulty::Hard);
        assert!(serde_json::from_str::<Difficulty>("\"Extreme\"").is_err());
    }
}

/// Servings a new meal starts with.
pub const DEFAULT_SERVINGS: u32 = 4;

/// Lowest serving count the editor prompt and serving overrides accept.
pub const MIN_SERVINGS: u32 = 1;

/// Unit assigned to new ingredient rows.
pub const DEFAULT_UNIT: &str = "g";

/// Unit labels the editor offers. The stored unit is free text.
pub const UNITS: [&str; 8] = ["g", "kg", "ml", "l", "pcs", "tbsp", "tsp", "cup"];

/// Category values the editor offers, with their display labels.
pub const CATEGORIES: [(&str, &str); 5] = [
    ("appetizer", "Appetizer"),
    ("main", "Main Course"),
    ("dessert", "Dessert"),
    ("side", "Side Dish"),
    ("beverage", "Beverage"),
];

/// Storage key for the persisted meal collection.
pub const MEALS_KEY: &str = "meals";

/// Where an unreadable collection is kept before it is replaced.
pub const MEALS_BACKUP_KEY: &str = "meals-backup";

/// Key ingredients shown per dish before collapsing into "+N more".
pub const CATALOG_PREVIEW_INGREDIENTS: usize = 4;

/// Display label for a stored category value, falling back to the raw value.
pub fn category_label(value: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|(v, _)| v.eq_ignore_ascii_case(value))
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

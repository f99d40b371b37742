use std::sync::LazyLock;

use crate::error::Result;
use crate::models::FamousDish;

/// Embedded famous-dish dataset.
const FAMOUS_DISHES_JSON: &str = include_str!("../../data/famous_dishes.json");

static FAMOUS_DISHES: LazyLock<Vec<FamousDish>> = LazyLock::new(|| {
    parse_catalog(FAMOUS_DISHES_JSON).expect("Failed to parse embedded famous_dishes.json")
});

/// Parse a catalog from its JSON text.
pub fn parse_catalog(json: &str) -> Result<Vec<FamousDish>> {
    Ok(serde_json::from_str(json)?)
}

/// The bundled, read-only famous-dish catalog.
pub fn famous_dishes() -> &'static [FamousDish] {
    &FAMOUS_DISHES
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_embedded_catalog_parses() {
        assert!(parse_catalog(FAMOUS_DISHES_JSON).is_ok());
        assert!(!famous_dishes().is_empty());
    }

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<&str> = famous_dishes().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), famous_dishes().len());
    }

    #[test]
    fn test_parse_catalog_rejects_bad_difficulty() {
        let json = r#"[{"id":"x","name":"X","origin":"Y","description":"","image":"","ingredients":[],"difficulty":"Trivial"}]"#;
        assert!(parse_catalog(json).is_err());
    }
}

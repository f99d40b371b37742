use chef_cost_rs::catalog::famous_dishes;
use chef_cost_rs::models::Meal;
use chef_cost_rs::search::{filter_meals, origins, DishFilter};

fn meal(id: &str, name: &str, description: &str) -> Meal {
    Meal {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        ingredients: Vec::new(),
        servings: 2,
        total_cost: 1.0,
        cost_per_serving: 0.5,
        category: String::new(),
        prep_time: 0,
        cook_time: 0,
    }
}

fn sample_meals() -> Vec<Meal> {
    vec![
        meal("1", "Grilled Salmon", "With lemon and dill"),
        meal("2", "Chicken Curry", "Mild and creamy"),
        meal("3", "Lemon Tart", "Sharp dessert"),
        meal("4", "Garden Salad", "Fresh greens"),
    ]
}

#[test]
fn test_empty_term_returns_everything_in_order() {
    let meals = sample_meals();
    let ids: Vec<&str> = filter_meals(&meals, "").iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
}

#[test]
fn test_meal_filter_matches_name_or_description() {
    let meals = sample_meals();
    let ids: Vec<&str> = filter_meals(&meals, "LEMON")
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(ids, vec!["1", "3"]);

    for m in filter_meals(&meals, "cream") {
        let hay = format!("{} {}", m.name, m.description).to_lowercase();
        assert!(hay.contains("cream"));
    }
    assert!(filter_meals(&meals, "tofu").is_empty());
}

#[test]
fn test_catalog_filter_by_origin() {
    let dishes = famous_dishes();
    let all_origins = origins(dishes);
    assert!(!all_origins.is_empty());

    for origin in &all_origins {
        let filter = DishFilter::new("", Some(origin.to_string()));
        let matched = filter.apply(dishes);
        assert!(!matched.is_empty());
        assert!(matched.iter().all(|d| d.origin == *origin));
    }

    let total: usize = all_origins
        .iter()
        .map(|o| DishFilter::new("", Some(o.to_string())).apply(dishes).len())
        .sum();
    assert_eq!(total, dishes.len());
}

#[test]
fn test_catalog_text_search() {
    let dishes = famous_dishes();
    assert_eq!(DishFilter::default().apply(dishes).len(), dishes.len());

    let matched = DishFilter::new("NOODLE", None).apply(dishes);
    assert!(!matched.is_empty());
    for d in matched {
        let hay = format!("{} {}", d.name, d.description).to_lowercase();
        assert!(hay.contains("noodle"));
    }

    let none = DishFilter::new("noodle", Some("Nowhere".to_string())).apply(dishes);
    assert!(none.is_empty());
}

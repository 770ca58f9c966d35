//! Tests for ingredient normalization, instruction segmentation, and
//! video identifier extraction.

use ladle_core::mealdb::Meal;
use ladle_core::{extract_youtube_id, parse_ingredients, segment_instructions};
use serde_json::{json, Value};

/// Build a meal record with the given numbered slots populated.
fn meal_with_slots(slots: &[(usize, &str, &str)]) -> Meal {
    let mut value = json!({
        "idMeal": "1",
        "strMeal": "Test Meal",
    });

    let object = value.as_object_mut().unwrap();
    for (n, ingredient, measure) in slots {
        object.insert(format!("strIngredient{n}"), Value::from(*ingredient));
        object.insert(format!("strMeasure{n}"), Value::from(*measure));
    }

    serde_json::from_value(value).unwrap()
}

#[test]
fn normalization_keeps_populated_slots_in_order() {
    let meal = meal_with_slots(&[
        (1, "flour", "2 cups"),
        (2, "  ", ""),
        (5, "eggs", " 3 "),
        (9, "salt", ""),
    ]);

    let ingredients = parse_ingredients(&meal);
    let names: Vec<&str> = ingredients.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["flour", "eggs", "salt"]);

    assert_eq!(ingredients[0].measure, "2 cups");
    assert_eq!(ingredients[1].measure, "3");
    assert_eq!(ingredients[2].measure, "");
}

#[test]
fn normalization_trims_names_and_never_nulls_measures() {
    let meal = meal_with_slots(&[(1, " butter ", "  1 stick  ")]);
    let ingredients = parse_ingredients(&meal);

    assert_eq!(ingredients.len(), 1);
    assert_eq!(ingredients[0].name, "butter");
    assert_eq!(ingredients[0].measure, "1 stick");
}

#[test]
fn normalization_of_empty_record_yields_no_ingredients() {
    let meal = meal_with_slots(&[]);
    assert!(parse_ingredients(&meal).is_empty());
}

#[test]
fn gap_in_slots_does_not_stop_the_scan() {
    let meal = meal_with_slots(&[(1, "rice", "1 cup"), (20, "nori", "2 sheets")]);
    let ingredients = parse_ingredients(&meal);

    assert_eq!(ingredients.len(), 2);
    assert_eq!(ingredients[1].name, "nori");
}

#[test]
fn segmentation_matches_the_contract_example() {
    assert_eq!(
        segment_instructions("1. Mix flour\n2) Add eggs\n\nBake at 350"),
        vec!["Mix flour", "Add eggs", "Bake at 350"]
    );
}

#[test]
fn segmentation_preserves_source_line_order() {
    let steps = segment_instructions("Boil water.\r\n2) Add pasta.\r\n3) Drain.");
    assert_eq!(steps, vec!["Boil water.", "Add pasta.", "Drain."]);
}

#[test]
fn extraction_matches_the_contract_example() {
    assert_eq!(
        extract_youtube_id(Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ")),
        Some("dQw4w9WgXcQ".to_string())
    );
    assert_eq!(extract_youtube_id(None), None);
    assert_eq!(extract_youtube_id(Some("not a video url")), None);
}

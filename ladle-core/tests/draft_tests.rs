//! Recipe draft validation, filtering, and coercion.

use ladle_core::{
    filter_ingredients, filter_instructions, Difficulty, DraftError, IngredientRow, RecipeDraft,
};

fn row(name: &str, measure: &str) -> IngredientRow {
    IngredientRow {
        name: name.to_string(),
        measure: measure.to_string(),
    }
}

fn valid_draft() -> RecipeDraft {
    let mut draft = RecipeDraft::new();
    draft.title = "Apple Pie".to_string();
    draft.set_ingredient(0, "flour", "2 cups");
    draft.set_instruction(0, "Preheat oven");
    draft
}

#[test]
fn empty_title_is_rejected_with_the_title_error() {
    let mut draft = valid_draft();
    draft.title = "   ".to_string();

    assert_eq!(draft.finish().unwrap_err(), DraftError::MissingTitle);
}

#[test]
fn blank_ingredient_names_are_rejected() {
    let mut draft = valid_draft();
    draft.set_ingredient(0, "  ", "2 cups");

    assert_eq!(draft.finish().unwrap_err(), DraftError::NoIngredients);
}

#[test]
fn blank_instructions_are_rejected() {
    let mut draft = valid_draft();
    draft.set_instruction(0, "  ");

    assert_eq!(draft.finish().unwrap_err(), DraftError::NoInstructions);
}

#[test]
fn failed_validation_leaves_the_draft_intact() {
    let mut draft = valid_draft();
    draft.title = String::new();

    assert!(draft.finish().is_err());
    // Everything entered so far is still there for a retry.
    assert_eq!(draft.ingredients[0], row("flour", "2 cups"));
    assert_eq!(draft.instructions[0], "Preheat oven");
}

#[test]
fn finish_produces_the_filtered_lists() {
    let mut draft = valid_draft();
    draft.add_ingredient();
    draft.add_instruction();

    let recipe = draft.finish().unwrap();

    assert_eq!(recipe.title, "Apple Pie");
    assert_eq!(recipe.ingredients.len(), 1);
    assert_eq!(recipe.ingredients[0].name, "flour");
    assert_eq!(recipe.ingredients[0].measure, "2 cups");
    assert_eq!(recipe.instructions, vec!["Preheat oven"]);
}

#[test]
fn coercion_applies_documented_defaults() {
    let mut draft = valid_draft();
    draft.category = String::new();
    draft.cuisine = "  ".to_string();
    draft.prep_time = "15".to_string();
    draft.cook_time = "not long".to_string();
    draft.servings = "0".to_string();
    draft.difficulty = "extreme".to_string();
    draft.video_url = String::new();

    let recipe = draft.finish().unwrap();

    assert_eq!(recipe.category, "Other");
    assert_eq!(recipe.cuisine, None);
    assert_eq!(recipe.prep_time, Some(15));
    assert_eq!(recipe.cook_time, None);
    assert_eq!(recipe.servings, 4);
    assert_eq!(recipe.difficulty, Difficulty::Medium);
    assert_eq!(recipe.video_url, None);
}

#[test]
fn filtering_is_idempotent() {
    let rows = vec![row("flour", "2 cups"), row("", "1 tsp"), row("eggs", "")];

    let once = filter_ingredients(rows);
    let again = filter_ingredients(
        once.iter()
            .map(|i| row(&i.name, &i.measure))
            .collect::<Vec<_>>(),
    );

    assert_eq!(once, again);

    let steps = vec!["Mix".to_string(), "  ".to_string(), "Bake".to_string()];
    let once = filter_instructions(steps);
    let again = filter_instructions(once.clone());
    assert_eq!(once, again);
}

//! Normalization of the upstream record's numbered ingredient slots.

use serde::{Deserialize, Serialize};

use crate::mealdb::Meal;

/// One ingredient line: a non-empty name plus a measure that may be the
/// empty string, never null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedIngredient {
    pub name: String,
    pub measure: String,
}

/// Collapse a meal's 20 ingredient/measure slot pairs into an ordered
/// list of populated ingredients.
///
/// A slot is kept iff its name is non-empty after trimming; the measure
/// is trimmed and falls back to `""` when absent. Slot order is
/// preserved, and a populated slot after an empty one is still included.
pub fn parse_ingredients(meal: &Meal) -> Vec<ParsedIngredient> {
    let mut ingredients = Vec::new();

    for n in 1..=crate::mealdb::SLOT_COUNT {
        let name = meal.ingredient_slot(n).map(str::trim).unwrap_or("");
        if name.is_empty() {
            continue;
        }

        let measure = meal.measure_slot(n).map(str::trim).unwrap_or("");
        ingredients.push(ParsedIngredient {
            name: name.to_string(),
            measure: measure.to_string(),
        });
    }

    ingredients
}

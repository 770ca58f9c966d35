use std::collections::BTreeMap;

use serde::Deserialize;

/// A full meal record as returned by search/lookup/random endpoints.
///
/// The upstream schema is flat: alongside the named fields there are 20
/// numbered `strIngredientN`/`strMeasureN` slot pairs. Those land in the
/// flattened `slots` map and are read positionally via [`Meal::ingredient_slot`]
/// and [`Meal::measure_slot`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub title: String,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strTags", default)]
    pub tags: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    #[serde(rename = "strSource", default)]
    pub source: Option<String>,
    /// Remaining upstream fields, including the numbered ingredient and
    /// measure slots. Values are frequently JSON `null`.
    #[serde(flatten)]
    slots: BTreeMap<String, Option<String>>,
}

impl Meal {
    /// Raw contents of ingredient slot `n` (1-based), if present.
    pub fn ingredient_slot(&self, n: usize) -> Option<&str> {
        self.slot("strIngredient", n)
    }

    /// Raw contents of measure slot `n` (1-based), if present.
    pub fn measure_slot(&self, n: usize) -> Option<&str> {
        self.slot("strMeasure", n)
    }

    fn slot(&self, prefix: &str, n: usize) -> Option<&str> {
        self.slots
            .get(&format!("{prefix}{n}"))
            .and_then(|v| v.as_deref())
    }

    /// The comma-separated tags field split into individual trimmed tags.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Thin record returned by the filter endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub title: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    #[serde(rename = "idCategory")]
    pub id: String,
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategoryDescription", default)]
    pub description: Option<String>,
}

/// Envelope for endpoints returning meals. The `meals` field is `null`
/// (not an empty array) when nothing matched.
#[derive(Debug, Deserialize)]
pub(crate) struct MealsEnvelope<T> {
    #[serde(default)]
    pub meals: Option<Vec<T>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesEnvelope {
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
}

/// Row shape of the `list.php?a=list` endpoint.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct AreaRow {
    #[serde(rename = "strArea")]
    pub area: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_decodes_slots_and_nulls() {
        let meal: Meal = serde_json::from_str(
            r#"{
                "idMeal": "52772",
                "strMeal": "Teriyaki Chicken Casserole",
                "strCategory": "Chicken",
                "strArea": "Japanese",
                "strInstructions": "Preheat oven to 350.",
                "strMealThumb": "https://example.test/thumb.jpg",
                "strTags": "Meat,Casserole",
                "strYoutube": null,
                "strSource": null,
                "strIngredient1": "soy sauce",
                "strMeasure1": "3/4 cup",
                "strIngredient2": null,
                "strMeasure2": null
            }"#,
        )
        .unwrap();

        assert_eq!(meal.id, "52772");
        assert_eq!(meal.ingredient_slot(1), Some("soy sauce"));
        assert_eq!(meal.measure_slot(1), Some("3/4 cup"));
        assert_eq!(meal.ingredient_slot(2), None);
        assert_eq!(meal.ingredient_slot(20), None);
        assert_eq!(meal.tag_list(), vec!["Meat", "Casserole"]);
    }

    #[test]
    fn null_meals_envelope_is_empty() {
        let envelope: MealsEnvelope<Meal> = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(envelope.meals.is_none());

        let envelope: MealsEnvelope<Meal> = serde_json::from_str(r#"{}"#).unwrap();
        assert!(envelope.meals.is_none());
    }
}

//! In-progress recipe draft: form state, validation, and coercion into a
//! submission payload.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DraftError;
use crate::ingredients::ParsedIngredient;

pub const DEFAULT_CATEGORY: &str = "Other";
pub const DEFAULT_SERVINGS: i32 = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// One editable ingredient row in the draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngredientRow {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub measure: String,
}

/// A validated, coerced recipe ready for submission as one record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewRecipe {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub cuisine: Option<String>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub servings: i32,
    pub difficulty: Difficulty,
    pub video_url: Option<String>,
    pub ingredients: Vec<ParsedIngredient>,
    pub instructions: Vec<String>,
}

/// Draft state for authoring a recipe. All fields hold the raw entered
/// text; nothing is validated or coerced until [`finish`](Self::finish).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub cuisine: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub difficulty: String,
    pub video_url: String,
    pub ingredients: Vec<IngredientRow>,
    pub instructions: Vec<String>,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            cuisine: String::new(),
            prep_time: String::new(),
            cook_time: String::new(),
            servings: DEFAULT_SERVINGS.to_string(),
            difficulty: Difficulty::default().as_str().to_string(),
            video_url: String::new(),
            ingredients: vec![IngredientRow::default()],
            instructions: vec![String::new()],
        }
    }
}

impl RecipeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_ingredient(&mut self) {
        self.ingredients.push(IngredientRow::default());
    }

    /// Remove an ingredient row. Removing the last remaining row, or an
    /// out-of-range index, is a no-op.
    pub fn remove_ingredient(&mut self, index: usize) {
        if self.ingredients.len() > 1 && index < self.ingredients.len() {
            self.ingredients.remove(index);
        }
    }

    pub fn set_ingredient(&mut self, index: usize, name: &str, measure: &str) {
        if let Some(row) = self.ingredients.get_mut(index) {
            row.name = name.to_string();
            row.measure = measure.to_string();
        }
    }

    pub fn add_instruction(&mut self) {
        self.instructions.push(String::new());
    }

    /// Remove an instruction row. Removing the last remaining row, or an
    /// out-of-range index, is a no-op.
    pub fn remove_instruction(&mut self, index: usize) {
        if self.instructions.len() > 1 && index < self.instructions.len() {
            self.instructions.remove(index);
        }
    }

    pub fn set_instruction(&mut self, index: usize, content: &str) {
        if let Some(row) = self.instructions.get_mut(index) {
            *row = content.to_string();
        }
    }

    /// Check the draft without consuming it. Each failed check reports
    /// its own error; checks run in field order and the first failure
    /// wins.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if !self.ingredients.iter().any(|row| !row.name.trim().is_empty()) {
            return Err(DraftError::NoIngredients);
        }
        if !self.instructions.iter().any(|row| !row.trim().is_empty()) {
            return Err(DraftError::NoInstructions);
        }
        Ok(())
    }

    /// Validate, filter out blank rows, and coerce the loosely-typed
    /// fields into a [`NewRecipe`] submission payload.
    ///
    /// The draft itself is untouched, so a failed submission can be
    /// retried without re-entering anything.
    pub fn finish(&self) -> Result<NewRecipe, DraftError> {
        self.validate()?;

        Ok(NewRecipe {
            title: self.title.trim().to_string(),
            description: non_blank(&self.description),
            category: non_blank(&self.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            cuisine: non_blank(&self.cuisine),
            prep_time: parse_minutes(&self.prep_time),
            cook_time: parse_minutes(&self.cook_time),
            servings: parse_servings(&self.servings),
            difficulty: self.difficulty.parse().unwrap_or_default(),
            video_url: non_blank(&self.video_url),
            ingredients: filter_ingredients(self.ingredients.iter().cloned()),
            instructions: filter_instructions(self.instructions.iter().cloned()),
        })
    }
}

/// Keep only rows with a non-blank name, trimming both fields. Running
/// this over already-filtered rows changes nothing.
pub fn filter_ingredients<I>(rows: I) -> Vec<ParsedIngredient>
where
    I: IntoIterator<Item = IngredientRow>,
{
    rows.into_iter()
        .filter(|row| !row.name.trim().is_empty())
        .map(|row| ParsedIngredient {
            name: row.name.trim().to_string(),
            measure: row.measure.trim().to_string(),
        })
        .collect()
}

/// Keep only non-blank instruction rows, trimmed. Idempotent.
pub fn filter_instructions<I>(rows: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    rows.into_iter()
        .map(|row| row.trim().to_string())
        .filter(|row| !row.is_empty())
        .collect()
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Minutes fields parse to a non-negative integer or become absent.
fn parse_minutes(raw: &str) -> Option<i32> {
    raw.trim().parse().ok().filter(|&minutes| minutes >= 0)
}

/// Servings parses to a positive integer, defaulting otherwise.
fn parse_servings(raw: &str) -> i32 {
    raw.trim()
        .parse()
        .ok()
        .filter(|&servings| servings > 0)
        .unwrap_or(DEFAULT_SERVINGS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn servings_defaults_when_unparseable_or_non_positive() {
        assert_eq!(parse_servings("6"), 6);
        assert_eq!(parse_servings("soup"), DEFAULT_SERVINGS);
        assert_eq!(parse_servings("0"), DEFAULT_SERVINGS);
        assert_eq!(parse_servings("-2"), DEFAULT_SERVINGS);
    }

    #[test]
    fn minutes_absent_when_unparseable_or_negative() {
        assert_eq!(parse_minutes("15"), Some(15));
        assert_eq!(parse_minutes(""), None);
        assert_eq!(parse_minutes("a while"), None);
        assert_eq!(parse_minutes("-5"), None);
    }

    #[test]
    fn last_row_removal_is_a_noop() {
        let mut draft = RecipeDraft::new();
        draft.remove_ingredient(0);
        draft.remove_instruction(0);
        assert_eq!(draft.ingredients.len(), 1);
        assert_eq!(draft.instructions.len(), 1);
    }
}

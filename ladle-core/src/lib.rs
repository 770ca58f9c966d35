pub mod draft;
pub mod error;
pub mod favorites;
pub mod ingredients;
pub mod instructions;
pub mod mealdb;
pub mod video;

pub use draft::{filter_ingredients, filter_instructions, Difficulty, IngredientRow, NewRecipe, RecipeDraft};
pub use error::{DraftError, FetchError, StoreError};
pub use favorites::{
    Favorite, FavoriteStore, FavoritesSession, Membership, MemoryStore, NewFavorite, RecipeType,
    Toggle,
};
pub use ingredients::{parse_ingredients, ParsedIngredient};
pub use instructions::segment_instructions;
pub use mealdb::{Category, Meal, MealDbClient, MealSummary};
pub use video::extract_youtube_id;

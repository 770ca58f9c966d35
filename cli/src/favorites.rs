//! Favorites commands, driven through the core favorites session.

use anyhow::{bail, Result};
use ladle_core::mealdb::MealDbClient;
use ladle_core::{FavoritesSession, NewFavorite, RecipeType, Toggle};
use uuid::Uuid;

use crate::api::ApiClient;

/// Build a favorites session for the signed-in user behind this client.
pub async fn favorites_session(api: &ApiClient) -> Result<FavoritesSession<ApiClient>> {
    let profile = api.profile().await?;
    Ok(FavoritesSession::signed_in(api.clone(), profile.user_id))
}

pub async fn list(api: &ApiClient) -> Result<()> {
    let mut session = favorites_session(api).await?;
    session.refresh().await?;

    if session.favorites().is_empty() {
        println!("No favorites yet");
        return Ok(());
    }

    for favorite in session.favorites() {
        println!(
            "{:<6} {:<8} {}",
            favorite.recipe_type, favorite.recipe_id, favorite.recipe_title
        );
    }
    Ok(())
}

pub async fn toggle(
    api: &ApiClient,
    mealdb: &MealDbClient,
    recipe_type: RecipeType,
    recipe_id: &str,
) -> Result<()> {
    let favorite = resolve(api, mealdb, recipe_type, recipe_id).await?;

    let mut session = favorites_session(api).await?;
    session.refresh().await?;

    match session.toggle(favorite).await? {
        Toggle::Added => println!("Added to favorites"),
        Toggle::Removed => println!("Removed from favorites"),
    }
    Ok(())
}

pub async fn add(
    api: &ApiClient,
    mealdb: &MealDbClient,
    recipe_type: RecipeType,
    recipe_id: &str,
) -> Result<()> {
    let favorite = resolve(api, mealdb, recipe_type, recipe_id).await?;

    let mut session = favorites_session(api).await?;
    session.refresh().await?;
    session.add(favorite).await?;

    println!("Added to favorites");
    Ok(())
}

pub async fn remove(api: &ApiClient, recipe_type: RecipeType, recipe_id: &str) -> Result<()> {
    let mut session = favorites_session(api).await?;
    session.refresh().await?;
    session.remove(recipe_id, recipe_type).await?;

    println!("Removed from favorites");
    Ok(())
}

/// Build the favorite payload by looking the recipe up in its catalog, so
/// stored titles and images match the source of truth.
async fn resolve(
    api: &ApiClient,
    mealdb: &MealDbClient,
    recipe_type: RecipeType,
    recipe_id: &str,
) -> Result<NewFavorite> {
    match recipe_type {
        RecipeType::Api => {
            let meal = match mealdb.lookup(recipe_id).await? {
                Some(meal) => meal,
                None => bail!("Recipe {recipe_id} not found"),
            };
            Ok(NewFavorite {
                recipe_id: meal.id,
                recipe_type,
                recipe_title: meal.title,
                recipe_image: meal.thumbnail,
            })
        }
        RecipeType::User => {
            let id: Uuid = recipe_id.parse()?;
            let recipe = match api.community_recipe(id).await? {
                Some(recipe) => recipe,
                None => bail!("Recipe {recipe_id} not found"),
            };
            Ok(NewFavorite {
                recipe_id: recipe.id.to_string(),
                recipe_type,
                recipe_title: recipe.title,
                recipe_image: recipe.image_url,
            })
        }
    }
}

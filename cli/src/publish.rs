//! Publishing and community-recipe commands.

use std::path::Path;

use anyhow::{Context, Result};
use ladle_core::{extract_youtube_id, RecipeDraft};
use uuid::Uuid;

use crate::api::{ApiClient, RecipeSummary};

/// Load a draft from a JSON file, validate it, and publish it.
pub async fn publish(api: &ApiClient, path: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let draft: RecipeDraft = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    // Field-specific validation errors surface here, before any network
    // call; the file stays as-is for fixing and retrying.
    let recipe = draft.finish()?;

    let id = api.publish(&recipe).await?;
    println!("Published \"{}\"", recipe.title);
    println!("View it with: ladle recipe {id}");
    Ok(())
}

pub async fn my_recipes(api: &ApiClient) -> Result<()> {
    let recipes = api.my_recipes().await?;

    if recipes.is_empty() {
        println!("No recipes published yet");
        return Ok(());
    }
    print_summaries(&recipes);
    Ok(())
}

pub async fn community(api: &ApiClient) -> Result<()> {
    let recipes = api.community_recipes().await?;

    if recipes.is_empty() {
        println!("No community recipes yet");
        return Ok(());
    }
    print_summaries(&recipes);
    Ok(())
}

pub async fn show(api: &ApiClient, id: Uuid) -> Result<()> {
    let recipe = match api.community_recipe(id).await? {
        Some(recipe) => recipe,
        None => {
            // Explicit not-found state, distinct from transport errors.
            println!("Recipe not found");
            return Ok(());
        }
    };

    println!("{} ({})", recipe.title, recipe.category);
    if let Some(author) = &recipe.author {
        println!("By {}", author.full_name.as_deref().unwrap_or(&author.username));
    }
    if let Some(description) = &recipe.description {
        println!("{description}");
    }

    let mut facts = Vec::new();
    if let Some(cuisine) = &recipe.cuisine {
        facts.push(format!("Cuisine: {cuisine}"));
    }
    if let Some(prep) = recipe.prep_time {
        facts.push(format!("Prep: {prep} min"));
    }
    if let Some(cook) = recipe.cook_time {
        facts.push(format!("Cook: {cook} min"));
    }
    facts.push(format!("Serves: {}", recipe.servings));
    facts.push(format!("Difficulty: {}", recipe.difficulty));
    println!("{}", facts.join(" · "));

    println!();
    println!("Ingredients:");
    for ingredient in &recipe.ingredients {
        if ingredient.measure.is_empty() {
            println!("  - {}", ingredient.name);
        } else {
            println!("  - {} {}", ingredient.measure, ingredient.name);
        }
    }

    println!();
    println!("Instructions:");
    for (i, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    if let Some(video_id) = extract_youtube_id(recipe.video_url.as_deref()) {
        println!();
        println!("Video: https://www.youtube.com/embed/{video_id}");
    }

    Ok(())
}

pub async fn delete(api: &ApiClient, id: Uuid) -> Result<()> {
    api.delete_recipe(id).await?;
    println!("Recipe deleted");
    Ok(())
}

fn print_summaries(recipes: &[RecipeSummary]) {
    for recipe in recipes {
        println!(
            "{}  {:<32} {:<12} {}",
            recipe.id,
            recipe.title,
            recipe.category,
            recipe.created_at.format("%Y-%m-%d")
        );
    }
}

//! Commands against the public recipe API.

use anyhow::{bail, Result};
use ladle_core::mealdb::{Meal, MealDbClient, MealSummary};
use ladle_core::{extract_youtube_id, parse_ingredients, segment_instructions, RecipeType};

use crate::api::ApiClient;
use crate::favorites::favorites_session;

pub async fn search(mealdb: &MealDbClient, query: &str) -> Result<()> {
    let meals = mealdb.search(query).await?;

    if meals.is_empty() {
        println!("No recipes found for \"{query}\"");
        return Ok(());
    }

    for meal in &meals {
        print_meal_line(meal);
    }
    Ok(())
}

pub async fn show(mealdb: &MealDbClient, api: Option<&ApiClient>, id: &str) -> Result<()> {
    let meal = match mealdb.lookup(id).await? {
        Some(meal) => meal,
        None => bail!("Recipe {id} not found"),
    };

    let favorited = match api {
        Some(api) if api.has_token() => {
            let mut session = favorites_session(api).await?;
            session.refresh().await?;
            session.is_favorite(&meal.id, RecipeType::Api)
        }
        _ => false,
    };

    print_meal(&meal, favorited);
    Ok(())
}

pub async fn random(mealdb: &MealDbClient, count: usize) -> Result<()> {
    if count <= 1 {
        match mealdb.random().await? {
            Some(meal) => print_meal(&meal, false),
            None => println!("The API returned no recipe"),
        }
        return Ok(());
    }

    let meals = mealdb.random_selection(count).await;
    if meals.is_empty() {
        bail!("No random recipes could be fetched");
    }
    for meal in &meals {
        print_meal_line(meal);
    }
    Ok(())
}

pub async fn categories(mealdb: &MealDbClient) -> Result<()> {
    for category in mealdb.categories().await? {
        match category.description {
            Some(description) => {
                // Keep one line per category; descriptions run long.
                let short: String = description.chars().take(72).collect();
                println!("{:<16} {}", category.name, short);
            }
            None => println!("{}", category.name),
        }
    }
    Ok(())
}

pub async fn by_category(mealdb: &MealDbClient, name: &str) -> Result<()> {
    print_summaries(&mealdb.filter_by_category(name).await?, name);
    Ok(())
}

pub async fn areas(mealdb: &MealDbClient) -> Result<()> {
    for area in mealdb.areas().await? {
        println!("{area}");
    }
    Ok(())
}

pub async fn by_area(mealdb: &MealDbClient, name: &str) -> Result<()> {
    print_summaries(&mealdb.filter_by_area(name).await?, name);
    Ok(())
}

fn print_summaries(summaries: &[MealSummary], label: &str) {
    if summaries.is_empty() {
        println!("No recipes found for \"{label}\"");
        return;
    }
    for summary in summaries {
        println!("{:<8} {}", summary.id, summary.title);
    }
}

fn print_meal_line(meal: &Meal) {
    println!("{:<8} {}", meal.id, meal.title);
}

fn print_meal(meal: &Meal, favorited: bool) {
    if favorited {
        println!("{} ({}) ♥", meal.title, meal.id);
    } else {
        println!("{} ({})", meal.title, meal.id);
    }

    match (&meal.category, &meal.area) {
        (Some(category), Some(area)) => println!("{category} · {area}"),
        (Some(category), None) => println!("{category}"),
        (None, Some(area)) => println!("{area}"),
        (None, None) => {}
    }

    let tags = meal.tag_list();
    if !tags.is_empty() {
        println!("Tags: {}", tags.join(", "));
    }

    println!();
    println!("Ingredients:");
    for ingredient in parse_ingredients(meal) {
        if ingredient.measure.is_empty() {
            println!("  - {}", ingredient.name);
        } else {
            println!("  - {} {}", ingredient.measure, ingredient.name);
        }
    }

    println!();
    println!("Instructions:");
    let steps = segment_instructions(meal.instructions.as_deref().unwrap_or(""));
    for (i, step) in steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    if let Some(video_id) = extract_youtube_id(meal.youtube.as_deref()) {
        println!();
        println!("Video: https://www.youtube.com/embed/{video_id}");
    }

    if let Some(source) = &meal.source {
        println!("Source: {source}");
    }
}

use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{IngredientItem, Profile, Recipe};
use crate::schema::{profiles, recipes};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthorInfo {
    pub username: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub cuisine: Option<String>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub servings: i32,
    pub difficulty: String,
    pub video_url: Option<String>,
    pub image_url: Option<String>,
    pub ingredients: Vec<IngredientItem>,
    pub instructions: Vec<String>,
    pub author: Option<AuthorInfo>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = RecipeResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn get_recipe(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let row: Option<(Recipe, Option<Profile>)> = match recipes::table
        .left_join(profiles::table.on(profiles::user_id.eq(recipes::user_id)))
        .filter(recipes::id.eq(id))
        .select((Recipe::as_select(), Option::<Profile>::as_select()))
        .first(&mut conn)
        .optional()
    {
        Ok(row) => row,
        Err(e) => {
            tracing::error!("Failed to fetch recipe: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipe".to_string(),
                }),
            )
                .into_response();
        }
    };

    let (recipe, profile) = match row {
        Some(found) => found,
        None => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Recipe not found".to_string(),
                }),
            )
                .into_response()
        }
    };

    // Stored lists are written by the create handler; a malformed value
    // here is logged, not fatal.
    let ingredients: Vec<IngredientItem> = serde_json::from_value(recipe.ingredients)
        .unwrap_or_else(|e| {
            tracing::error!("Malformed ingredients for recipe {}: {}", recipe.id, e);
            Vec::new()
        });
    let instructions: Vec<String> =
        serde_json::from_value(recipe.instructions).unwrap_or_else(|e| {
            tracing::error!("Malformed instructions for recipe {}: {}", recipe.id, e);
            Vec::new()
        });

    let response = RecipeResponse {
        id: recipe.id,
        title: recipe.title,
        description: recipe.description,
        category: recipe.category,
        cuisine: recipe.cuisine,
        prep_time: recipe.prep_time,
        cook_time: recipe.cook_time,
        servings: recipe.servings,
        difficulty: recipe.difficulty,
        video_url: recipe.video_url,
        image_url: recipe.image_url,
        ingredients,
        instructions,
        author: profile.map(|p| AuthorInfo {
            username: p.username,
            full_name: p.full_name,
            avatar_url: p.avatar_url,
        }),
        created_at: recipe.created_at,
        updated_at: recipe.updated_at,
    };

    (StatusCode::OK, Json(response)).into_response()
}

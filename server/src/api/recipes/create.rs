use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{NewRecipe, Recipe};
use crate::schema::recipes;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use ladle_core::draft::{self, Difficulty, IngredientRow};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct IngredientInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub measure: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRecipeRequest {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub servings: Option<i32>,
    /// "Easy", "Medium" or "Hard"; anything else falls back to Medium.
    pub difficulty: Option<String>,
    pub video_url: Option<String>,
    pub ingredients: Vec<IngredientInput>,
    pub instructions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateRecipeResponse {
    pub id: Uuid,
}

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe published", body = CreateRecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<CreateRecipeRequest>,
) -> impl IntoResponse {
    let title = request.title.trim();

    if title.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Title cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    // Blank rows are dropped here as well; the draft layer already does
    // this for our own clients, but nothing forces other callers to.
    let ingredients = draft::filter_ingredients(request.ingredients.into_iter().map(|i| {
        IngredientRow {
            name: i.name,
            measure: i.measure,
        }
    }));
    let instructions = draft::filter_instructions(request.instructions);

    if ingredients.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "At least one ingredient is required".to_string(),
            }),
        )
            .into_response();
    }

    if instructions.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "At least one instruction is required".to_string(),
            }),
        )
            .into_response();
    }

    let ingredients_json = match serde_json::to_value(&ingredients) {
        Ok(v) => v,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Invalid ingredients format".to_string(),
                }),
            )
                .into_response()
        }
    };

    let instructions_json = match serde_json::to_value(&instructions) {
        Ok(v) => v,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Invalid instructions format".to_string(),
                }),
            )
                .into_response()
        }
    };

    let category = request
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(draft::DEFAULT_CATEGORY);

    let difficulty = request
        .difficulty
        .as_deref()
        .and_then(|d| d.parse::<Difficulty>().ok())
        .unwrap_or_default();

    let servings = request
        .servings
        .filter(|&s| s > 0)
        .unwrap_or(draft::DEFAULT_SERVINGS);

    let mut conn = get_conn!(pool);

    let new_recipe = NewRecipe {
        user_id: user.id,
        title,
        description: request.description.as_deref().filter(|d| !d.trim().is_empty()),
        category,
        cuisine: request.cuisine.as_deref().filter(|c| !c.trim().is_empty()),
        prep_time: request.prep_time.filter(|&m| m >= 0),
        cook_time: request.cook_time.filter(|&m| m >= 0),
        servings,
        difficulty: difficulty.as_str(),
        video_url: request.video_url.as_deref().filter(|v| !v.trim().is_empty()),
        ingredients: ingredients_json,
        instructions: instructions_json,
    };

    let result: Result<Recipe, diesel::result::Error> = diesel::insert_into(recipes::table)
        .values(&new_recipe)
        .returning(Recipe::as_returning())
        .get_result(&mut conn);

    match result {
        Ok(recipe) => {
            (StatusCode::CREATED, Json(CreateRecipeResponse { id: recipe.id })).into_response()
        }
        // Insert succeeded but no row came back: report it, don't
        // pretend the publish worked.
        Err(diesel::result::Error::NotFound) => {
            tracing::error!("Recipe insert returned no row");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Recipe was created but not returned".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}

use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::recipes;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeSummary {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub image_url: Option<String>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub servings: i32,
    pub difficulty: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipesListResponse {
    pub recipes: Vec<RecipeSummary>,
}

// Type alias for query result row
pub(super) type SummaryRow = (
    Uuid,
    String,
    String,
    Option<String>,
    Option<i32>,
    Option<i32>,
    i32,
    String,
    DateTime<Utc>,
);

pub(super) fn to_summary(row: SummaryRow) -> RecipeSummary {
    let (id, title, category, image_url, prep_time, cook_time, servings, difficulty, created_at) =
        row;
    RecipeSummary {
        id,
        title,
        category,
        image_url,
        prep_time,
        cook_time,
        servings,
        difficulty,
        created_at,
    }
}

pub(super) const SUMMARY_COLUMNS: (
    recipes::id,
    recipes::title,
    recipes::category,
    recipes::image_url,
    recipes::prep_time,
    recipes::cook_time,
    recipes::servings,
    recipes::difficulty,
    recipes::created_at,
) = (
    recipes::id,
    recipes::title,
    recipes::category,
    recipes::image_url,
    recipes::prep_time,
    recipes::cook_time,
    recipes::servings,
    recipes::difficulty,
    recipes::created_at,
);

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "Community recipes, newest first", body = RecipesListResponse)
    )
)]
pub async fn list_recipes(State(pool): State<Arc<DbPool>>) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let rows: Vec<SummaryRow> = match recipes::table
        .order(recipes::created_at.desc())
        .select(SUMMARY_COLUMNS)
        .load(&mut conn)
    {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Failed to fetch recipes: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipes".to_string(),
                }),
            )
                .into_response();
        }
    };

    let response = RecipesListResponse {
        recipes: rows.into_iter().map(to_summary).collect(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

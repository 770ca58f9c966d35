use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Favorite;
use crate::schema::favorites;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FavoriteItem {
    pub id: Uuid,
    pub recipe_id: String,
    pub recipe_type: String,
    pub recipe_title: String,
    pub recipe_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Favorite> for FavoriteItem {
    fn from(favorite: Favorite) -> Self {
        Self {
            id: favorite.id,
            recipe_id: favorite.recipe_id,
            recipe_type: favorite.recipe_type,
            recipe_title: favorite.recipe_title,
            recipe_image: favorite.recipe_image,
            created_at: favorite.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FavoritesListResponse {
    pub favorites: Vec<FavoriteItem>,
}

#[utoipa::path(
    get,
    path = "/api/favorites",
    tag = "favorites",
    responses(
        (status = 200, description = "The caller's favorites, newest first", body = FavoritesListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_favorites(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let rows: Vec<Favorite> = match favorites::table
        .filter(favorites::user_id.eq(user.id))
        .order(favorites::created_at.desc())
        .select(Favorite::as_select())
        .load(&mut conn)
    {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Failed to fetch favorites: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch favorites".to_string(),
                }),
            )
                .into_response();
        }
    };

    let response = FavoritesListResponse {
        favorites: rows.into_iter().map(FavoriteItem::from).collect(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

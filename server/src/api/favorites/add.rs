use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::NewFavorite;
use crate::schema::favorites;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use ladle_core::RecipeType;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddFavoriteRequest {
    pub recipe_id: String,
    /// "api" or "user"
    pub recipe_type: String,
    pub recipe_title: String,
    pub recipe_image: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/favorites",
    tag = "favorites",
    request_body = AddFavoriteRequest,
    responses(
        (status = 201, description = "Favorite added"),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 409, description = "Already favorited", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn add_favorite(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<AddFavoriteRequest>,
) -> impl IntoResponse {
    let recipe_type: RecipeType = match request.recipe_type.parse() {
        Ok(t) => t,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "recipe_type must be \"api\" or \"user\"".to_string(),
                }),
            )
                .into_response()
        }
    };

    if request.recipe_id.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "recipe_id cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    let mut conn = get_conn!(pool);

    let result = diesel::insert_into(favorites::table)
        .values(&NewFavorite {
            user_id: user.id,
            recipe_id: &request.recipe_id,
            recipe_type: recipe_type.as_str(),
            recipe_title: &request.recipe_title,
            recipe_image: request.recipe_image.as_deref(),
        })
        .execute(&mut conn);

    match result {
        Ok(_) => StatusCode::CREATED.into_response(),
        // The unique index on (user_id, recipe_id, recipe_type) is the
        // backstop for concurrent toggles of the same recipe.
        Err(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            _,
        )) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: "Already favorited".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to add favorite: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to add favorite".to_string(),
                }),
            )
                .into_response()
        }
    }
}

use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::favorites;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use ladle_core::RecipeType;
use std::sync::Arc;

#[utoipa::path(
    delete,
    path = "/api/favorites/{recipe_type}/{recipe_id}",
    tag = "favorites",
    params(
        ("recipe_type" = String, Path, description = "\"api\" or \"user\""),
        ("recipe_id" = String, Path, description = "Recipe identifier within that catalog")
    ),
    responses(
        (status = 204, description = "Favorite removed (or was already absent)"),
        (status = 400, description = "Invalid recipe type", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn remove_favorite(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path((recipe_type, recipe_id)): Path<(String, String)>,
) -> impl IntoResponse {
    let recipe_type: RecipeType = match recipe_type.parse() {
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

    let mut conn = get_conn!(pool);

    let result = diesel::delete(
        favorites::table
            .filter(favorites::user_id.eq(user.id))
            .filter(favorites::recipe_id.eq(&recipe_id))
            .filter(favorites::recipe_type.eq(recipe_type.as_str())),
    )
    .execute(&mut conn);

    match result {
        // Removing an absent favorite is not an error.
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("Failed to remove favorite: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to remove favorite".to_string(),
                }),
            )
                .into_response()
        }
    }
}

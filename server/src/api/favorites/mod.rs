pub mod add;
pub mod list;
pub mod remove;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/favorites endpoints (mounted at /api/favorites)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_favorites).post(add::add_favorite))
        .route(
            "/{recipe_type}/{recipe_id}",
            axum::routing::delete(remove::remove_favorite),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(list::list_favorites, add::add_favorite, remove::remove_favorite),
    components(schemas(
        list::FavoritesListResponse,
        list::FavoriteItem,
        add::AddFavoriteRequest,
    ))
)]
pub struct ApiDoc;

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod mine;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes).
///
/// The community list and detail reads are public; the mutating routes
/// and /mine enforce auth through the AuthUser extractor.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route("/mine", get(mine::my_recipes))
        .route(
            "/{id}",
            get(get::get_recipe).delete(delete::delete_recipe),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_recipe,
        list::list_recipes,
        mine::my_recipes,
        get::get_recipe,
        delete::delete_recipe,
    ),
    components(schemas(
        create::CreateRecipeRequest,
        create::IngredientInput,
        create::CreateRecipeResponse,
        list::RecipesListResponse,
        list::RecipeSummary,
        get::RecipeResponse,
        get::AuthorInfo,
    ))
)]
pub struct ApiDoc;

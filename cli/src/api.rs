//! Hand-written client for the ladle server API.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ladle_core::{Favorite, FavoriteStore, NewFavorite, NewRecipe, ParsedIngredient, RecipeType, StoreError};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user_id: Uuid,
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub user_id: Uuid,
    pub username: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct FavoritesListResponse {
    favorites: Vec<Favorite>,
}

#[derive(Debug, Deserialize)]
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

#[derive(Debug, Deserialize)]
struct RecipesListResponse {
    recipes: Vec<RecipeSummary>,
}

#[derive(Debug, Deserialize)]
pub struct AuthorInfo {
    pub username: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecipeDetail {
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
    pub ingredients: Vec<ParsedIngredient>,
    pub instructions: Vec<String>,
    pub author: Option<AuthorInfo>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct CreateRecipeResponse {
    id: Uuid,
}

#[derive(Debug, Deserialize)]
struct PingResponse {
    message: String,
}

/// Client for one server, optionally carrying a bearer token.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base: &str, token: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base: base.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, format!("{}{}", self.base, path));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Extract the server's error message from a failed response.
    async fn error_message(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => format!("HTTP {status}"),
        }
    }

    async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            bail!(Self::error_message(response).await)
        }
    }

    pub async fn ping(&self) -> Result<String> {
        let response = self
            .request(reqwest::Method::GET, "/api/test/unauthed-ping")
            .send()
            .await?;
        let body: PingResponse = Self::expect_success(response).await?.json().await?;
        Ok(body.message)
    }

    pub async fn signup(&self, username: &str, password: &str) -> Result<AuthResponse> {
        let response = self
            .request(reqwest::Method::POST, "/api/auth/signup")
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;
        Ok(Self::expect_success(response).await?.json().await?)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse> {
        let response = self
            .request(reqwest::Method::POST, "/api/auth/login")
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;
        Ok(Self::expect_success(response).await?.json().await?)
    }

    pub async fn profile(&self) -> Result<ProfileResponse> {
        let response = self.request(reqwest::Method::GET, "/api/profile").send().await?;
        Ok(Self::expect_success(response).await?.json().await?)
    }

    pub async fn update_profile(
        &self,
        full_name: Option<&str>,
        avatar_url: Option<&str>,
        bio: Option<&str>,
    ) -> Result<ProfileResponse> {
        let response = self
            .request(reqwest::Method::PUT, "/api/profile")
            .json(&serde_json::json!({
                "full_name": full_name,
                "avatar_url": avatar_url,
                "bio": bio,
            }))
            .send()
            .await?;
        Ok(Self::expect_success(response).await?.json().await?)
    }

    pub async fn publish(&self, recipe: &NewRecipe) -> Result<Uuid> {
        let response = self
            .request(reqwest::Method::POST, "/api/recipes")
            .json(recipe)
            .send()
            .await?;
        let body: CreateRecipeResponse = Self::expect_success(response).await?.json().await?;
        Ok(body.id)
    }

    pub async fn community_recipes(&self) -> Result<Vec<RecipeSummary>> {
        let response = self.request(reqwest::Method::GET, "/api/recipes").send().await?;
        let body: RecipesListResponse = Self::expect_success(response).await?.json().await?;
        Ok(body.recipes)
    }

    pub async fn my_recipes(&self) -> Result<Vec<RecipeSummary>> {
        let response = self
            .request(reqwest::Method::GET, "/api/recipes/mine")
            .send()
            .await?;
        let body: RecipesListResponse = Self::expect_success(response).await?.json().await?;
        Ok(body.recipes)
    }

    /// Community recipe detail; `None` when the id is unknown.
    pub async fn community_recipe(&self, id: Uuid) -> Result<Option<RecipeDetail>> {
        let response = self
            .request(reqwest::Method::GET, &format!("/api/recipes/{id}"))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(Self::expect_success(response).await?.json().await?))
    }

    pub async fn delete_recipe(&self, id: Uuid) -> Result<()> {
        let response = self
            .request(reqwest::Method::DELETE, &format!("/api/recipes/{id}"))
            .send()
            .await?;
        Self::expect_success(response).await?;
        Ok(())
    }
}

fn store_error(status: reqwest::StatusCode, message: String) -> StoreError {
    match status {
        reqwest::StatusCode::UNAUTHORIZED => StoreError::NotSignedIn,
        reqwest::StatusCode::CONFLICT => StoreError::Duplicate,
        reqwest::StatusCode::NOT_FOUND => StoreError::NotFound,
        _ => StoreError::Remote(message),
    }
}

/// The server's favorites collection as a [`FavoriteStore`], scoped by
/// this client's bearer token.
#[async_trait]
impl FavoriteStore for ApiClient {
    async fn list(&self) -> Result<Vec<Favorite>, StoreError> {
        if self.token.is_none() {
            return Err(StoreError::NotSignedIn);
        }

        let response = self
            .request(reqwest::Method::GET, "/api/favorites")
            .send()
            .await
            .map_err(|e| StoreError::Remote(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(store_error(status, Self::error_message(response).await));
        }

        let body: FavoritesListResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Remote(e.to_string()))?;
        Ok(body.favorites)
    }

    async fn insert(&self, favorite: &NewFavorite) -> Result<(), StoreError> {
        if self.token.is_none() {
            return Err(StoreError::NotSignedIn);
        }

        let response = self
            .request(reqwest::Method::POST, "/api/favorites")
            .json(favorite)
            .send()
            .await
            .map_err(|e| StoreError::Remote(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(store_error(status, Self::error_message(response).await));
        }
        Ok(())
    }

    async fn delete(&self, recipe_id: &str, recipe_type: RecipeType) -> Result<(), StoreError> {
        if self.token.is_none() {
            return Err(StoreError::NotSignedIn);
        }

        let response = self
            .request(
                reqwest::Method::DELETE,
                &format!("/api/favorites/{}/{}", recipe_type.as_str(), recipe_id),
            )
            .send()
            .await
            .map_err(|e| StoreError::Remote(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(store_error(status, Self::error_message(response).await));
        }
        Ok(())
    }
}

use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::task::JoinSet;

use crate::error::FetchError;

use super::types::{AreaRow, CategoriesEnvelope, Category, Meal, MealSummary, MealsEnvelope};

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Async client for the public recipe API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    http: reqwest::Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a client against the production API, honoring the
    /// `MEALDB_BASE_URL` environment variable when set.
    pub fn new() -> Result<Self, FetchError> {
        let base_url =
            std::env::var("MEALDB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    /// Create a client against a specific base URL (no trailing slash).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Keyword search over meal names.
    pub async fn search(&self, query: &str) -> Result<Vec<Meal>, FetchError> {
        let envelope: MealsEnvelope<Meal> = self.get("search.php", &[("s", query)]).await?;
        Ok(envelope.meals.unwrap_or_default())
    }

    /// Look up one meal by its upstream identifier.
    pub async fn lookup(&self, id: &str) -> Result<Option<Meal>, FetchError> {
        let envelope: MealsEnvelope<Meal> = self.get("lookup.php", &[("i", id)]).await?;
        Ok(envelope.meals.unwrap_or_default().into_iter().next())
    }

    /// Fetch a single random meal.
    pub async fn random(&self) -> Result<Option<Meal>, FetchError> {
        let envelope: MealsEnvelope<Meal> = self.get("random.php", &[]).await?;
        Ok(envelope.meals.unwrap_or_default().into_iter().next())
    }

    /// Fetch up to `count` random meals concurrently. Individual failures
    /// are logged and dropped rather than failing the whole batch.
    pub async fn random_selection(&self, count: usize) -> Vec<Meal> {
        let mut tasks = JoinSet::new();
        for _ in 0..count {
            let client = self.clone();
            tasks.spawn(async move { client.random().await });
        }

        let mut meals = Vec::with_capacity(count);
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(Some(meal))) => meals.push(meal),
                Ok(Ok(None)) => {}
                Ok(Err(e)) => tracing::warn!("random meal fetch failed: {}", e),
                Err(e) => tracing::warn!("random meal task panicked: {}", e),
            }
        }
        meals
    }

    /// List all meal categories.
    pub async fn categories(&self) -> Result<Vec<Category>, FetchError> {
        let envelope: CategoriesEnvelope = self.get("categories.php", &[]).await?;
        Ok(envelope.categories.unwrap_or_default())
    }

    /// List meal summaries for one category.
    pub async fn filter_by_category(&self, category: &str) -> Result<Vec<MealSummary>, FetchError> {
        let envelope: MealsEnvelope<MealSummary> =
            self.get("filter.php", &[("c", category)]).await?;
        Ok(envelope.meals.unwrap_or_default())
    }

    /// List meal summaries for one origin area.
    pub async fn filter_by_area(&self, area: &str) -> Result<Vec<MealSummary>, FetchError> {
        let envelope: MealsEnvelope<MealSummary> = self.get("filter.php", &[("a", area)]).await?;
        Ok(envelope.meals.unwrap_or_default())
    }

    /// List all known origin areas.
    pub async fn areas(&self) -> Result<Vec<String>, FetchError> {
        let envelope: MealsEnvelope<AreaRow> = self.get("list.php", &[("a", "list")]).await?;
        Ok(envelope
            .meals
            .unwrap_or_default()
            .into_iter()
            .map(|row| row.area)
            .collect())
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!(url, "fetching from recipe API");

        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        response
            .json()
            .await
            .map_err(|e| FetchError::InvalidBody(e.to_string()))
    }
}

//! Session-scoped cached view over a user's remote favorites collection.
//!
//! The cache is kept consistent with the store by invalidate-and-refetch:
//! after every successful mutation the whole collection is fetched again,
//! so the cache always reflects the store's actual state (including
//! server-assigned ids and timestamps) at the cost of one extra round
//! trip. Failed mutations and failed refetches leave the previous cache
//! untouched.

use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;

/// Which catalog a favorited recipe belongs to: the external API or the
/// user-published collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeType {
    Api,
    User,
}

impl RecipeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeType::Api => "api",
            RecipeType::User => "user",
        }
    }
}

impl fmt::Display for RecipeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecipeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "api" => Ok(RecipeType::Api),
            "user" => Ok(RecipeType::User),
            other => Err(format!("unknown recipe type: {other}")),
        }
    }
}

/// A favorite row as stored remotely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Favorite {
    pub id: Uuid,
    pub recipe_id: String,
    pub recipe_type: RecipeType,
    pub recipe_title: String,
    pub recipe_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for adding a favorite; id and timestamp are assigned by the
/// store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFavorite {
    pub recipe_id: String,
    pub recipe_type: RecipeType,
    pub recipe_title: String,
    pub recipe_image: Option<String>,
}

/// Remote store holding one signed-in user's favorites.
///
/// Implementations are already scoped to an authenticated context (the
/// HTTP store carries a bearer token; the in-memory store is one user's
/// collection). Inserts must reject a duplicate (recipe_id, recipe_type)
/// with [`StoreError::Duplicate`].
#[async_trait]
pub trait FavoriteStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Favorite>, StoreError>;

    async fn insert(&self, favorite: &NewFavorite) -> Result<(), StoreError>;

    async fn delete(&self, recipe_id: &str, recipe_type: RecipeType) -> Result<(), StoreError>;
}

/// Three-valued membership answer: before the first successful fetch the
/// cache cannot distinguish "not favorited" from "not yet known".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    /// No fetch has succeeded yet for this session.
    Unknown,
    Absent,
    Present,
}

/// Outcome of a toggle: which mutation it issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Client-side favorites state for one authenticated session.
pub struct FavoritesSession<S> {
    store: S,
    user: Option<Uuid>,
    /// `None` until the first successful fetch of this session.
    cache: Option<Vec<Favorite>>,
}

impl<S: FavoriteStore> FavoritesSession<S> {
    /// Create a signed-out session. All mutations fail with
    /// [`StoreError::NotSignedIn`] until [`sign_in`](Self::sign_in).
    pub fn new(store: S) -> Self {
        Self {
            store,
            user: None,
            cache: None,
        }
    }

    /// Create a session that is already signed in.
    pub fn signed_in(store: S, user: Uuid) -> Self {
        Self {
            store,
            user: Some(user),
            cache: None,
        }
    }

    /// Record the session identity. Any cache from a previous identity is
    /// dropped.
    pub fn sign_in(&mut self, user: Uuid) {
        self.user = Some(user);
        self.cache = None;
    }

    /// Clear the identity and the cache.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.cache = None;
    }

    pub fn user(&self) -> Option<Uuid> {
        self.user
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the initial fetch has completed for this session.
    pub fn is_loaded(&self) -> bool {
        self.cache.is_some()
    }

    /// The cached favorites, newest first. Empty until the first
    /// successful fetch.
    pub fn favorites(&self) -> &[Favorite] {
        self.cache.as_deref().unwrap_or(&[])
    }

    /// Fetch the collection and replace the cache. On failure the
    /// previous cache (possibly stale) is kept and the error is returned.
    pub async fn refresh(&mut self) -> Result<(), StoreError> {
        if self.user.is_none() {
            return Err(StoreError::NotSignedIn);
        }

        let favorites = self.store.list().await?;
        self.cache = Some(favorites);
        Ok(())
    }

    /// Three-valued membership lookup over the current cache.
    pub fn membership(&self, recipe_id: &str, recipe_type: RecipeType) -> Membership {
        match &self.cache {
            None => Membership::Unknown,
            Some(favorites) => {
                if favorites
                    .iter()
                    .any(|f| f.recipe_id == recipe_id && f.recipe_type == recipe_type)
                {
                    Membership::Present
                } else {
                    Membership::Absent
                }
            }
        }
    }

    /// Boolean membership: `false` until the cache is loaded, per the
    /// session contract. Use [`membership`](Self::membership) to tell
    /// "unknown" apart from "absent".
    pub fn is_favorite(&self, recipe_id: &str, recipe_type: RecipeType) -> bool {
        self.membership(recipe_id, recipe_type) == Membership::Present
    }

    /// Add a favorite, then refetch the collection.
    pub async fn add(&mut self, favorite: NewFavorite) -> Result<(), StoreError> {
        if self.user.is_none() {
            return Err(StoreError::NotSignedIn);
        }

        self.store.insert(&favorite).await?;
        self.refresh().await
    }

    /// Remove a favorite by key, then refetch the collection.
    pub async fn remove(
        &mut self,
        recipe_id: &str,
        recipe_type: RecipeType,
    ) -> Result<(), StoreError> {
        if self.user.is_none() {
            return Err(StoreError::NotSignedIn);
        }

        self.store.delete(recipe_id, recipe_type).await?;
        self.refresh().await
    }

    /// Remove the favorite if the cache says it is present, add it
    /// otherwise.
    ///
    /// The lookup and the mutation are not atomic against concurrent
    /// toggles for the same key; the store's uniqueness constraint
    /// rejects the duplicate add in that race and the rejection surfaces
    /// as [`StoreError::Duplicate`].
    pub async fn toggle(&mut self, favorite: NewFavorite) -> Result<Toggle, StoreError> {
        if self.is_favorite(&favorite.recipe_id, favorite.recipe_type) {
            self.remove(&favorite.recipe_id, favorite.recipe_type)
                .await?;
            Ok(Toggle::Removed)
        } else {
            self.add(favorite).await?;
            Ok(Toggle::Added)
        }
    }
}

/// In-memory [`FavoriteStore`] holding one user's collection. Enforces
/// the same (recipe_id, recipe_type) uniqueness as the real store, and
/// can be told to fail its next call, for exercising error paths.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Favorite>>,
    fail_next: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next store call fail with [`StoreError::Remote`].
    pub fn fail_next(&self, message: &str) {
        *self.fail_next.lock().unwrap() = Some(message.to_string());
    }

    /// Number of rows currently stored.
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn take_failure(&self) -> Option<StoreError> {
        self.fail_next.lock().unwrap().take().map(StoreError::Remote)
    }
}

#[async_trait]
impl FavoriteStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Favorite>, StoreError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }

        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn insert(&self, favorite: &NewFavorite) -> Result<(), StoreError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }

        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|f| f.recipe_id == favorite.recipe_id && f.recipe_type == favorite.recipe_type)
        {
            return Err(StoreError::Duplicate);
        }

        rows.push(Favorite {
            id: Uuid::new_v4(),
            recipe_id: favorite.recipe_id.clone(),
            recipe_type: favorite.recipe_type,
            recipe_title: favorite.recipe_title.clone(),
            recipe_image: favorite.recipe_image.clone(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn delete(&self, recipe_id: &str, recipe_type: RecipeType) -> Result<(), StoreError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }

        self.rows
            .lock()
            .unwrap()
            .retain(|f| !(f.recipe_id == recipe_id && f.recipe_type == recipe_type));
        Ok(())
    }
}

//! Favorites session behavior against the in-memory store.

use ladle_core::{
    FavoritesSession, Membership, MemoryStore, NewFavorite, RecipeType, StoreError, Toggle,
};
use uuid::Uuid;

fn favorite(recipe_id: &str) -> NewFavorite {
    NewFavorite {
        recipe_id: recipe_id.to_string(),
        recipe_type: RecipeType::Api,
        recipe_title: format!("Recipe {recipe_id}"),
        recipe_image: None,
    }
}

fn session() -> FavoritesSession<MemoryStore> {
    FavoritesSession::signed_in(MemoryStore::new(), Uuid::new_v4())
}

#[tokio::test]
async fn membership_is_false_before_the_initial_fetch() {
    let mut session = session();

    assert_eq!(
        session.membership("52772", RecipeType::Api),
        Membership::Unknown
    );
    assert!(!session.is_favorite("52772", RecipeType::Api));

    session.refresh().await.unwrap();
    assert_eq!(
        session.membership("52772", RecipeType::Api),
        Membership::Absent
    );
}

#[tokio::test]
async fn add_refetches_and_reflects_store_state() {
    let mut session = session();
    session.refresh().await.unwrap();

    session.add(favorite("52772")).await.unwrap();

    assert!(session.is_favorite("52772", RecipeType::Api));
    // The cached row carries store-assigned fields, not a local patch.
    assert_eq!(session.favorites().len(), 1);
    assert_eq!(session.favorites()[0].recipe_title, "Recipe 52772");
}

#[tokio::test]
async fn same_id_different_type_is_a_different_key() {
    let mut session = session();
    session.refresh().await.unwrap();
    session.add(favorite("52772")).await.unwrap();

    assert!(!session.is_favorite("52772", RecipeType::User));
}

#[tokio::test]
async fn toggle_is_self_inverse() {
    let mut session = session();
    session.refresh().await.unwrap();

    assert_eq!(session.toggle(favorite("52772")).await.unwrap(), Toggle::Added);
    assert!(session.is_favorite("52772", RecipeType::Api));

    assert_eq!(
        session.toggle(favorite("52772")).await.unwrap(),
        Toggle::Removed
    );
    assert!(!session.is_favorite("52772", RecipeType::Api));
    assert!(session.favorites().is_empty());
}

#[tokio::test]
async fn duplicate_add_surfaces_as_duplicate_error() {
    let mut session = session();
    session.refresh().await.unwrap();
    session.add(favorite("52772")).await.unwrap();

    let err = session.add(favorite("52772")).await.unwrap_err();
    assert!(matches!(err, StoreError::Duplicate));
    // The cache still reflects the single stored row.
    assert_eq!(session.favorites().len(), 1);
}

#[tokio::test]
async fn failed_mutation_leaves_cache_untouched() {
    let mut session = session();
    session.refresh().await.unwrap();
    session.add(favorite("52772")).await.unwrap();

    session.store().fail_next("store offline");
    let err = session.add(favorite("99999")).await.unwrap_err();
    assert!(matches!(err, StoreError::Remote(_)));

    assert_eq!(session.favorites().len(), 1);
    assert!(session.is_favorite("52772", RecipeType::Api));
    assert!(!session.is_favorite("99999", RecipeType::Api));
}

#[tokio::test]
async fn failed_refetch_keeps_stale_cache() {
    let mut session = session();
    session.refresh().await.unwrap();
    session.add(favorite("52772")).await.unwrap();

    session.store().fail_next("store offline");
    let err = session.refresh().await.unwrap_err();
    assert!(matches!(err, StoreError::Remote(_)));

    // Stale but present: the failed fetch did not clear the cache.
    assert!(session.is_favorite("52772", RecipeType::Api));
}

#[tokio::test]
async fn mutations_require_a_signed_in_user() {
    let mut session = FavoritesSession::new(MemoryStore::new());

    let err = session.add(favorite("52772")).await.unwrap_err();
    assert!(matches!(err, StoreError::NotSignedIn));
    let err = session.refresh().await.unwrap_err();
    assert!(matches!(err, StoreError::NotSignedIn));
}

#[tokio::test]
async fn sign_out_clears_identity_and_cache() {
    let mut session = session();
    session.refresh().await.unwrap();
    session.add(favorite("52772")).await.unwrap();

    session.sign_out();

    assert!(session.user().is_none());
    assert!(!session.is_loaded());
    assert_eq!(
        session.membership("52772", RecipeType::Api),
        Membership::Unknown
    );
}

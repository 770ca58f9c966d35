use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}

/// Errors from the remote favorites/recipes store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Mutation attempted without a signed-in user. Detected before any
    /// network call is made.
    #[error("Not signed in")]
    NotSignedIn,

    /// The store rejected an insert that would duplicate an existing
    /// (user, recipe_id, recipe_type) row.
    #[error("Already favorited")]
    Duplicate,

    #[error("Record not found")]
    NotFound,

    #[error("Store request failed: {0}")]
    Remote(String),
}

/// Validation failures when finishing a recipe draft. Each check has its
/// own variant so callers can surface a field-specific message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Please enter a recipe title")]
    MissingTitle,

    #[error("Please add at least one ingredient")]
    NoIngredients,

    #[error("Please add at least one instruction")]
    NoInstructions,
}

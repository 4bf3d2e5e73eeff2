//! Recipe API trait and error types
//!
//! Defines the interface the rest of the app uses to reach the upstream
//! recipe service, independent of the HTTP client behind it.

use async_trait::async_trait;
use futures_util::future::join_all;
use std::collections::HashSet;
use std::fmt;

use super::types::Meal;

/// Error types for recipe API operations
#[derive(Debug, Clone)]
pub enum MealDbError {
    /// Request failed (network, timeout, etc.)
    RequestFailed(String),
    /// Upstream answered with a non-success status
    UpstreamStatus(String),
    /// Response body could not be decoded
    InvalidResponse(String),
}

impl fmt::Display for MealDbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealDbError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            MealDbError::UpstreamStatus(msg) => write!(f, "Upstream error: {}", msg),
            MealDbError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for MealDbError {}

/// The recipe service seen by the rest of the app
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// All recipes using an ingredient; empty when the upstream has no match
    async fn search_by_ingredient(&self, ingredient: &str) -> Result<Vec<Meal>, MealDbError>;

    /// Full detail for a single recipe, or None when the id is unknown upstream
    async fn lookup_by_id(&self, id: &str) -> Result<Option<Meal>, MealDbError>;

    /// One random recipe
    async fn random_meal(&self) -> Result<Meal, MealDbError>;

    /// Up to `count` random recipes, fetched concurrently.
    ///
    /// The upstream has no batch endpoint, so this joins `count` independent
    /// single-random requests. Failed fetches are dropped and repeated ids
    /// collapse onto their first occurrence, so the result may hold fewer
    /// than `count` meals. This operation itself never fails.
    async fn random_batch(&self, count: usize) -> Vec<Meal> {
        let results = join_all((0..count).map(|_| self.random_meal())).await;

        let mut seen = HashSet::new();
        let mut meals = Vec::new();
        for result in results {
            match result {
                Ok(meal) => {
                    if seen.insert(meal.id.clone()) {
                        meals.push(meal);
                    }
                }
                Err(e) => {
                    log::debug!("Dropping failed random fetch: {}", e);
                }
            }
        }
        meals
    }
}

//! View coordination for Recipe-Local
//!
//! Owns which collection renders (search results, suggestions, favorites)
//! and drives the pseudo-pagination loop. The upstream has no pagination
//! cursor, so "load more" appends random batches and a fixed ceiling decides
//! when to stop offering more.
//!
//! Nothing here cancels an in-flight fetch; exclusive access serializes the
//! operations instead. Overlapping fetches racing to update the results is a
//! known gap of the upstream behavior this mirrors.

use std::sync::Arc;

use crate::favorites::FavoritesStore;
use crate::mealdb::{Meal, MealDbError, RecipeApi};

/// A full page of search results; fewer means the upstream is exhausted
const SEARCH_PAGE_SIZE: usize = 20;

/// Recipes fetched per load-more round and for the initial suggestions
const SUGGESTED_BATCH: usize = 8;

/// Cumulative result count after which load-more is disabled
const RESULT_CEILING: usize = 40;

/// Which collection the page renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Search,
    Favorites,
}

/// The collection to render right now
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    /// Search results for the current query
    Results(Vec<Meal>),
    /// Suggested recipes, shown while there are no results
    Suggested(Vec<Meal>),
    /// The favorites collection
    Favorites(Vec<Meal>),
}

pub struct ViewCoordinator {
    api: Arc<dyn RecipeApi>,
    favorites: Arc<FavoritesStore>,
    mode: ViewMode,
    query: Option<String>,
    results: Vec<Meal>,
    suggested: Vec<Meal>,
    has_more: bool,
}

impl ViewCoordinator {
    pub fn new(api: Arc<dyn RecipeApi>, favorites: Arc<FavoritesStore>) -> Self {
        Self {
            api,
            favorites,
            mode: ViewMode::Search,
            query: None,
            results: Vec::new(),
            suggested: Vec::new(),
            has_more: true,
        }
    }

    /// Fill the suggestion set with a random batch. Never fails; a fetch
    /// problem just leaves the suggestions as they were.
    pub async fn load_suggestions(&mut self) {
        let meals = self.api.random_batch(SUGGESTED_BATCH).await;
        if meals.is_empty() {
            log::warn!("No suggested recipes could be loaded");
            return;
        }
        self.suggested = meals;
    }

    /// Search by ingredient and replace the result set.
    ///
    /// A blank term is ignored. The mode switches to search and the query
    /// updates before the fetch, matching how the page behaves; on failure
    /// the previous results stay visible and the error is the caller's to
    /// surface.
    pub async fn search(&mut self, term: &str) -> Result<(), MealDbError> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(());
        }

        self.mode = ViewMode::Search;
        self.query = Some(term.to_string());
        self.has_more = true;

        let meals = self.api.search_by_ingredient(term).await?;

        self.has_more = meals.len() == SEARCH_PAGE_SIZE;
        self.results = meals;
        Ok(())
    }

    /// Append another random batch to the results.
    ///
    /// Only does anything in search mode while more results are on offer.
    /// Returns how many recipes were appended; zero either means the guards
    /// declined or the whole batch happened to fail.
    pub async fn load_more(&mut self) -> usize {
        if self.mode != ViewMode::Search || !self.has_more {
            return 0;
        }

        let batch = self.api.random_batch(SUGGESTED_BATCH).await;
        let added = batch.len();
        self.results.extend(batch);

        if self.results.len() >= RESULT_CEILING {
            self.has_more = false;
        }

        added
    }

    /// Switch between the search and favorites views. The search results are
    /// kept as they are; switching back shows them unchanged.
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn results(&self) -> &[Meal] {
        &self.results
    }

    pub fn suggested(&self) -> &[Meal] {
        &self.suggested
    }

    /// The collection to render: favorites in favorites mode, otherwise the
    /// results, falling back to the suggestions while there are none
    pub fn listing(&self) -> Listing {
        match self.mode {
            ViewMode::Favorites => Listing::Favorites(self.favorites.all()),
            ViewMode::Search => {
                if self.results.is_empty() {
                    Listing::Suggested(self.suggested.clone())
                } else {
                    Listing::Results(self.results.clone())
                }
            }
        }
    }

    /// Find a recipe in whatever is currently loaded, favorites included
    pub fn find_loaded(&self, id: &str) -> Option<Meal> {
        self.results
            .iter()
            .chain(self.suggested.iter())
            .find(|m| m.id == id)
            .cloned()
            .or_else(|| self.favorites.all().into_iter().find(|m| m.id == id))
    }
}

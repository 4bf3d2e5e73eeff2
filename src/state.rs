// Application state wiring for Recipe-Local

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::database::DatabaseManager;
use crate::favorites::FavoritesStore;
use crate::mealdb::{MealDbClient, RecipeApi};

/// Entry key for the dismissed state of the informational banner
const ANNOUNCEMENT_CLOSED_KEY: &str = "announcement_closed";

/// Everything the shell needs, wired together
pub struct AppState {
    pub db: Arc<DatabaseManager>,
    pub favorites: Arc<FavoritesStore>,
    pub api: Arc<dyn RecipeApi>,
}

impl AppState {
    /// Wire the app against the platform data directory
    pub fn init() -> Result<Self> {
        Self::init_with_db_path(Self::default_data_dir().join("recipelocal.db"))
    }

    pub fn init_with_db_path(db_path: PathBuf) -> Result<Self> {
        let db = Arc::new(
            DatabaseManager::new(db_path).context("Database initialization failed")?,
        );
        let favorites = Arc::new(
            FavoritesStore::load(db.clone()).context("Failed to load favorites")?,
        );
        let api: Arc<dyn RecipeApi> = Arc::new(MealDbClient::with_default_config());

        Ok(Self { db, favorites, api })
    }

    /// Platform data directory for this app
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("recipe-local")
    }

    /// Whether the informational banner was dismissed (absent means no)
    pub fn announcement_dismissed(&self) -> Result<bool> {
        self.db.get_bool_entry(ANNOUNCEMENT_CLOSED_KEY, false)
    }

    /// Record the banner as dismissed
    pub fn dismiss_announcement(&self) -> Result<()> {
        self.db.set_bool_entry(ANNOUNCEMENT_CLOSED_KEY, true)
    }
}

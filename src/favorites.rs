// Favorites store for Recipe-Local
// Holds the favorited recipes in memory and mirrors every change into the
// entries table as a JSON array

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Context, Result};

use crate::database::DatabaseManager;
use crate::mealdb::Meal;

/// Entry key holding the JSON-encoded favorites array
const FAVORITES_KEY: &str = "favorites";

/// The user's favorited recipes.
///
/// The collection keeps at most one entry per recipe id. Reads are served
/// from memory; add and remove persist the full collection before returning.
pub struct FavoritesStore {
    db: Arc<DatabaseManager>,
    meals: Mutex<Vec<Meal>>,
}

impl FavoritesStore {
    /// Load the store from the database.
    ///
    /// A missing or unreadable stored value starts the store empty; only
    /// database access itself can fail here.
    pub fn load(db: Arc<DatabaseManager>) -> Result<Self> {
        let meals = match db.get_entry(FAVORITES_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<Meal>>(&raw) {
                Ok(meals) => meals,
                Err(e) => {
                    log::warn!("Stored favorites were unreadable, starting empty: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        log::info!("Loaded {} favorite(s)", meals.len());

        Ok(Self {
            db,
            meals: Mutex::new(meals),
        })
    }

    /// Add a recipe. An id that is already present is left untouched, but the
    /// collection is persisted either way.
    pub fn add(&self, meal: Meal) -> Result<()> {
        let mut meals = self.lock_meals()?;
        if !meals.iter().any(|m| m.id == meal.id) {
            meals.push(meal);
        }
        self.persist(&meals)
    }

    /// Remove every entry with the given id and persist the result
    pub fn remove(&self, id: &str) -> Result<()> {
        let mut meals = self.lock_meals()?;
        meals.retain(|m| m.id != id);
        self.persist(&meals)
    }

    /// Whether the id is currently favorited
    pub fn is_favorite(&self, id: &str) -> bool {
        self.meals
            .lock()
            .map(|meals| meals.iter().any(|m| m.id == id))
            .unwrap_or(false)
    }

    /// Snapshot of the current favorites
    pub fn all(&self) -> Vec<Meal> {
        self.meals
            .lock()
            .map(|meals| meals.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.meals.lock().map(|meals| meals.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock_meals(&self) -> Result<MutexGuard<'_, Vec<Meal>>> {
        self.meals
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to lock favorites: {}", e))
    }

    fn persist(&self, meals: &[Meal]) -> Result<()> {
        let raw = serde_json::to_string(meals).context("Failed to encode favorites")?;
        self.db.set_entry(FAVORITES_KEY, &raw, "json")
    }
}

// Recipe-Local - local recipe discovery backed by TheMealDB
//
// Components:
// - TheMealDB gateway (search by ingredient, lookup by id, random batches)
// - Favorites persisted in SQLite
// - View coordination: search/favorites modes and pseudo-pagination

pub mod database;
pub mod favorites;
pub mod mealdb;
pub mod state;
pub mod view;

pub use state::AppState;

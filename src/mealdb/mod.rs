// TheMealDB gateway for Recipe-Local
// Wire types, the RecipeApi trait, and the HTTP client behind it

pub mod api;
pub mod client;
pub mod types;

pub use api::{MealDbError, RecipeApi};
pub use client::{MealDbClient, MealDbConfig};
pub use types::{Meal, MealsEnvelope};

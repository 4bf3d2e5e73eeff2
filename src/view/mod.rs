// View layer for Recipe-Local
// Mode selection, pseudo-pagination, and the suggestion registry

pub mod coordinator;
pub mod suggestions;

pub use coordinator::{Listing, ViewCoordinator, ViewMode};
pub use suggestions::POPULAR_INGREDIENTS;

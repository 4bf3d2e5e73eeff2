// Database module for Recipe-Local
// Provides SQLite persistence for the favorites collection and app flags

pub mod manager;
pub mod migrations;
pub mod entries_repo;

pub use manager::DatabaseManager;

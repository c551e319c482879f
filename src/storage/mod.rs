//! Storage layer for the fantasy-hoops CLI
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Table replacement (singly or in a `WriteBatch`) and loads
//! - `merge`: Atomic replacement of Projected matchup rows

pub mod merge;
pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use merge::MergeSummary;
pub use models::*;
pub use queries::WriteBatch;
pub use schema::HoopsDatabase;

//! Command implementations for the fantasy-hoops CLI

pub mod common;
pub mod matchups;
pub mod project;
pub mod refresh;


pub use common::{format_pct, open_database, resolve_season, resolve_week};

//! Type-safe wrappers and enums for fantasy basketball data.

pub mod ids;
pub mod position;
pub mod time;

#[cfg(test)]
mod tests;

pub use ids::PlayerId;
pub use position::Position;
pub use time::{ScoringPeriod, Season, Week};

//! Error types for the fantasy-hoops CLI

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, HoopsError>;

#[derive(Error, Debug)]
pub enum HoopsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid season: {value}")]
    InvalidSeason { value: String },

    #[error("Unexpected {source_name} feed layout: {message}")]
    Feed {
        source_name: &'static str,
        message: String,
    },

    #[error("No season given and no game logs stored to infer one from")]
    MissingSeason,

    #[error("No matchup rows stored for season {season}")]
    NoMatchups { season: u16 },

    #[error("No matchup rows stored for season {season}, week {week}")]
    MissingPeriod { season: u16, week: u16 },

    #[error("Matchup rows for week {week} disagree on the scoring period bounds")]
    InconsistentPeriod { week: u16 },

    #[error("{} name(s) could not be matched across sources: {}", .mismatches.len(), .mismatches.join("; "))]
    JoinMismatch { mismatches: Vec<String> },

    #[error("Projected rows rejected: {message}")]
    MergeConsistency { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl From<anyhow::Error> for HoopsError {
    fn from(err: anyhow::Error) -> Self {
        let err = match err.downcast::<HoopsError>() {
            Ok(inner) => return inner,
            Err(err) => err,
        };
        match err.downcast::<rusqlite::Error>() {
            Ok(db_err) => HoopsError::Database(db_err),
            Err(err) => HoopsError::Storage {
                message: err.to_string(),
            },
        }
    }
}

impl HoopsError {
    pub(crate) fn feed(source_name: &'static str, message: impl Into<String>) -> Self {
        HoopsError::Feed {
            source_name,
            message: message.into(),
        }
    }
}

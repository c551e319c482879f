//! NBA data ingestion
//!
//! - `types`: schedule and stats feed layouts, decoded into storage rows
//! - `http`: fetching both feeds

pub mod http;
pub mod types;

pub use http::NbaClient;
pub use types::{decode_game_logs, decode_schedule};

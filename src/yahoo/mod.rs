//! Yahoo Fantasy data
//!
//! Only decoding lives here. Scoreboard and roster responses are fetched
//! outside this tool (Yahoo requires OAuth) and handed in as saved JSON.

pub mod types;

pub use types::{decode_roster, decode_scoreboard};

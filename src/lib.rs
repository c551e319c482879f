//! Fantasy Basketball Projection Library
//!
//! Projects the rest of a Yahoo head-to-head fantasy basketball week from
//! NBA schedules and player game logs, and stores the result next to the
//! platform-reported numbers.
//!
//! ## Features
//!
//! - **Data Refresh**: NBA schedule and player game logs over HTTP, Yahoo
//!   scoreboards and rosters from saved responses
//! - **Name Reconciliation**: One canonical spelling per team and player
//!   across sources, with an audit of names that still do not line up
//! - **Projection**: Rounded season averages times games left, summed per
//!   fantasy team
//! - **Database Storage**: SQLite tables for every input and an atomic
//!   merge of Projected matchup rows
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fantasy_hoops::{commands::project::*, storage::HoopsDatabase, Season, Week};
//!
//! # fn example() -> fantasy_hoops::Result<()> {
//! let mut db = HoopsDatabase::new()?;
//! let report = run_project(
//!     &mut db,
//!     &ProjectParams {
//!         season: Some(Season::new(2020)),
//!         week: Some(Week::new(11)),
//!         ..ProjectParams::default()
//!     },
//! )?;
//! for row in &report.projected {
//!     println!("{}: {:.1} pts", row.team_name, row.totals.pts);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a specific database file:
//! ```bash
//! export FANTASY_HOOPS_DB=~/hoops.db
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod nba;
pub mod projection;
pub mod storage;
pub mod yahoo;

// Re-export commonly used types
pub use cli::types::{PlayerId, Position, ScoringPeriod, Season, Week};
pub use error::{HoopsError, Result};

pub const DB_PATH_ENV_VAR: &str = "FANTASY_HOOPS_DB";

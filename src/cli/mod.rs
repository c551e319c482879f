//! CLI argument definitions and parsing.

pub mod types;

use crate::config::{GameLogSource, RefreshConfig, ScheduleSource};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{Season, Week};


/// Season and week selection shared by the reporting commands.
#[derive(Debug, Args)]
pub struct PeriodArgs {
    /// Season start year (e.g. 2020 for 2020-21). Defaults to the season
    /// most stored game logs belong to.
    #[clap(long, short)]
    pub season: Option<Season>,

    /// Fantasy week. Defaults to the latest week stored for the season.
    #[clap(long, short)]
    pub week: Option<Week>,
}

/// Datasets to refresh and where each comes from.
#[derive(Debug, Args)]
pub struct RefreshArgs {
    /// Season start year (e.g. 2020 for 2020-21).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Saved Yahoo scoreboard response to load as Actual matchup rows.
    #[clap(long)]
    pub matchups: Option<PathBuf>,

    /// Saved Yahoo roster responses (repeatable): `--rosters a.json --rosters b.json`.
    #[clap(long, num_args = 1..)]
    pub rosters: Vec<PathBuf>,

    /// Download the full NBA schedule.
    #[clap(long, conflicts_with = "schedule_file")]
    pub schedule: bool,

    /// Load the NBA schedule from a saved response instead.
    #[clap(long)]
    pub schedule_file: Option<PathBuf>,

    /// Download the season's player game logs.
    #[clap(long, conflicts_with_all = ["players_file", "update_players"])]
    pub players: bool,

    /// Load the season's player game logs from a saved response instead.
    #[clap(long, conflicts_with = "update_players")]
    pub players_file: Option<PathBuf>,

    /// Replace a single day's game logs instead of the whole season.
    #[clap(long)]
    pub update_players: bool,

    /// Day for `--update-players` (YYYY-MM-DD, default today).
    #[clap(long, requires = "update_players")]
    pub date: Option<NaiveDate>,
}

impl RefreshArgs {
    pub fn into_config(self) -> RefreshConfig {
        let schedule = match (self.schedule, self.schedule_file) {
            (_, Some(path)) => ScheduleSource::File(path),
            (true, None) => ScheduleSource::Fetch,
            (false, None) => ScheduleSource::Skip,
        };

        let game_logs = if self.update_players {
            GameLogSource::FetchDay(self.date.unwrap_or_else(|| Local::now().date_naive()))
        } else if let Some(path) = self.players_file {
            GameLogSource::File(path)
        } else if self.players {
            GameLogSource::FetchSeason
        } else {
            GameLogSource::Skip
        };

        RefreshConfig {
            season: self.season,
            matchups: self.matchups,
            rosters: self.rosters,
            schedule,
            game_logs,
        }
    }
}

#[derive(Debug, Parser)]
#[clap(
    name = "fantasy-hoops",
    about = "Rest-of-week projections for a Yahoo fantasy basketball league"
)]
pub struct Hoops {
    /// Debug-level logging for this crate (`RUST_LOG` takes precedence).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    /// Database file (or set `FANTASY_HOOPS_DB`).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reload stored tables from the NBA feeds and saved Yahoo responses.
    ///
    /// Everything requested is loaded before anything is written, so a
    /// failed download leaves the database as it was.
    Refresh {
        #[clap(flatten)]
        args: RefreshArgs,
    },

    /// Project the rest of a scoring week and store the Projected rows.
    Project {
        #[clap(flatten)]
        period: PeriodArgs,

        /// Fail on team or player names that do not line up across sources.
        #[clap(long)]
        strict: bool,

        /// Print the projection without writing it.
        #[clap(long)]
        dry_run: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show stored Actual and Projected matchup rows.
    Matchups {
        #[clap(flatten)]
        period: PeriodArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

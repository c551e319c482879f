//! Run-level configuration for the refresh step.

use crate::cli::types::Season;
use chrono::NaiveDate;
use std::path::PathBuf;

#[cfg(test)]
mod tests;

/// Where the NBA schedule comes from, if it is refreshed at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScheduleSource {
    #[default]
    Skip,
    Fetch,
    File(PathBuf),
}

/// How the player game-log table is refreshed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GameLogSource {
    #[default]
    Skip,
    /// Reload the whole season from stats.nba.com.
    FetchSeason,
    /// Reload the whole season from a saved `playergamelogs` response.
    File(PathBuf),
    /// Replace one day's rows only.
    FetchDay(NaiveDate),
}

/// Which tables to refresh and from where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshConfig {
    pub season: Season,
    /// Saved Yahoo scoreboard response.
    pub matchups: Option<PathBuf>,
    /// Saved Yahoo roster responses, one per fantasy team.
    pub rosters: Vec<PathBuf>,
    pub schedule: ScheduleSource,
    pub game_logs: GameLogSource,
}

impl RefreshConfig {
    /// A config that refreshes nothing.
    pub fn new(season: Season) -> Self {
        Self {
            season,
            matchups: None,
            rosters: Vec::new(),
            schedule: ScheduleSource::Skip,
            game_logs: GameLogSource::Skip,
        }
    }

    pub fn refresh_matchups(&self) -> bool {
        self.matchups.is_some()
    }

    pub fn refresh_rosters(&self) -> bool {
        !self.rosters.is_empty()
    }

    pub fn refresh_schedule(&self) -> bool {
        self.schedule != ScheduleSource::Skip
    }

    pub fn refresh_game_logs(&self) -> bool {
        self.game_logs != GameLogSource::Skip
    }

    /// Whether any table would be touched.
    pub fn is_empty(&self) -> bool {
        !(self.refresh_matchups()
            || self.refresh_rosters()
            || self.refresh_schedule()
            || self.refresh_game_logs())
    }

    /// Whether any enabled source needs the network.
    pub fn needs_network(&self) -> bool {
        self.schedule == ScheduleSource::Fetch
            || matches!(
                self.game_logs,
                GameLogSource::FetchSeason | GameLogSource::FetchDay(_)
            )
    }
}

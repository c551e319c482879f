//! Data models for the storage layer
//!
//! These are the normalized tables the projection pipeline consumes. Provider
//! JSON never reaches this layer; the `nba` and `yahoo` modules decode it into
//! these records first.

use crate::cli::types::{PlayerId, Position, ScoringPeriod, Season, Week};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Status of a scheduled NBA game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Scheduled,
    InProgress,
    Final,
}

impl GameStatus {
    /// Interpret the free-text status the NBA schedule feed carries, e.g.
    /// `"Final"`, `"Final/OT"`, `"3rd Qtr"`, `"Halftime"` or a tip-off time.
    pub fn from_feed_text(text: &str) -> Self {
        let text = text.trim();
        let lower = text.to_lowercase();
        if lower.starts_with("final") {
            GameStatus::Final
        } else if lower.contains("qtr")
            || lower.contains("half")
            || lower.starts_with("end of")
            || lower.starts_with("ot")
            || lower.contains(" ot")
        {
            GameStatus::InProgress
        } else {
            GameStatus::Scheduled
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, GameStatus::Final)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Scheduled => "Scheduled",
            GameStatus::InProgress => "InProgress",
            GameStatus::Final => "Final",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for GameStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Scheduled" => GameStatus::Scheduled,
            "InProgress" => GameStatus::InProgress,
            other => GameStatus::from_feed_text(other),
        })
    }
}

/// Injury designation as reported on a Yahoo roster.
///
/// Yahoo omits the status entirely for healthy players; that maps to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InjuryStatus {
    #[default]
    None,
    Out,
    DayToDay,
    GameTimeDecision,
    Injured,
    Suspended,
    NotActive,
    Other(String),
}

impl InjuryStatus {
    /// Parse a Yahoo status code (`O`, `DTD`, `GTD`, `INJ`, `SUSP`, `NA`).
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "" | "NONE" => InjuryStatus::None,
            "O" | "OUT" => InjuryStatus::Out,
            "DTD" => InjuryStatus::DayToDay,
            "GTD" => InjuryStatus::GameTimeDecision,
            "INJ" => InjuryStatus::Injured,
            "SUSP" => InjuryStatus::Suspended,
            "NA" => InjuryStatus::NotActive,
            _ => InjuryStatus::Other(code.trim().to_string()),
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, InjuryStatus::None)
    }
}

impl fmt::Display for InjuryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InjuryStatus::None => "NONE",
            InjuryStatus::Out => "O",
            InjuryStatus::DayToDay => "DTD",
            InjuryStatus::GameTimeDecision => "GTD",
            InjuryStatus::Injured => "INJ",
            InjuryStatus::Suspended => "SUSP",
            InjuryStatus::NotActive => "NA",
            InjuryStatus::Other(code) => code,
        };
        write!(f, "{}", s)
    }
}

/// Whether a matchup row holds platform-reported or computed numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatType {
    Actual,
    Projected,
}

impl StatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatType::Actual => "Actual",
            StatType::Projected => "Projected",
        }
    }
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Actual" => Ok(StatType::Actual),
            "Projected" => Ok(StatType::Projected),
            other => Err(format!("unknown stat type: {}", other)),
        }
    }
}

/// One game on the NBA schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub game_id: String,
    pub game_date: NaiveDate,
    pub status: GameStatus,
    pub home_team_name: String,
    pub away_team_name: String,
}

impl ScheduleEntry {
    pub fn involves(&self, team: &str) -> bool {
        self.home_team_name == team || self.away_team_name == team
    }
}

/// One rostered player on a fantasy team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub owning_fantasy_team: String,
    pub player_name: String,
    pub nba_team_name: String,
    pub eligible_positions: BTreeSet<Position>,
    pub injury_status: InjuryStatus,
}

/// Raw counting stats from one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxScore {
    pub fgm: u32,
    pub fga: u32,
    pub ftm: u32,
    pub fta: u32,
    pub fg3m: u32,
    pub pts: u32,
    pub reb: u32,
    pub ast: u32,
    pub stl: u32,
    pub blk: u32,
    pub tov: u32,
}

/// One player's line from one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameLogRow {
    pub season_label: String,
    pub player_id: PlayerId,
    pub player_name: String,
    pub nba_team_name: String,
    pub game_id: String,
    pub game_date: NaiveDate,
    pub stats: BoxScore,
}

/// Team totals for a matchup row. Percentages are `None` when there were
/// no attempts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchupTotals {
    pub fgm: f64,
    pub fga: f64,
    pub fg_pct: Option<f64>,
    pub ftm: f64,
    pub fta: f64,
    pub ft_pct: Option<f64>,
    pub fg3m: f64,
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
    pub stl: f64,
    pub blk: f64,
    pub tov: f64,
}

/// One fantasy team's side of a weekly matchup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupRow {
    pub season: Season,
    pub week: Week,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub matchup_number: u32,
    pub status: String,
    pub is_playoffs: bool,
    pub is_consolation: bool,
    pub team_name: String,
    pub team_key: String,
    pub totals: MatchupTotals,
    pub stat_type: StatType,
}

impl MatchupRow {
    pub fn period(&self) -> ScoringPeriod {
        ScoringPeriod::new(self.week, self.week_start, self.week_end)
    }

    /// Same matchup metadata, new numbers.
    pub fn with_totals(&self, totals: MatchupTotals, stat_type: StatType) -> Self {
        Self {
            totals,
            stat_type,
            ..self.clone()
        }
    }
}

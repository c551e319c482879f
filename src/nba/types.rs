//! Wire types for the NBA schedule and stats feeds, and their conversion
//! into storage rows.

use crate::cli::types::PlayerId;
use crate::error::{HoopsError, Result};
use crate::storage::models::{BoxScore, GameLogRow, GameStatus, ScheduleEntry};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;


/// Root of `00_full_schedule.json`: one block per month.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleFeed {
    #[serde(default)]
    pub lscd: Vec<ScheduleMonth>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleMonth {
    pub mscd: MonthSchedule,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonthSchedule {
    #[serde(default)]
    pub mon: Option<String>,
    #[serde(default)]
    pub g: Vec<FeedGame>,
}

/// One game. `h` and `v` are the home and visiting team blocks.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedGame {
    pub gid: String,
    pub gdte: String,
    #[serde(default)]
    pub stt: String,
    #[serde(default)]
    pub h: Option<FeedTeam>,
    #[serde(default)]
    pub v: Option<FeedTeam>,
}

/// Team block: abbreviation, city and nickname.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedTeam {
    #[serde(default)]
    pub ta: String,
    #[serde(default)]
    pub tc: String,
    #[serde(default)]
    pub tn: String,
}

impl FeedTeam {
    /// City plus nickname, e.g. `Boston Celtics`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.tc.trim(), self.tn.trim())
    }
}

impl ScheduleFeed {
    /// Flatten every month into schedule rows. Games missing a team block
    /// (placeholder entries the feed sometimes carries) are skipped.
    pub fn into_entries(self) -> Result<Vec<ScheduleEntry>> {
        let mut entries = Vec::new();
        for game in self.lscd.into_iter().flat_map(|m| m.mscd.g) {
            let (Some(home), Some(away)) = (&game.h, &game.v) else {
                debug!(game_id = %game.gid, "skipping schedule entry without both teams");
                continue;
            };
            entries.push(ScheduleEntry {
                game_date: NaiveDate::parse_from_str(&game.gdte, "%Y-%m-%d")?,
                status: GameStatus::from_feed_text(&game.stt),
                home_team_name: home.full_name(),
                away_team_name: away.full_name(),
                game_id: game.gid,
            });
        }
        Ok(entries)
    }
}

/// Decode a saved or fetched schedule document.
pub fn decode_schedule(json: &str) -> Result<Vec<ScheduleEntry>> {
    let feed: ScheduleFeed = serde_json::from_str(json)?;
    feed.into_entries()
}

/// Root of a `stats.nba.com` response.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsFeed {
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

/// A header row plus positional data rows.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

const GAME_LOG_SET: &str = "PlayerGameLogs";

/// Column lookup by header name, so column order changes in the feed don't
/// silently shift stats.
struct Columns(HashMap<String, usize>);

impl Columns {
    fn new(headers: &[String]) -> Self {
        Self(
            headers
                .iter()
                .enumerate()
                .map(|(i, h)| (h.to_uppercase(), i))
                .collect(),
        )
    }

    fn index(&self, name: &'static str) -> Result<usize> {
        self.0
            .get(name)
            .copied()
            .ok_or_else(|| HoopsError::feed("NBA stats", format!("missing column {}", name)))
    }

    fn cell<'a>(&self, row: &'a [Value], name: &'static str) -> Result<&'a Value> {
        let i = self.index(name)?;
        row.get(i)
            .ok_or_else(|| HoopsError::feed("NBA stats", format!("short row, no {}", name)))
    }

    fn text(&self, row: &[Value], name: &'static str) -> Result<String> {
        match self.cell(row, name)? {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(HoopsError::feed(
                "NBA stats",
                format!("{} is not text: {}", name, other),
            )),
        }
    }

    /// Counting stat; null means the player did not record one.
    fn count(&self, row: &[Value], name: &'static str) -> Result<u32> {
        let value = self.cell(row, name)?;
        if value.is_null() {
            return Ok(0);
        }
        value
            .as_u64()
            .or_else(|| value.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64))
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| {
                HoopsError::feed("NBA stats", format!("{} is not a count: {}", name, value))
            })
    }
}

impl StatsFeed {
    /// Decode the player game-log table into rows.
    pub fn into_game_logs(self) -> Result<Vec<GameLogRow>> {
        let mut sets = self.result_sets;
        let index = sets
            .iter()
            .position(|s| s.name == GAME_LOG_SET)
            .unwrap_or(0);
        if index >= sets.len() {
            return Err(HoopsError::feed("NBA stats", "response has no result sets"));
        }
        let set = sets.swap_remove(index);

        let cols = Columns::new(&set.headers);
        let mut rows = Vec::with_capacity(set.row_set.len());
        for row in &set.row_set {
            let player_id = match cols.cell(row, "PLAYER_ID")? {
                Value::Number(n) => n.as_u64(),
                Value::String(s) => s.parse().ok(),
                _ => None,
            }
            .ok_or_else(|| HoopsError::feed("NBA stats", "PLAYER_ID is not an id"))?;

            let raw_date = cols.text(row, "GAME_DATE")?;
            // `2021-01-05T00:00:00`
            let day = raw_date.get(..10).unwrap_or(&raw_date);
            let game_date = NaiveDate::parse_from_str(day, "%Y-%m-%d")?;

            rows.push(GameLogRow {
                season_label: cols.text(row, "SEASON_YEAR")?,
                player_id: PlayerId::new(player_id),
                player_name: cols.text(row, "PLAYER_NAME")?,
                nba_team_name: cols.text(row, "TEAM_NAME")?,
                game_id: cols.text(row, "GAME_ID")?,
                game_date,
                stats: BoxScore {
                    fgm: cols.count(row, "FGM")?,
                    fga: cols.count(row, "FGA")?,
                    ftm: cols.count(row, "FTM")?,
                    fta: cols.count(row, "FTA")?,
                    fg3m: cols.count(row, "FG3M")?,
                    pts: cols.count(row, "PTS")?,
                    reb: cols.count(row, "REB")?,
                    ast: cols.count(row, "AST")?,
                    stl: cols.count(row, "STL")?,
                    blk: cols.count(row, "BLK")?,
                    tov: cols.count(row, "TOV")?,
                },
            });
        }
        Ok(rows)
    }
}

/// Decode a saved or fetched `playergamelogs` document.
pub fn decode_game_logs(json: &str) -> Result<Vec<GameLogRow>> {
    let feed: StatsFeed = serde_json::from_str(json)?;
    feed.into_game_logs()
}

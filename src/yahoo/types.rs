//! Decoding of saved Yahoo Fantasy API responses.
//!
//! Yahoo's JSON is irregular: objects keyed `"0"`, `"1"`, ... with a
//! `"count"` sibling stand in for arrays, and entity metadata is an array
//! of single-key objects (sometimes with empty arrays mixed in). Decoding
//! therefore walks `serde_json::Value` with the helpers below rather than
//! fixed structs.

use crate::cli::types::{Position, Season, Week};
use crate::error::{HoopsError, Result};
use crate::storage::models::{InjuryStatus, MatchupRow, MatchupTotals, RosterEntry, StatType};
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::{debug, warn};


const SOURCE: &str = "Yahoo";

/// Yahoo stat ids of the nine-category league this pipeline scores.
pub mod stat_id {
    pub const FG_MADE_ATTEMPTED: &str = "9004003";
    pub const FG_PCT: &str = "5";
    pub const FT_MADE_ATTEMPTED: &str = "9007006";
    pub const FT_PCT: &str = "8";
    pub const THREES_MADE: &str = "10";
    pub const POINTS: &str = "12";
    pub const REBOUNDS: &str = "15";
    pub const ASSISTS: &str = "16";
    pub const STEALS: &str = "17";
    pub const BLOCKS: &str = "18";
    pub const TURNOVERS: &str = "19";
}

/// First object carrying `key`, searching an array of metadata fragments
/// (nested arrays included).
pub fn find_key<'a>(fragments: &'a Value, key: &str) -> Option<&'a Value> {
    match fragments {
        Value::Object(map) => map.get(key),
        Value::Array(items) => items.iter().find_map(|item| find_key(item, key)),
        _ => None,
    }
}

/// The `"0"`..`"count-1"` children of a Yahoo counted collection, with
/// their position.
fn counted<'a>(collection: &'a Value, what: &str) -> Result<Vec<(usize, &'a Value)>> {
    let count = match collection.get("count") {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    }
    .ok_or_else(|| HoopsError::feed(SOURCE, format!("{} has no count", what)))?;

    (0..count as usize)
        .map(|i| {
            collection
                .get(i.to_string())
                .map(|child| (i, child))
                .ok_or_else(|| HoopsError::feed(SOURCE, format!("{} is missing entry {}", what, i)))
        })
        .collect()
}

fn text<'a>(value: Option<&'a Value>, what: &str) -> Result<&'a str> {
    value
        .and_then(Value::as_str)
        .ok_or_else(|| HoopsError::feed(SOURCE, format!("missing {}", what)))
}

/// Integers arrive as strings (`"11"`) or numbers.
fn integer(value: Option<&Value>, what: &str) -> Result<u64> {
    match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
    .ok_or_else(|| HoopsError::feed(SOURCE, format!("{} is not an integer", what)))
}

fn flag(value: Option<&Value>, what: &str) -> Result<bool> {
    match value {
        Some(Value::Bool(b)) => Ok(*b),
        other => Ok(integer(other, what)? != 0),
    }
}

fn date(value: Option<&Value>, what: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(text(value, what)?, "%Y-%m-%d")?)
}

/// A blank or dash stat is zero for counts.
fn stat_count(raw: &str) -> Result<f64> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "-" {
        return Ok(0.0);
    }
    raw.parse::<f64>()
        .map_err(|_| HoopsError::feed(SOURCE, format!("stat value {:?} is not a number", raw)))
}

/// A blank or dash percentage is unknown, not zero.
fn stat_pct(raw: &str) -> Result<Option<f64>> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "-" {
        return Ok(None);
    }
    raw.parse::<f64>()
        .map(Some)
        .map_err(|_| HoopsError::feed(SOURCE, format!("percentage {:?} is not a number", raw)))
}

/// Split `"made/attempted"`.
fn made_attempted(raw: &str) -> Result<(f64, f64)> {
    match raw.split_once('/') {
        Some((made, attempted)) => Ok((stat_count(made)?, stat_count(attempted)?)),
        None if raw.trim().is_empty() || raw.trim() == "-" => Ok((0.0, 0.0)),
        None => Err(HoopsError::feed(
            SOURCE,
            format!("expected made/attempted, got {:?}", raw),
        )),
    }
}

fn stat_value(stat: &Value) -> String {
    match stat.get("value") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Fill team totals from a `team_stats.stats` list, keyed by stat id.
/// Unknown stat ids are ignored; leagues often track extra display stats.
pub fn decode_team_stats(stats: &Value) -> Result<MatchupTotals> {
    let entries = stats
        .as_array()
        .ok_or_else(|| HoopsError::feed(SOURCE, "team_stats.stats is not a list"))?;

    let mut totals = MatchupTotals::default();
    for entry in entries {
        let Some(stat) = entry.get("stat") else {
            continue;
        };
        let id = match stat.get("stat_id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => continue,
        };
        let value = stat_value(stat);

        match id.as_str() {
            stat_id::FG_MADE_ATTEMPTED => {
                (totals.fgm, totals.fga) = made_attempted(&value)?;
            }
            stat_id::FG_PCT => totals.fg_pct = stat_pct(&value)?,
            stat_id::FT_MADE_ATTEMPTED => {
                (totals.ftm, totals.fta) = made_attempted(&value)?;
            }
            stat_id::FT_PCT => totals.ft_pct = stat_pct(&value)?,
            stat_id::THREES_MADE => totals.fg3m = stat_count(&value)?,
            stat_id::POINTS => totals.pts = stat_count(&value)?,
            stat_id::REBOUNDS => totals.reb = stat_count(&value)?,
            stat_id::ASSISTS => totals.ast = stat_count(&value)?,
            stat_id::STEALS => totals.stl = stat_count(&value)?,
            stat_id::BLOCKS => totals.blk = stat_count(&value)?,
            stat_id::TURNOVERS => totals.tov = stat_count(&value)?,
            other => debug!(stat_id = other, "ignoring untracked stat"),
        }
    }
    Ok(totals)
}

/// Decode a `league/{key}/scoreboard` response into Actual matchup rows,
/// two per matchup, numbered from 1 in the order Yahoo lists them.
pub fn decode_scoreboard(json: &str) -> Result<Vec<MatchupRow>> {
    let root: Value = serde_json::from_str(json)?;
    let league = root
        .pointer("/fantasy_content/league")
        .ok_or_else(|| HoopsError::feed(SOURCE, "missing fantasy_content.league"))?;

    let season = Season::new(
        u16::try_from(integer(find_key(league, "season"), "league season")?)
            .map_err(|_| HoopsError::feed(SOURCE, "league season out of range"))?,
    );
    let scoreboard = find_key(league, "scoreboard")
        .ok_or_else(|| HoopsError::feed(SOURCE, "missing scoreboard"))?;
    let matchups = scoreboard
        .pointer("/0/matchups")
        .ok_or_else(|| HoopsError::feed(SOURCE, "missing scoreboard matchups"))?;

    let mut rows = Vec::new();
    for (i, entry) in counted(matchups, "matchups")? {
        let matchup = entry
            .get("matchup")
            .ok_or_else(|| HoopsError::feed(SOURCE, format!("matchup {} has no body", i)))?;

        let week = Week::new(
            u16::try_from(integer(matchup.get("week"), "matchup week")?)
                .map_err(|_| HoopsError::feed(SOURCE, "matchup week out of range"))?,
        );
        let week_start = date(matchup.get("week_start"), "week_start")?;
        let week_end = date(matchup.get("week_end"), "week_end")?;
        let status = text(matchup.get("status"), "matchup status")?.to_string();
        let is_playoffs = flag(matchup.get("is_playoffs"), "is_playoffs")?;
        let is_consolation = flag(matchup.get("is_consolation"), "is_consolation")?;

        let teams = matchup
            .pointer("/0/teams")
            .ok_or_else(|| HoopsError::feed(SOURCE, format!("matchup {} has no teams", i)))?;
        for (_, team_entry) in counted(teams, "matchup teams")? {
            let team = team_entry
                .get("team")
                .ok_or_else(|| HoopsError::feed(SOURCE, "team entry has no body"))?;
            let meta = team
                .get(0)
                .ok_or_else(|| HoopsError::feed(SOURCE, "team has no metadata"))?;
            let stats = team
                .pointer("/1/team_stats/stats")
                .ok_or_else(|| HoopsError::feed(SOURCE, "team has no team_stats"))?;

            rows.push(MatchupRow {
                season,
                week,
                week_start,
                week_end,
                matchup_number: (i + 1) as u32,
                status: status.clone(),
                is_playoffs,
                is_consolation,
                team_name: text(find_key(meta, "name"), "team name")?.to_string(),
                team_key: text(find_key(meta, "team_key"), "team_key")?.to_string(),
                totals: decode_team_stats(stats)?,
                stat_type: StatType::Actual,
            });
        }
    }
    Ok(rows)
}

/// Decode a `team/{key}/roster/players` response into roster entries owned
/// by that team.
pub fn decode_roster(json: &str) -> Result<Vec<RosterEntry>> {
    let root: Value = serde_json::from_str(json)?;
    let team = root
        .pointer("/fantasy_content/team")
        .ok_or_else(|| HoopsError::feed(SOURCE, "missing fantasy_content.team"))?;

    let meta = team
        .get(0)
        .ok_or_else(|| HoopsError::feed(SOURCE, "team has no metadata"))?;
    let owner = text(find_key(meta, "name"), "team name")?.to_string();

    let players = team
        .pointer("/1/roster/0/players")
        .ok_or_else(|| HoopsError::feed(SOURCE, "missing roster players"))?;

    let mut entries = Vec::new();
    for (_, entry) in counted(players, "roster players")? {
        let fragments = entry
            .pointer("/player/0")
            .ok_or_else(|| HoopsError::feed(SOURCE, "player has no metadata"))?;

        let player_name = text(
            find_key(fragments, "name").and_then(|n| n.get("full")),
            "player full name",
        )?;
        let nba_team_name = text(
            find_key(fragments, "editorial_team_full_name"),
            "editorial_team_full_name",
        )?;

        let eligible_positions = find_key(fragments, "eligible_positions")
            .map(parse_eligible_positions)
            .unwrap_or_default();

        let injury_status = find_key(fragments, "status")
            .and_then(Value::as_str)
            .map(InjuryStatus::from_code)
            .unwrap_or_default();

        entries.push(RosterEntry {
            owning_fantasy_team: owner.clone(),
            player_name: player_name.to_string(),
            nba_team_name: nba_team_name.to_string(),
            eligible_positions,
            injury_status,
        });
    }
    debug!(team = %owner, players = entries.len(), "roster decoded");
    Ok(entries)
}

/// `[{"position": "PG"}, ...]`; a lone object is accepted too.
fn parse_eligible_positions(value: &Value) -> BTreeSet<Position> {
    let items: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };
    items
        .into_iter()
        .filter_map(|item| item.get("position").and_then(Value::as_str))
        .filter_map(|raw| match raw.parse::<Position>() {
            Ok(position) => Some(position),
            Err(e) => {
                warn!("skipping eligible position: {}", e);
                None
            }
        })
        .collect()
}

//! Canonical team and player names shared by the Yahoo and NBA sources.
//!
//! Yahoo and the NBA feeds disagree on a handful of spellings ("LA Clippers"
//! vs "Los Angeles Clippers", "PJ Washington" vs "P.J. Washington"). Every
//! name used as a join key goes through a [`NameBook`] first.

use crate::storage::models::{GameLogRow, RosterEntry, ScheduleEntry};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Team spellings that differ from the canonical franchise name.
const TEAM_ALIASES: &[(&str, &str)] = &[("LA Clippers", "Los Angeles Clippers")];

/// Player spellings that differ between Yahoo and the NBA stats feed.
const PLAYER_ALIASES: &[(&str, &str)] = &[("PJ Washington", "P.J. Washington")];

/// Alias lookup for team and player names.
#[derive(Debug, Clone)]
pub struct NameBook {
    teams: HashMap<String, String>,
    players: HashMap<String, String>,
}

impl Default for NameBook {
    fn default() -> Self {
        let mut book = Self::empty();
        for (alias, canonical) in TEAM_ALIASES {
            book = book.with_team_alias(alias, canonical);
        }
        for (alias, canonical) in PLAYER_ALIASES {
            book = book.with_player_alias(alias, canonical);
        }
        book
    }
}

impl NameBook {
    /// A book with no aliases; only whitespace normalization applies.
    pub fn empty() -> Self {
        Self {
            teams: HashMap::new(),
            players: HashMap::new(),
        }
    }

    pub fn with_team_alias(mut self, alias: &str, canonical: &str) -> Self {
        self.teams.insert(normalize(alias), normalize(canonical));
        self
    }

    pub fn with_player_alias(mut self, alias: &str, canonical: &str) -> Self {
        self.players.insert(normalize(alias), normalize(canonical));
        self
    }

    pub fn canonical_team(&self, raw: &str) -> String {
        lookup(&self.teams, raw)
    }

    pub fn canonical_player(&self, raw: &str) -> String {
        lookup(&self.players, raw)
    }

    pub fn schedule(&self, entries: &[ScheduleEntry]) -> Vec<ScheduleEntry> {
        entries
            .iter()
            .map(|e| ScheduleEntry {
                home_team_name: self.canonical_team(&e.home_team_name),
                away_team_name: self.canonical_team(&e.away_team_name),
                ..e.clone()
            })
            .collect()
    }

    pub fn rosters(&self, entries: &[RosterEntry]) -> Vec<RosterEntry> {
        entries
            .iter()
            .map(|e| RosterEntry {
                owning_fantasy_team: normalize(&e.owning_fantasy_team),
                player_name: self.canonical_player(&e.player_name),
                nba_team_name: self.canonical_team(&e.nba_team_name),
                ..e.clone()
            })
            .collect()
    }

    pub fn game_logs(&self, rows: &[GameLogRow]) -> Vec<GameLogRow> {
        rows.iter()
            .map(|r| GameLogRow {
                player_name: self.canonical_player(&r.player_name),
                nba_team_name: self.canonical_team(&r.nba_team_name),
                ..r.clone()
            })
            .collect()
    }
}

/// Trim and collapse internal whitespace runs to one space.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn lookup(aliases: &HashMap<String, String>, raw: &str) -> String {
    let key = normalize(raw);
    aliases.get(&key).cloned().unwrap_or(key)
}

/// Which table a name was seen in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Source {
    Roster,
    Schedule,
    GameLogs,
    Matchups,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Source::Roster => "roster",
            Source::Schedule => "schedule",
            Source::GameLogs => "game logs",
            Source::Matchups => "matchups",
        };
        write!(f, "{}", s)
    }
}

/// A name that did not line up across sources after reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Anomaly {
    /// A team seen in `seen_in` that `missing_from` never mentions.
    UnknownTeam {
        team: String,
        seen_in: Source,
        missing_from: Source,
    },
    /// A rostered player with no game logs this season. Projected as zero.
    MissingAverages { player: String, nba_team: String },
    /// A roster owner with no Actual matchup row to attach a projection to.
    UnmatchedFantasyTeam { fantasy_team: String },
}

impl Anomaly {
    /// Whether this anomaly means a projection total may be wrong rather
    /// than merely zero for an explainable reason.
    pub fn is_join_mismatch(&self) -> bool {
        !matches!(self, Anomaly::MissingAverages { .. })
    }
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::UnknownTeam {
                team,
                seen_in,
                missing_from,
            } => write!(
                f,
                "team '{}' appears in {} but not in {}",
                team, seen_in, missing_from
            ),
            Anomaly::MissingAverages { player, nba_team } => write!(
                f,
                "player '{}' ({}) has no game logs this season",
                player, nba_team
            ),
            Anomaly::UnmatchedFantasyTeam { fantasy_team } => write!(
                f,
                "fantasy team '{}' has no matchup row this week",
                fantasy_team
            ),
        }
    }
}

/// Check that every team the roster and game logs mention is on the
/// schedule, and every roster team appears in the game logs.
///
/// Expects names already passed through the same [`NameBook`].
pub fn audit_teams(
    schedule: &[ScheduleEntry],
    rosters: &[RosterEntry],
    logs: &[GameLogRow],
) -> Vec<Anomaly> {
    let scheduled: BTreeSet<&str> = schedule
        .iter()
        .flat_map(|e| [e.home_team_name.as_str(), e.away_team_name.as_str()])
        .collect();
    let logged: BTreeSet<&str> = logs.iter().map(|r| r.nba_team_name.as_str()).collect();
    let rostered: BTreeSet<&str> = rosters.iter().map(|r| r.nba_team_name.as_str()).collect();

    let mut anomalies = Vec::new();
    for team in &rostered {
        if !scheduled.contains(team) {
            anomalies.push(Anomaly::UnknownTeam {
                team: team.to_string(),
                seen_in: Source::Roster,
                missing_from: Source::Schedule,
            });
        }
        if !logged.contains(team) {
            anomalies.push(Anomaly::UnknownTeam {
                team: team.to_string(),
                seen_in: Source::Roster,
                missing_from: Source::GameLogs,
            });
        }
    }
    for team in &logged {
        if !scheduled.contains(team) {
            anomalies.push(Anomaly::UnknownTeam {
                team: team.to_string(),
                seen_in: Source::GameLogs,
                missing_from: Source::Schedule,
            });
        }
    }
    anomalies
}

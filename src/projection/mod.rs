//! Weekly projection pipeline
//!
//! Stages run strictly in order, each on the previous stage's output:
//! - `names`: reconcile team and player spellings across sources
//! - `schedule`: games left per team in the scoring period
//! - `averages`: season means per player
//! - `engine`: per-player projected stat lines
//! - `rollup`: per-fantasy-team Projected matchup rows
//!
//! Persisting the result is the storage layer's `replace_projected_rows`.

pub mod averages;
pub mod engine;
pub mod names;
pub mod rollup;
pub mod schedule;
pub mod stats;


pub use engine::ProjectionRow;
pub use names::{Anomaly, NameBook};
pub use stats::{Stat, StatLine};

use crate::cli::types::ScoringPeriod;
use crate::error::{HoopsError, Result};
use crate::storage::models::{GameLogRow, MatchupRow, RosterEntry, ScheduleEntry, StatType};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Tables and period the pipeline runs over.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionInputs<'a> {
    pub schedule: &'a [ScheduleEntry],
    pub rosters: &'a [RosterEntry],
    pub game_logs: &'a [GameLogRow],
    /// Actual matchup rows of the period being projected.
    pub actual: &'a [MatchupRow],
    pub season_label: &'a str,
    pub period: ScoringPeriod,
}

/// Run-level switches.
#[derive(Debug, Clone, Default)]
pub struct ProjectionOptions {
    /// Abort on join mismatches instead of reporting them as warnings.
    pub strict: bool,
    pub names: NameBook,
}

/// Everything one projection run produces.
#[derive(Debug, Clone)]
pub struct ProjectionOutput {
    pub players: Vec<ProjectionRow>,
    pub projected: Vec<MatchupRow>,
    pub anomalies: Vec<Anomaly>,
}

impl ProjectionOutput {
    pub fn join_mismatches(&self) -> impl Iterator<Item = &Anomaly> {
        self.anomalies.iter().filter(|a| a.is_join_mismatch())
    }
}

/// Reconcile, project and roll up. Pure: nothing is read or written outside
/// the given tables.
pub fn run_projection(
    inputs: ProjectionInputs<'_>,
    options: &ProjectionOptions,
) -> Result<ProjectionOutput> {
    let book = &options.names;
    let schedule = book.schedule(inputs.schedule);
    let rosters = book.rosters(inputs.rosters);
    let game_logs = book.game_logs(inputs.game_logs);

    let mut anomalies = names::audit_teams(&schedule, &rosters, &game_logs);

    let remaining = schedule::remaining_games_by_team(&schedule, &inputs.period);
    debug!(teams = remaining.len(), "remaining games computed");

    let averages = averages::season_averages(&game_logs, inputs.season_label);
    debug!(players = averages.len(), season = inputs.season_label, "averages computed");

    let (players, missing) =
        engine::project_players(&rosters, &remaining, &averages, inputs.season_label);
    anomalies.extend(missing);

    let actual: Vec<MatchupRow> = inputs
        .actual
        .iter()
        .filter(|row| row.stat_type == StatType::Actual && row.week == inputs.period.week)
        .cloned()
        .collect();
    let (projected, unmatched) = rollup::rollup(&actual, &players);
    anomalies.extend(unmatched);

    anomalies.sort();
    anomalies.dedup();
    for anomaly in &anomalies {
        warn!("{}", anomaly);
    }

    let output = ProjectionOutput {
        players,
        projected,
        anomalies,
    };

    if options.strict {
        let mismatches: Vec<String> = output.join_mismatches().map(|a| a.to_string()).collect();
        if !mismatches.is_empty() {
            return Err(HoopsError::JoinMismatch { mismatches });
        }
    }

    Ok(output)
}

/// Reject a projected set that would break the one-Projected-row-per-team
/// rule or that has no Actual row to sit beside.
pub fn validate_projected(projected: &[MatchupRow], actual: &[MatchupRow]) -> Result<()> {
    let actual_keys: BTreeSet<(u32, &str)> = actual
        .iter()
        .filter(|a| a.stat_type == StatType::Actual)
        .map(|a| (a.matchup_number, a.team_key.as_str()))
        .collect();

    let mut seen = BTreeSet::new();
    for row in projected {
        let key = (row.matchup_number, row.team_key.as_str());
        if row.stat_type != StatType::Projected {
            return Err(HoopsError::MergeConsistency {
                message: format!("row for {} is not tagged Projected", row.team_key),
            });
        }
        if !seen.insert(key) {
            return Err(HoopsError::MergeConsistency {
                message: format!(
                    "duplicate projection for matchup {} team {}",
                    row.matchup_number, row.team_key
                ),
            });
        }
        if !actual_keys.contains(&key) {
            return Err(HoopsError::MergeConsistency {
                message: format!(
                    "no Actual row for matchup {} team {}",
                    row.matchup_number, row.team_key
                ),
            });
        }
    }
    Ok(())
}

/// The scoring period all Actual rows of a week agree on.
pub fn period_from_matchups(actual: &[MatchupRow]) -> Option<Result<ScoringPeriod>> {
    let first = actual.first()?.period();
    if actual.iter().any(|row| row.period() != first) {
        return Some(Err(HoopsError::InconsistentPeriod {
            week: first.week.as_u16(),
        }));
    }
    Some(Ok(first))
}

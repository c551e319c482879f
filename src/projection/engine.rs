//! Per-player projections: rounded season average × games left.

use super::averages::PlayerAverages;
use super::names::Anomaly;
use super::stats::StatLine;
use crate::storage::models::{InjuryStatus, RosterEntry};
use serde::Serialize;
use std::collections::BTreeMap;

/// One rostered player's projected output for the rest of the period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionRow {
    pub owning_fantasy_team: String,
    pub season_label: String,
    pub player_name: String,
    pub nba_team_name: String,
    pub injury_status: InjuryStatus,
    pub remaining_games: u32,
    pub has_averages: bool,
    pub stats: StatLine,
}

/// Project every roster entry. Each entry yields exactly one row: injured
/// players get zero games, players without averages get a zero line.
pub fn project_players(
    rosters: &[RosterEntry],
    remaining_by_team: &BTreeMap<String, u32>,
    averages: &BTreeMap<String, PlayerAverages>,
    season_label: &str,
) -> (Vec<ProjectionRow>, Vec<Anomaly>) {
    let mut rows = Vec::with_capacity(rosters.len());
    let mut anomalies = Vec::new();

    for entry in rosters {
        let scheduled = remaining_by_team
            .get(&entry.nba_team_name)
            .copied()
            .unwrap_or(0);
        let remaining_games = if entry.injury_status.is_healthy() {
            scheduled
        } else {
            0
        };

        let player_averages = averages.get(&entry.player_name);
        if player_averages.is_none() {
            anomalies.push(Anomaly::MissingAverages {
                player: entry.player_name.clone(),
                nba_team: entry.nba_team_name.clone(),
            });
        }

        // Rounded before multiplying so totals match earlier published runs.
        let stats = player_averages
            .map(|a| a.rounded().scaled(remaining_games))
            .unwrap_or_default();

        rows.push(ProjectionRow {
            owning_fantasy_team: entry.owning_fantasy_team.clone(),
            season_label: season_label.to_string(),
            player_name: entry.player_name.clone(),
            nba_team_name: entry.nba_team_name.clone(),
            injury_status: entry.injury_status.clone(),
            remaining_games,
            has_averages: player_averages.is_some(),
            stats,
        });
    }

    (rows, anomalies)
}

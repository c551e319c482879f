//! Team-level projected totals, shaped like the Actual matchup rows.

use super::engine::ProjectionRow;
use super::names::{normalize, Anomaly};
use super::stats::StatLine;
use crate::storage::models::{MatchupRow, StatType};
use std::collections::{BTreeMap, BTreeSet};

/// Sum projection rows per fantasy team.
pub fn team_totals(rows: &[ProjectionRow]) -> BTreeMap<String, StatLine> {
    let mut totals: BTreeMap<String, StatLine> = BTreeMap::new();
    for row in rows {
        *totals.entry(row.owning_fantasy_team.clone()).or_default() += &row.stats;
    }
    totals
}

/// Build one Projected row per Actual row, copying the matchup metadata and
/// filling in the team's summed projection. A team with no rostered players
/// gets zero counts and null percentages.
///
/// Roster owners that have no Actual row are reported, not dropped quietly.
pub fn rollup(actual: &[MatchupRow], rows: &[ProjectionRow]) -> (Vec<MatchupRow>, Vec<Anomaly>) {
    let totals = team_totals(rows);

    let projected = actual
        .iter()
        .filter(|a| a.stat_type == StatType::Actual)
        .map(|a| {
            let line = totals.get(&normalize(&a.team_name)).copied().unwrap_or_default();
            a.with_totals(line.to_matchup_totals(), StatType::Projected)
        })
        .collect();

    let matched: BTreeSet<String> = actual.iter().map(|a| normalize(&a.team_name)).collect();
    let anomalies = totals
        .keys()
        .filter(|team| !matched.contains(*team))
        .map(|team| Anomaly::UnmatchedFantasyTeam {
            fantasy_team: team.clone(),
        })
        .collect();

    (projected, anomalies)
}

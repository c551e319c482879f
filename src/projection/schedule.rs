//! Games left in a scoring period.

use crate::cli::types::ScoringPeriod;
use crate::storage::models::ScheduleEntry;
use std::collections::BTreeMap;

/// Count `team`'s games inside `period` that are not yet final.
pub fn remaining_games(schedule: &[ScheduleEntry], period: &ScoringPeriod, team: &str) -> u32 {
    schedule
        .iter()
        .filter(|e| counts_as_remaining(e, period) && e.involves(team))
        .count() as u32
}

/// Remaining games for every team on the schedule, computed in one pass.
///
/// Teams with no open games in the window are present with 0.
pub fn remaining_games_by_team(
    schedule: &[ScheduleEntry],
    period: &ScoringPeriod,
) -> BTreeMap<String, u32> {
    let mut by_team: BTreeMap<String, u32> = BTreeMap::new();
    for entry in schedule {
        let open = counts_as_remaining(entry, period) as u32;
        for team in [&entry.home_team_name, &entry.away_team_name] {
            *by_team.entry(team.clone()).or_default() += open;
        }
    }
    by_team
}

fn counts_as_remaining(entry: &ScheduleEntry, period: &ScoringPeriod) -> bool {
    period.contains(entry.game_date) && !entry.status.is_final()
}

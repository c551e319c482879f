//! Season-to-date per-game averages.

use super::stats::{Stat, StatLine};
use crate::cli::types::PlayerId;
use crate::storage::models::GameLogRow;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;
use tracing::warn;

/// Places kept when an average is rounded before projecting it forward.
pub const AVERAGE_DECIMALS: u32 = 2;

/// One player's season means.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerAverages {
    pub player_id: PlayerId,
    pub player_name: String,
    pub games: u32,
    pub averages: StatLine,
}

impl PlayerAverages {
    /// The averages rounded half away from zero to [`AVERAGE_DECIMALS`].
    pub fn rounded(&self) -> StatLine {
        let mut out = StatLine::default();
        for stat in Stat::ALL {
            out.set(
                stat,
                self.averages
                    .get(stat)
                    .round_dp_with_strategy(AVERAGE_DECIMALS, RoundingStrategy::MidpointAwayFromZero),
            );
        }
        out
    }
}

/// Arithmetic mean of every counting stat per player, over the rows of
/// `season_label` only. Keyed by player name, the join key the roster uses.
///
/// Players without a row this season are simply absent.
pub fn season_averages(logs: &[GameLogRow], season_label: &str) -> BTreeMap<String, PlayerAverages> {
    let mut sums: BTreeMap<PlayerId, (String, u32, StatLine)> = BTreeMap::new();

    for row in logs.iter().filter(|r| r.season_label == season_label) {
        let entry = sums
            .entry(row.player_id)
            .or_insert_with(|| (row.player_name.clone(), 0, StatLine::default()));
        entry.1 += 1;
        for stat in Stat::ALL {
            let total = entry.2.get(stat) + Decimal::from(stat.from_box_score(&row.stats));
            entry.2.set(stat, total);
        }
    }

    let mut averages = BTreeMap::new();
    for (player_id, (player_name, games, totals)) in sums {
        let divisor = Decimal::from(games);
        let mut means = StatLine::default();
        for stat in Stat::ALL {
            means.set(stat, totals.get(stat) / divisor);
        }
        let previous = averages.insert(
            player_name.clone(),
            PlayerAverages {
                player_id,
                player_name,
                games,
                averages: means,
            },
        );
        if let Some(previous) = previous {
            warn!(
                player = %previous.player_name,
                dropped_id = %previous.player_id,
                "two player ids share a name; keeping the later id"
            );
        }
    }
    averages
}

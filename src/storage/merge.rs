//! Replacement of Projected matchup rows

use super::{models::*, queries::insert_matchup, schema::HoopsDatabase};
use crate::cli::types::{Season, Week};
use anyhow::Result;
use rusqlite::params;
use tracing::info;

/// Outcome of a projection merge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSummary {
    pub removed: usize,
    pub inserted: usize,
}

impl HoopsDatabase {
    /// Swap the Projected rows of one season/week for `rows`.
    ///
    /// Delete and insert run in one transaction. If any insert fails the
    /// transaction is dropped uncommitted, which rolls the delete back, so
    /// readers only ever see the previous set or the new one.
    pub fn replace_projected_rows(
        &mut self,
        season: Season,
        week: Week,
        rows: &[MatchupRow],
    ) -> Result<MergeSummary> {
        let tx = self.conn.transaction()?;

        let removed = tx.execute(
            "DELETE FROM yahoo_matchups
             WHERE season = ? AND week = ? AND stat_type = 'Projected'",
            params![season.as_u16(), week.as_u16()],
        )?;

        for row in rows {
            anyhow::ensure!(
                row.stat_type == StatType::Projected
                    && row.season == season
                    && row.week == week,
                "row for team {} is not a Projected row of season {} week {}",
                row.team_key,
                season,
                week
            );
            insert_matchup(&tx, row)?;
        }

        tx.commit()?;

        info!(
            season = season.as_u16(),
            week = week.as_u16(),
            removed,
            inserted = rows.len(),
            "projected rows replaced"
        );
        Ok(MergeSummary {
            removed,
            inserted: rows.len(),
        })
    }
}

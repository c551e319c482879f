//! Table replacement and load queries

use super::{models::*, schema::HoopsDatabase};
use crate::cli::types::{PlayerId, Position, Season, Week};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Row, Transaction};
use std::collections::BTreeSet;
use tracing::{debug, warn};

pub(crate) const MATCHUP_COLUMNS: &str = "season, week, week_start, week_end, matchup_number, status,
     is_playoffs, is_consolation, team_name, team_key,
     fgm, fga, fg_pct, ftm, fta, ft_pct, fg3m, pts, reb, ast, stl, blk, tov, stat_type";

const GAME_LOG_COLUMNS: &str = "season_year, player_id, player_name, team_name, game_id, game_date,
     fgm, fga, ftm, fta, fg3m, pts, reb, ast, stl, blk, tov";

/// Table replacements sharing one transaction. Nothing is visible to other
/// connections until [`WriteBatch::commit`]; dropping the batch rolls back.
pub struct WriteBatch<'conn> {
    tx: Transaction<'conn>,
}

impl<'conn> WriteBatch<'conn> {
    pub fn commit(self) -> Result<()> {
        self.tx.commit()?;
        Ok(())
    }

    /// Replace the whole schedule table
    pub fn replace_schedule(&self, entries: &[ScheduleEntry]) -> Result<usize> {
        self.tx.execute("DELETE FROM nba_schedule", [])?;
        let mut stmt = self.tx.prepare(
            "INSERT OR REPLACE INTO nba_schedule
             (game_id, game_date, status, home_team_name, away_team_name)
             VALUES (?, ?, ?, ?, ?)",
        )?;
        for entry in entries {
            stmt.execute(params![
                entry.game_id,
                entry.game_date,
                entry.status.to_string(),
                entry.home_team_name,
                entry.away_team_name
            ])?;
        }
        debug!(rows = entries.len(), "schedule replaced");
        Ok(entries.len())
    }

    /// Replace the whole roster table; rosters carry no history
    pub fn replace_rosters(&self, entries: &[RosterEntry]) -> Result<usize> {
        self.tx.execute("DELETE FROM yahoo_rosters", [])?;
        let mut stmt = self.tx.prepare(
            "INSERT OR REPLACE INTO yahoo_rosters
             (owning_team, player_name, team_name, positions, injury_status)
             VALUES (?, ?, ?, ?, ?)",
        )?;
        for entry in entries {
            let positions = entry
                .eligible_positions
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(",");
            stmt.execute(params![
                entry.owning_fantasy_team,
                entry.player_name,
                entry.nba_team_name,
                positions,
                entry.injury_status.to_string()
            ])?;
        }
        debug!(rows = entries.len(), "rosters replaced");
        Ok(entries.len())
    }

    /// Replace every game log of one season
    pub fn replace_season_game_logs(&self, season: Season, rows: &[GameLogRow]) -> Result<usize> {
        self.tx.execute(
            "DELETE FROM nba_players WHERE season_year = ?",
            params![season.label()],
        )?;
        insert_game_logs(&self.tx, rows)?;
        debug!(season = %season.label(), rows = rows.len(), "season game logs replaced");
        Ok(rows.len())
    }

    /// Replace the game logs of a single day, leaving the rest of the season alone
    pub fn replace_game_logs_for_date(&self, date: NaiveDate, rows: &[GameLogRow]) -> Result<usize> {
        let stray = rows.iter().filter(|r| r.game_date != date).count();
        if stray > 0 {
            warn!(%date, stray, "daily update contains rows from other dates");
        }

        self.tx
            .execute("DELETE FROM nba_players WHERE game_date = ?", params![date])?;
        insert_game_logs(&self.tx, rows)?;
        debug!(%date, rows = rows.len(), "daily game logs replaced");
        Ok(rows.len())
    }

    /// Replace the Actual matchup rows of the weeks present in `rows`.
    /// Projected rows are left for the projection step to supersede.
    pub fn replace_actual_matchups(&self, rows: &[MatchupRow]) -> Result<usize> {
        let weeks: BTreeSet<(Season, Week)> = rows.iter().map(|r| (r.season, r.week)).collect();
        for (season, week) in &weeks {
            self.tx.execute(
                "DELETE FROM yahoo_matchups WHERE season = ? AND week = ? AND stat_type = 'Actual'",
                params![season.as_u16(), week.as_u16()],
            )?;
        }

        let mut inserted = 0;
        for row in rows.iter().filter(|r| r.stat_type == StatType::Actual) {
            insert_matchup(&self.tx, row)?;
            inserted += 1;
        }
        debug!(weeks = weeks.len(), rows = inserted, "actual matchups replaced");
        Ok(inserted)
    }
}

impl HoopsDatabase {
    /// Start a batch of table replacements committed together
    pub fn batch(&mut self) -> Result<WriteBatch<'_>> {
        Ok(WriteBatch {
            tx: self.conn.transaction()?,
        })
    }

    pub fn replace_schedule(&mut self, entries: &[ScheduleEntry]) -> Result<usize> {
        let batch = self.batch()?;
        let written = batch.replace_schedule(entries)?;
        batch.commit()?;
        Ok(written)
    }

    pub fn replace_rosters(&mut self, entries: &[RosterEntry]) -> Result<usize> {
        let batch = self.batch()?;
        let written = batch.replace_rosters(entries)?;
        batch.commit()?;
        Ok(written)
    }

    pub fn replace_season_game_logs(&mut self, season: Season, rows: &[GameLogRow]) -> Result<usize> {
        let batch = self.batch()?;
        let written = batch.replace_season_game_logs(season, rows)?;
        batch.commit()?;
        Ok(written)
    }

    pub fn replace_game_logs_for_date(&mut self, date: NaiveDate, rows: &[GameLogRow]) -> Result<usize> {
        let batch = self.batch()?;
        let written = batch.replace_game_logs_for_date(date, rows)?;
        batch.commit()?;
        Ok(written)
    }

    pub fn replace_actual_matchups(&mut self, rows: &[MatchupRow]) -> Result<usize> {
        let batch = self.batch()?;
        let written = batch.replace_actual_matchups(rows)?;
        batch.commit()?;
        Ok(written)
    }

    /// All scheduled games
    pub fn load_schedule(&self) -> Result<Vec<ScheduleEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT game_id, game_date, status, home_team_name, away_team_name
             FROM nba_schedule ORDER BY game_date, game_id",
        )?;
        let rows = stmt.query_map([], |row| {
            let status: String = row.get(2)?;
            Ok(ScheduleEntry {
                game_id: row.get(0)?,
                game_date: row.get(1)?,
                status: status.parse().unwrap_or(GameStatus::Scheduled),
                home_team_name: row.get(3)?,
                away_team_name: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    /// All roster entries
    pub fn load_rosters(&self) -> Result<Vec<RosterEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT owning_team, player_name, team_name, positions, injury_status
             FROM yahoo_rosters ORDER BY owning_team, player_name",
        )?;
        let rows = stmt.query_map([], |row| {
            let positions: String = row.get(3)?;
            let injury: String = row.get(4)?;
            Ok(RosterEntry {
                owning_fantasy_team: row.get(0)?,
                player_name: row.get(1)?,
                nba_team_name: row.get(2)?,
                eligible_positions: parse_positions(&positions),
                injury_status: InjuryStatus::from_code(&injury),
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    /// Game logs for one season label, e.g. `2020-21`
    pub fn load_game_logs(&self, season_label: &str) -> Result<Vec<GameLogRow>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {GAME_LOG_COLUMNS} FROM nba_players
             WHERE season_year = ? ORDER BY game_date, player_id"
        ))?;
        let rows = stmt.query_map(params![season_label], row_to_game_log)?;

        let mut logs = Vec::new();
        for row in rows {
            logs.push(row?);
        }
        Ok(logs)
    }

    /// The season label most game-log rows belong to
    pub fn dominant_season_label(&self) -> Result<Option<String>> {
        let result = self.conn.query_row(
            "SELECT season_year FROM nba_players
             GROUP BY season_year ORDER BY COUNT(*) DESC, season_year DESC LIMIT 1",
            [],
            |row| row.get::<_, String>(0),
        );
        match result {
            Ok(label) => Ok(Some(label)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Latest week with Actual matchup rows for a season
    pub fn latest_week(&self, season: Season) -> Result<Option<Week>> {
        let week: Option<u16> = self.conn.query_row(
            "SELECT MAX(week) FROM yahoo_matchups WHERE season = ? AND stat_type = 'Actual'",
            params![season.as_u16()],
            |row| row.get(0),
        )?;
        Ok(week.map(Week::new))
    }

    /// Matchup rows for a season/week, optionally restricted to one stat type,
    /// ordered by matchup number, team key, stat type
    pub fn load_matchups(
        &self,
        season: Season,
        week: Week,
        stat_type: Option<StatType>,
    ) -> Result<Vec<MatchupRow>> {
        let mut query = format!(
            "SELECT {MATCHUP_COLUMNS} FROM yahoo_matchups WHERE season = ? AND week = ?"
        );
        let mut params: Vec<Box<dyn rusqlite::ToSql>> =
            vec![Box::new(season.as_u16()), Box::new(week.as_u16())];

        if let Some(stat_type) = stat_type {
            query.push_str(" AND stat_type = ?");
            params.push(Box::new(stat_type.as_str()));
        }
        query.push_str(" ORDER BY matchup_number, team_key, stat_type");

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter().map(|p| p.as_ref())),
            row_to_matchup,
        )?;

        let mut matchups = Vec::new();
        for row in rows {
            matchups.push(row?);
        }
        Ok(matchups)
    }

    /// Clear all data from the database
    pub fn clear_all_data(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "DELETE FROM yahoo_matchups;
             DELETE FROM nba_players;
             DELETE FROM yahoo_rosters;
             DELETE FROM nba_schedule;",
        )?;
        Ok(())
    }
}

fn insert_game_logs(tx: &Transaction<'_>, rows: &[GameLogRow]) -> Result<()> {
    let mut stmt = tx.prepare(&format!(
        "INSERT OR REPLACE INTO nba_players ({GAME_LOG_COLUMNS})
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
    ))?;
    for row in rows {
        let s = &row.stats;
        stmt.execute(params![
            row.season_label,
            row.player_id.as_u64(),
            row.player_name,
            row.nba_team_name,
            row.game_id,
            row.game_date,
            s.fgm,
            s.fga,
            s.ftm,
            s.fta,
            s.fg3m,
            s.pts,
            s.reb,
            s.ast,
            s.stl,
            s.blk,
            s.tov
        ])?;
    }
    Ok(())
}

/// Plain INSERT: a second row for the same (season, week, team_key, stat_type)
/// violates the primary key and fails the surrounding transaction.
pub(crate) fn insert_matchup(tx: &Transaction<'_>, row: &MatchupRow) -> rusqlite::Result<()> {
    let t = &row.totals;
    tx.execute(
        &format!(
            "INSERT INTO yahoo_matchups ({MATCHUP_COLUMNS})
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        ),
        params![
            row.season.as_u16(),
            row.week.as_u16(),
            row.week_start,
            row.week_end,
            row.matchup_number,
            row.status,
            row.is_playoffs,
            row.is_consolation,
            row.team_name,
            row.team_key,
            t.fgm,
            t.fga,
            t.fg_pct,
            t.ftm,
            t.fta,
            t.ft_pct,
            t.fg3m,
            t.pts,
            t.reb,
            t.ast,
            t.stl,
            t.blk,
            t.tov,
            row.stat_type.as_str()
        ],
    )?;
    Ok(())
}

fn row_to_game_log(row: &Row) -> rusqlite::Result<GameLogRow> {
    Ok(GameLogRow {
        season_label: row.get(0)?,
        player_id: PlayerId::new(row.get(1)?),
        player_name: row.get(2)?,
        nba_team_name: row.get(3)?,
        game_id: row.get(4)?,
        game_date: row.get(5)?,
        stats: BoxScore {
            fgm: row.get(6)?,
            fga: row.get(7)?,
            ftm: row.get(8)?,
            fta: row.get(9)?,
            fg3m: row.get(10)?,
            pts: row.get(11)?,
            reb: row.get(12)?,
            ast: row.get(13)?,
            stl: row.get(14)?,
            blk: row.get(15)?,
            tov: row.get(16)?,
        },
    })
}

pub(crate) fn row_to_matchup(row: &Row) -> rusqlite::Result<MatchupRow> {
    let stat_type: String = row.get(23)?;
    let stat_type = stat_type.parse::<StatType>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            23,
            rusqlite::types::Type::Text,
            e.into(),
        )
    })?;

    Ok(MatchupRow {
        season: Season::new(row.get(0)?),
        week: Week::new(row.get(1)?),
        week_start: row.get(2)?,
        week_end: row.get(3)?,
        matchup_number: row.get(4)?,
        status: row.get(5)?,
        is_playoffs: row.get(6)?,
        is_consolation: row.get(7)?,
        team_name: row.get(8)?,
        team_key: row.get(9)?,
        totals: MatchupTotals {
            fgm: row.get(10)?,
            fga: row.get(11)?,
            fg_pct: row.get(12)?,
            ftm: row.get(13)?,
            fta: row.get(14)?,
            ft_pct: row.get(15)?,
            fg3m: row.get(16)?,
            pts: row.get(17)?,
            reb: row.get(18)?,
            ast: row.get(19)?,
            stl: row.get(20)?,
            blk: row.get(21)?,
            tov: row.get(22)?,
        },
        stat_type,
    })
}

fn parse_positions(raw: &str) -> BTreeSet<Position> {
    raw.split(',')
        .filter(|s| !s.trim().is_empty())
        .filter_map(|s| match s.parse::<Position>() {
            Ok(pos) => Some(pos),
            Err(e) => {
                warn!("skipping stored position: {}", e);
                None
            }
        })
        .collect()
}

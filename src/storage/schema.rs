//! Database schema and connection management

use crate::error::HoopsError;
use crate::DB_PATH_ENV_VAR;
use anyhow::Result;
use dirs::cache_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Database connection manager for schedule, roster, game-log and matchup tables
pub struct HoopsDatabase {
    pub(crate) conn: Connection,
}

impl HoopsDatabase {
    /// Open the default database (`FANTASY_HOOPS_DB` or the user cache
    /// directory) and ensure tables exist
    pub fn new() -> Result<Self> {
        Self::open(&Self::database_path()?)
    }

    /// Open a database at an explicit path and ensure tables exist
    pub fn open(db_path: &Path) -> Result<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        debug!(path = %db_path.display(), "opening database");
        let conn = Connection::open(db_path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Fresh in-memory database, mostly for tests
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the path to the database file
    pub fn database_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(DB_PATH_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }
        let cache_dir = cache_dir().ok_or_else(|| HoopsError::Storage {
            message: "Could not determine cache directory".to_string(),
        })?;
        Ok(cache_dir.join("fantasy-hoops").join("hoops.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS nba_schedule (
                game_id TEXT PRIMARY KEY,
                game_date TEXT NOT NULL,
                status TEXT NOT NULL,
                home_team_name TEXT NOT NULL,
                away_team_name TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS yahoo_rosters (
                owning_team TEXT NOT NULL,
                player_name TEXT NOT NULL,
                team_name TEXT NOT NULL,
                positions TEXT NOT NULL,
                injury_status TEXT NOT NULL,
                PRIMARY KEY (owning_team, player_name)
            );

            CREATE TABLE IF NOT EXISTS nba_players (
                season_year TEXT NOT NULL,
                player_id INTEGER NOT NULL,
                player_name TEXT NOT NULL,
                team_name TEXT NOT NULL,
                game_id TEXT NOT NULL,
                game_date TEXT NOT NULL,
                fgm INTEGER NOT NULL,
                fga INTEGER NOT NULL,
                ftm INTEGER NOT NULL,
                fta INTEGER NOT NULL,
                fg3m INTEGER NOT NULL,
                pts INTEGER NOT NULL,
                reb INTEGER NOT NULL,
                ast INTEGER NOT NULL,
                stl INTEGER NOT NULL,
                blk INTEGER NOT NULL,
                tov INTEGER NOT NULL,
                PRIMARY KEY (player_id, game_id)
            );

            CREATE TABLE IF NOT EXISTS yahoo_matchups (
                season INTEGER NOT NULL,
                week INTEGER NOT NULL,
                week_start TEXT NOT NULL,
                week_end TEXT NOT NULL,
                matchup_number INTEGER NOT NULL,
                status TEXT NOT NULL,
                is_playoffs INTEGER NOT NULL,
                is_consolation INTEGER NOT NULL,
                team_name TEXT NOT NULL,
                team_key TEXT NOT NULL,
                fgm REAL NOT NULL,
                fga REAL NOT NULL,
                fg_pct REAL,
                ftm REAL NOT NULL,
                fta REAL NOT NULL,
                ft_pct REAL,
                fg3m REAL NOT NULL,
                pts REAL NOT NULL,
                reb REAL NOT NULL,
                ast REAL NOT NULL,
                stl REAL NOT NULL,
                blk REAL NOT NULL,
                tov REAL NOT NULL,
                stat_type TEXT NOT NULL CHECK (stat_type IN ('Actual', 'Projected')),
                PRIMARY KEY (season, week, team_key, stat_type)
            );

            CREATE INDEX IF NOT EXISTS idx_schedule_date
             ON nba_schedule(game_date);

            CREATE INDEX IF NOT EXISTS idx_players_season_date
             ON nba_players(season_year, game_date);",
        )?;

        Ok(())
    }
}

//! Refresh of the stored input tables.
//!
//! Each dataset is a [`RefreshTask`]: a name, whether the current
//! [`RefreshConfig`] enables it, and a loader producing a [`Table`]. All
//! enabled loaders run before anything is written, and the writes share one
//! transaction, so a failed download, a malformed file or a failed insert
//! leaves the database as it was.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::{
    cli::types::Season,
    config::{GameLogSource, RefreshConfig, ScheduleSource},
    nba::{decode_game_logs, decode_schedule, NbaClient},
    storage::{models::*, HoopsDatabase, WriteBatch},
    yahoo::{decode_roster, decode_scoreboard},
    Result,
};

/// A freshly loaded table, ready to replace its stored counterpart.
#[derive(Debug, Clone, PartialEq)]
pub enum Table {
    Schedule(Vec<ScheduleEntry>),
    Rosters(Vec<RosterEntry>),
    SeasonGameLogs(Season, Vec<GameLogRow>),
    DailyGameLogs(NaiveDate, Vec<GameLogRow>),
    Matchups(Vec<MatchupRow>),
}

impl Table {
    pub fn len(&self) -> usize {
        match self {
            Table::Schedule(rows) => rows.len(),
            Table::Rosters(rows) => rows.len(),
            Table::SeasonGameLogs(_, rows) | Table::DailyGameLogs(_, rows) => rows.len(),
            Table::Matchups(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the stored table with this one as part of `batch`.
    pub fn store(&self, batch: &WriteBatch<'_>) -> Result<usize> {
        let written = match self {
            Table::Schedule(rows) => batch.replace_schedule(rows)?,
            Table::Rosters(rows) => batch.replace_rosters(rows)?,
            Table::SeasonGameLogs(season, rows) => batch.replace_season_game_logs(*season, rows)?,
            Table::DailyGameLogs(date, rows) => batch.replace_game_logs_for_date(*date, rows)?,
            Table::Matchups(rows) => batch.replace_actual_matchups(rows)?,
        };
        Ok(written)
    }
}

/// Everything a loader may need.
#[derive(Debug, Clone)]
pub struct RefreshContext {
    pub config: RefreshConfig,
    pub nba: NbaClient,
}

pub type LoadFuture<'a> = Pin<Box<dyn Future<Output = Result<Table>> + 'a>>;

/// One refreshable dataset.
pub struct RefreshTask {
    pub name: &'static str,
    pub enabled: bool,
    pub load: for<'a> fn(&'a RefreshContext) -> LoadFuture<'a>,
}

impl std::fmt::Debug for RefreshTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshTask")
            .field("name", &self.name)
            .field("enabled", &self.enabled)
            .finish()
    }
}

/// The datasets in the order they are written.
pub fn refresh_tasks(config: &RefreshConfig) -> Vec<RefreshTask> {
    vec![
        RefreshTask {
            name: "matchups",
            enabled: config.refresh_matchups(),
            load: load_matchups,
        },
        RefreshTask {
            name: "rosters",
            enabled: config.refresh_rosters(),
            load: load_rosters,
        },
        RefreshTask {
            name: "schedule",
            enabled: config.refresh_schedule(),
            load: load_schedule,
        },
        RefreshTask {
            name: "game_logs",
            enabled: config.refresh_game_logs(),
            load: load_game_logs,
        },
    ]
}

fn read_file(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading saved response");
    Ok(std::fs::read_to_string(path)?)
}

fn load_matchups(ctx: &RefreshContext) -> LoadFuture<'_> {
    Box::pin(matchups_table(ctx))
}

fn load_rosters(ctx: &RefreshContext) -> LoadFuture<'_> {
    Box::pin(rosters_table(ctx))
}

fn load_schedule(ctx: &RefreshContext) -> LoadFuture<'_> {
    Box::pin(schedule_table(ctx))
}

fn load_game_logs(ctx: &RefreshContext) -> LoadFuture<'_> {
    Box::pin(game_logs_table(ctx))
}

async fn matchups_table(ctx: &RefreshContext) -> Result<Table> {
    let rows = match &ctx.config.matchups {
        Some(path) => decode_scoreboard(&read_file(path)?)?,
        None => Vec::new(),
    };
    Ok(Table::Matchups(rows))
}

async fn rosters_table(ctx: &RefreshContext) -> Result<Table> {
    let mut rows = Vec::new();
    for path in &ctx.config.rosters {
        rows.extend(decode_roster(&read_file(path)?)?);
    }
    Ok(Table::Rosters(rows))
}

async fn schedule_table(ctx: &RefreshContext) -> Result<Table> {
    let rows = match &ctx.config.schedule {
        ScheduleSource::Skip => Vec::new(),
        ScheduleSource::Fetch => ctx.nba.fetch_schedule(ctx.config.season).await?,
        ScheduleSource::File(path) => decode_schedule(&read_file(path)?)?,
    };
    Ok(Table::Schedule(rows))
}

async fn game_logs_table(ctx: &RefreshContext) -> Result<Table> {
    let season = ctx.config.season;
    let table = match &ctx.config.game_logs {
        GameLogSource::Skip => Table::SeasonGameLogs(season, Vec::new()),
        GameLogSource::FetchSeason => {
            Table::SeasonGameLogs(season, ctx.nba.fetch_game_logs(season, None).await?)
        }
        GameLogSource::File(path) => {
            Table::SeasonGameLogs(season, decode_game_logs(&read_file(path)?)?)
        }
        GameLogSource::FetchDay(date) => {
            Table::DailyGameLogs(*date, ctx.nba.fetch_game_logs(season, Some(*date)).await?)
        }
    };
    Ok(table)
}

/// Rows written per dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshReport {
    pub written: Vec<(&'static str, usize)>,
}

/// Load every enabled dataset, then write them all in one transaction.
pub async fn run_refresh(
    db: &mut HoopsDatabase,
    ctx: &RefreshContext,
    tasks: &[RefreshTask],
) -> Result<RefreshReport> {
    let mut loaded = Vec::new();
    for task in tasks.iter().filter(|t| t.enabled) {
        info!(dataset = task.name, "loading");
        let table = (task.load)(ctx).await?;
        debug!(dataset = task.name, rows = table.len(), "loaded");
        loaded.push((task.name, table));
    }

    let mut report = RefreshReport::default();
    let batch = db.batch()?;
    for (name, table) in &loaded {
        let written = table.store(&batch)?;
        info!(dataset = *name, rows = written, "stored");
        report.written.push((*name, written));
    }
    batch.commit()?;
    Ok(report)
}

/// `refresh` command entry point.
pub async fn handle_refresh(db_path: Option<PathBuf>, config: RefreshConfig) -> Result<()> {
    if config.is_empty() {
        println!("Nothing to refresh. See `fantasy-hoops refresh --help` for the available datasets.");
        return Ok(());
    }

    let mut db = super::open_database(db_path.as_deref())?;
    let tasks = refresh_tasks(&config);
    let ctx = RefreshContext {
        config,
        nba: NbaClient::new()?,
    };

    let report = run_refresh(&mut db, &ctx, &tasks).await?;
    for (name, rows) in &report.written {
        println!("✓ {}: {} rows", name, rows);
    }
    Ok(())
}

//! Helpers shared by the command handlers.

use std::path::Path;

use tracing::{debug, info};

use crate::{
    cli::types::{Season, Week},
    error::HoopsError,
    storage::HoopsDatabase,
    Result,
};

/// Open the database at `path`, or the default location when none is given.
pub fn open_database(path: Option<&Path>) -> Result<HoopsDatabase> {
    let db = match path {
        Some(path) => HoopsDatabase::open(path)?,
        None => HoopsDatabase::new()?,
    };
    Ok(db)
}

/// The season to work on: the one given, or the one most stored game logs
/// belong to.
pub fn resolve_season(db: &HoopsDatabase, season: Option<Season>) -> Result<Season> {
    if let Some(season) = season {
        return Ok(season);
    }
    let label = db.dominant_season_label()?.ok_or(HoopsError::MissingSeason)?;
    let season = Season::from_label(&label)?;
    info!(season = %label, "season inferred from stored game logs");
    Ok(season)
}

/// The week to work on: the one given, or the latest week with matchup rows.
pub fn resolve_week(db: &HoopsDatabase, season: Season, week: Option<Week>) -> Result<Week> {
    if let Some(week) = week {
        return Ok(week);
    }
    let week = db.latest_week(season)?.ok_or(HoopsError::NoMatchups {
        season: season.as_u16(),
    })?;
    debug!(week = week.as_u16(), "using latest stored week");
    Ok(week)
}

/// Format an optional percentage for text output.
pub fn format_pct(pct: Option<f64>) -> String {
    match pct {
        Some(p) => format!("{:.3}", p),
        None => "-".to_string(),
    }
}

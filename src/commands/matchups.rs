//! Report of stored matchup rows, Actual next to Projected.

use std::path::Path;

use crate::{
    cli::types::{Season, Week},
    storage::{HoopsDatabase, MatchupRow},
    Result,
};

use super::{format_pct, open_database, resolve_season, resolve_week};

/// Stored rows of a season/week, ordered by matchup number, team key and
/// stat type.
pub fn load_report(
    db: &HoopsDatabase,
    season: Option<Season>,
    week: Option<Week>,
) -> Result<(Season, Week, Vec<MatchupRow>)> {
    let season = resolve_season(db, season)?;
    let week = resolve_week(db, season, week)?;
    let rows = db.load_matchups(season, week, None)?;
    Ok((season, week, rows))
}

/// `matchups` command entry point.
pub fn handle_matchups(
    db_path: Option<&Path>,
    season: Option<Season>,
    week: Option<Week>,
    as_json: bool,
) -> Result<()> {
    let db = open_database(db_path)?;
    let (season, week, rows) = load_report(&db, season, week)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No matchup rows for season {} week {}", season.label(), week);
        return Ok(());
    }

    println!("Season {} week {}", season.label(), week);
    let mut current = None;
    for row in &rows {
        if current != Some(row.matchup_number) {
            println!("\nMatchup {} ({})", row.matchup_number, row.status);
            current = Some(row.matchup_number);
        }
        let t = &row.totals;
        println!(
            "  {:<9} {:<28} FG% {:>5}  FT% {:>5}  3PM {:>5.1}  PTS {:>6.1}  REB {:>5.1}  AST {:>5.1}  STL {:>4.1}  BLK {:>4.1}  TO {:>4.1}",
            row.stat_type.as_str(),
            row.team_name,
            format_pct(t.fg_pct),
            format_pct(t.ft_pct),
            t.fg3m,
            t.pts,
            t.reb,
            t.ast,
            t.stl,
            t.blk,
            t.tov
        );
    }
    Ok(())
}

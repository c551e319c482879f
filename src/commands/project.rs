//! Weekly projection: load the stored tables, project the rest of the
//! scoring period, and merge the Projected rows back into the matchup table.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::{
    cli::types::{ScoringPeriod, Season, Week},
    error::HoopsError,
    projection::{
        period_from_matchups, run_projection, validate_projected, Anomaly, ProjectionInputs,
        ProjectionOptions, ProjectionRow,
    },
    storage::{HoopsDatabase, MatchupRow, MergeSummary, StatType},
    Result,
};

use super::{format_pct, open_database, resolve_season, resolve_week};

/// Options of one `project` run.
#[derive(Debug, Clone, Default)]
pub struct ProjectParams {
    pub season: Option<Season>,
    pub week: Option<Week>,
    pub strict: bool,
    /// Compute and print, but leave the database untouched.
    pub dry_run: bool,
    pub as_json: bool,
}

/// Everything a run produced, as printed with `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectReport {
    pub season: Season,
    pub week: Week,
    pub period: ScoringPeriod,
    pub players: Vec<ProjectionRow>,
    pub projected: Vec<MatchupRow>,
    pub anomalies: Vec<Anomaly>,
    #[serde(skip)]
    pub merge: Option<MergeSummary>,
}

/// Run the projection against `db`, merging unless `dry_run` is set.
pub fn run_project(db: &mut HoopsDatabase, params: &ProjectParams) -> Result<ProjectReport> {
    let season = resolve_season(db, params.season)?;
    let week = resolve_week(db, season, params.week)?;
    let season_label = season.label();

    let actual = db.load_matchups(season, week, Some(StatType::Actual))?;
    let missing_period = || HoopsError::MissingPeriod {
        season: season.as_u16(),
        week: week.as_u16(),
    };
    let period = period_from_matchups(&actual).ok_or_else(missing_period)??;

    let schedule = db.load_schedule()?;
    let rosters = db.load_rosters()?;
    let game_logs = db.load_game_logs(&season_label)?;
    info!(
        season = %season_label,
        week = week.as_u16(),
        start = %period.start,
        end = %period.end,
        games = schedule.len(),
        rostered = rosters.len(),
        logs = game_logs.len(),
        "projecting"
    );

    let options = ProjectionOptions {
        strict: params.strict,
        ..ProjectionOptions::default()
    };
    let output = run_projection(
        ProjectionInputs {
            schedule: &schedule,
            rosters: &rosters,
            game_logs: &game_logs,
            actual: &actual,
            season_label: &season_label,
            period,
        },
        &options,
    )?;

    validate_projected(&output.projected, &actual)?;

    let merge = if params.dry_run {
        info!("dry run, database left unchanged");
        None
    } else {
        Some(db.replace_projected_rows(season, week, &output.projected)?)
    };

    Ok(ProjectReport {
        season,
        week,
        period,
        players: output.players,
        projected: output.projected,
        anomalies: output.anomalies,
        merge,
    })
}

/// `project` command entry point.
pub fn handle_project(db_path: Option<&Path>, params: ProjectParams) -> Result<()> {
    let mut db = open_database(db_path)?;
    let report = run_project(&mut db, &params)?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Season {} week {} ({} to {})",
        report.season.label(),
        report.week,
        report.period.start,
        report.period.end
    );
    for row in &report.projected {
        let t = &row.totals;
        println!(
            "#{:<2} {:<28} FG {:>5.1}/{:<5.1} {:>5}  FT {:>5.1}/{:<5.1} {:>5}  3PM {:>5.1}  PTS {:>6.1}  REB {:>5.1}  AST {:>5.1}  STL {:>4.1}  BLK {:>4.1}  TO {:>4.1}",
            row.matchup_number,
            row.team_name,
            t.fgm,
            t.fga,
            format_pct(t.fg_pct),
            t.ftm,
            t.fta,
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

    if !report.anomalies.is_empty() {
        println!("\n{} anomalies:", report.anomalies.len());
        for anomaly in &report.anomalies {
            println!("  - {}", anomaly);
        }
    }

    match report.merge {
        Some(summary) => println!(
            "\n✓ Stored {} projected rows (replaced {})",
            summary.inserted, summary.removed
        ),
        None => println!("\nDry run: nothing stored"),
    }
    Ok(())
}

//! On-disk storage tests

use chrono::NaiveDate;
use fantasy_hoops::{storage::*, PlayerId, Season, Week};
use std::collections::BTreeSet;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn matchup(team_key: &str, stat_type: StatType, pts: f64) -> MatchupRow {
    MatchupRow {
        season: Season::new(2020),
        week: Week::new(11),
        week_start: date(2021, 3, 1),
        week_end: date(2021, 3, 7),
        matchup_number: 1,
        status: "midevent".to_string(),
        is_playoffs: false,
        is_consolation: false,
        team_name: format!("Team {}", team_key),
        team_key: team_key.to_string(),
        totals: MatchupTotals {
            pts,
            ..MatchupTotals::default()
        },
        stat_type,
    }
}

#[test]
fn test_open_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("hoops.db");

    let _db = HoopsDatabase::open(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_tables_persist_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hoops.db");

    {
        let mut db = HoopsDatabase::open(&path).unwrap();
        db.replace_rosters(&[RosterEntry {
            owning_fantasy_team: "Team A".to_string(),
            player_name: "P.J. Washington".to_string(),
            nba_team_name: "Charlotte Hornets".to_string(),
            eligible_positions: BTreeSet::from([
                fantasy_hoops::Position::PF,
                fantasy_hoops::Position::C,
            ]),
            injury_status: InjuryStatus::DayToDay,
        }])
        .unwrap();
        db.replace_season_game_logs(
            Season::new(2020),
            &[GameLogRow {
                season_label: "2020-21".to_string(),
                player_id: PlayerId::new(1629023),
                player_name: "P.J. Washington".to_string(),
                nba_team_name: "Charlotte Hornets".to_string(),
                game_id: "0022000500".to_string(),
                game_date: date(2021, 2, 20),
                stats: BoxScore {
                    pts: 18,
                    reb: 9,
                    ..BoxScore::default()
                },
            }],
        )
        .unwrap();
        db.replace_actual_matchups(&[matchup("t.1", StatType::Actual, 300.0)])
            .unwrap();
    }

    let db = HoopsDatabase::open(&path).unwrap();
    let rosters = db.load_rosters().unwrap();
    assert_eq!(rosters.len(), 1);
    assert_eq!(rosters[0].injury_status, InjuryStatus::DayToDay);
    assert_eq!(rosters[0].eligible_positions.len(), 2);

    let logs = db.load_game_logs("2020-21").unwrap();
    assert_eq!(logs[0].stats.reb, 9);
    assert_eq!(db.dominant_season_label().unwrap().as_deref(), Some("2020-21"));
    assert_eq!(db.latest_week(Season::new(2020)).unwrap(), Some(Week::new(11)));
}

#[test]
fn test_projected_merge_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hoops.db");

    {
        let mut db = HoopsDatabase::open(&path).unwrap();
        db.replace_actual_matchups(&[
            matchup("t.1", StatType::Actual, 300.0),
            matchup("t.2", StatType::Actual, 280.0),
        ])
        .unwrap();
        let summary = db
            .replace_projected_rows(
                Season::new(2020),
                Week::new(11),
                &[
                    matchup("t.1", StatType::Projected, 150.0),
                    matchup("t.2", StatType::Projected, 120.0),
                ],
            )
            .unwrap();
        assert_eq!(summary, MergeSummary { removed: 0, inserted: 2 });
    }

    let mut db = HoopsDatabase::open(&path).unwrap();
    let summary = db
        .replace_projected_rows(
            Season::new(2020),
            Week::new(11),
            &[
                matchup("t.1", StatType::Projected, 90.0),
                matchup("t.2", StatType::Projected, 60.0),
            ],
        )
        .unwrap();
    assert_eq!(summary, MergeSummary { removed: 2, inserted: 2 });

    let projected = db
        .load_matchups(Season::new(2020), Week::new(11), Some(StatType::Projected))
        .unwrap();
    let points: Vec<f64> = projected.iter().map(|r| r.totals.pts).collect();
    assert_eq!(points, vec![90.0, 60.0]);

    let all = db.load_matchups(Season::new(2020), Week::new(11), None).unwrap();
    assert_eq!(all.len(), 4);
}

#[test]
fn test_database_path_from_env() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("env.db");
    std::env::set_var(fantasy_hoops::DB_PATH_ENV_VAR, &path);

    let resolved = HoopsDatabase::database_path().unwrap();
    std::env::remove_var(fantasy_hoops::DB_PATH_ENV_VAR);

    assert_eq!(resolved, path);
}

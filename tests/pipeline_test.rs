//! End-to-end tests: refresh from mocked NBA feeds and saved Yahoo responses,
//! then project and merge.

use fantasy_hoops::{
    commands::{
        project::{run_project, ProjectParams},
        refresh::{refresh_tasks, run_refresh, RefreshContext},
    },
    config::{GameLogSource, RefreshConfig, ScheduleSource},
    nba::NbaClient,
    storage::{HoopsDatabase, StatType},
    HoopsError, Season, Week,
};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, value.to_string()).unwrap();
    path
}

fn scoreboard() -> Value {
    let team = |key: &str, name: &str| {
        json!({"team": [
            [{"team_key": key}, {"name": name}],
            {"team_stats": {"stats": [
                {"stat": {"stat_id": "9004003", "value": "40/90"}},
                {"stat": {"stat_id": "5", "value": ".444"}},
                {"stat": {"stat_id": "9007006", "value": "10/12"}},
                {"stat": {"stat_id": "8", "value": ".833"}},
                {"stat": {"stat_id": "12", "value": "105"}}
            ]}}
        ]})
    };
    json!({"fantasy_content": {"league": [
        {"league_key": "402.l.1157", "season": "2020"},
        {"scoreboard": {"0": {"matchups": {
            "0": {"matchup": {
                "week": "11",
                "week_start": "2021-03-01",
                "week_end": "2021-03-07",
                "status": "midevent",
                "is_playoffs": "0",
                "is_consolation": "0",
                "0": {"teams": {
                    "0": team("402.l.1157.t.1", "Dunk Tank"),
                    "1": team("402.l.1157.t.2", "Brick City"),
                    "count": 2
                }}
            }},
            "count": 1
        }}}}
    ]}})
}

fn roster(owner: &str, players: &[(&str, &str, Option<&str>)]) -> Value {
    let mut listed = serde_json::Map::new();
    for (i, (name, team, status)) in players.iter().enumerate() {
        let mut meta = vec![
            json!({"name": {"full": name}}),
            json!({"editorial_team_full_name": team}),
            json!({"eligible_positions": [{"position": "F"}, {"position": "Util"}]}),
        ];
        if let Some(status) = status {
            meta.push(json!({"status": status}));
        }
        listed.insert(i.to_string(), json!({"player": [meta]}));
    }
    listed.insert("count".to_string(), json!(players.len()));

    json!({"fantasy_content": {"team": [
        [{"team_key": "402.l.1157.t.x"}, {"name": owner}],
        {"roster": {"0": {"players": listed}}}
    ]}})
}

fn game(gid: &str, day: &str, status: &str, home: (&str, &str), away: (&str, &str)) -> Value {
    json!({
        "gid": gid,
        "gdte": day,
        "stt": status,
        "h": {"tc": home.0, "tn": home.1},
        "v": {"tc": away.0, "tn": away.1}
    })
}

fn schedule() -> Value {
    let lac = ("LA", "Clippers");
    let cha = ("Charlotte", "Hornets");
    let bos = ("Boston", "Celtics");
    json!({"lscd": [{"mscd": {"mon": "March", "g": [
        game("0022000801", "2021-03-01", "Final", lac, cha),
        game("0022000802", "2021-03-03", "7:30 pm ET", bos, lac),
        game("0022000803", "2021-03-05", "7:00 pm ET", cha, bos),
        game("0022000804", "2021-03-06", "10:30 pm ET", lac, cha),
        game("0022000805", "2021-03-09", "10:30 pm ET", lac, bos)
    ]}}]})
}

fn game_logs() -> Value {
    let row = |id: u64, name: &str, team: &str, gid: &str, fgm: u32, fga: u32, ftm: u32, fta: u32, pts: u32| {
        json!([
            "2020-21", id, name, team, gid, "2021-02-20T00:00:00",
            fgm, fga, ftm, fta, 2, pts, 6, 4, 1, 0, 2
        ])
    };
    json!({"resultSets": [{
        "name": "PlayerGameLogs",
        "headers": [
            "SEASON_YEAR", "PLAYER_ID", "PLAYER_NAME", "TEAM_NAME", "GAME_ID", "GAME_DATE",
            "FGM", "FGA", "FTM", "FTA", "FG3M", "PTS", "REB", "AST", "STL", "BLK", "TOV"
        ],
        "rowSet": [
            row(202331, "Paul George", "LA Clippers", "0022000700", 8, 17, 0, 0, 20),
            row(202331, "Paul George", "LA Clippers", "0022000710", 9, 18, 0, 0, 25),
            row(1629023, "P.J. Washington", "Charlotte Hornets", "0022000701", 6, 12, 2, 3, 15),
            row(1628369, "Jayson Tatum", "Boston Celtics", "0022000702", 11, 20, 5, 6, 30)
        ]
    }]})
}

async fn mock_nba() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2020/league/00_full_schedule.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(schedule()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/playergamelogs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(game_logs()))
        .mount(&server)
        .await;
    server
}

fn full_config(dir: &Path) -> RefreshConfig {
    let mut config = RefreshConfig::new(Season::new(2020));
    config.matchups = Some(write_json(dir, "scoreboard.json", &scoreboard()));
    config.rosters = vec![
        write_json(
            dir,
            "dunk_tank.json",
            &roster(
                "Dunk Tank",
                &[
                    ("Paul George", "Los Angeles Clippers", None),
                    ("PJ Washington", "Charlotte Hornets", None),
                ],
            ),
        ),
        write_json(
            dir,
            "brick_city.json",
            &roster("Brick City", &[("Jayson Tatum", "Boston Celtics", Some("O"))]),
        ),
    ];
    config.schedule = ScheduleSource::Fetch;
    config.game_logs = GameLogSource::FetchSeason;
    config
}

#[tokio::test]
async fn test_refresh_then_project() {
    let server = mock_nba().await;
    let dir = TempDir::new().unwrap();
    let config = full_config(dir.path());

    let tasks = refresh_tasks(&config);
    let ctx = RefreshContext {
        config,
        nba: NbaClient::with_base_urls(&server.uri(), &server.uri()).unwrap(),
    };
    let mut db = HoopsDatabase::new_in_memory().unwrap();
    let report = run_refresh(&mut db, &ctx, &tasks).await.unwrap();
    assert_eq!(
        report.written,
        vec![("matchups", 2), ("rosters", 3), ("schedule", 5), ("game_logs", 4)]
    );

    let params = ProjectParams {
        strict: true,
        ..ProjectParams::default()
    };
    let report = run_project(&mut db, &params).unwrap();
    assert_eq!(report.season, Season::new(2020));
    assert_eq!(report.week, Week::new(11));
    assert!(report.anomalies.is_empty(), "{:?}", report.anomalies);

    // George: 22.5 pts, 8.5/17.5 a game, two Clippers games left.
    // Washington: 15 pts, 6/12, 2/3 a game, two Hornets games left.
    let dunk_tank = &report.projected[0];
    assert_eq!(dunk_tank.team_name, "Dunk Tank");
    assert_eq!(dunk_tank.stat_type, StatType::Projected);
    assert_eq!(dunk_tank.totals.pts, 75.0);
    assert_eq!((dunk_tank.totals.fgm, dunk_tank.totals.fga), (29.0, 59.0));
    assert!((dunk_tank.totals.fg_pct.unwrap() - 29.0 / 59.0).abs() < 1e-9);
    assert!((dunk_tank.totals.ft_pct.unwrap() - 4.0 / 6.0).abs() < 1e-9);

    // Tatum is out for the week
    let brick_city = &report.projected[1];
    assert_eq!(brick_city.totals.pts, 0.0);
    assert_eq!(brick_city.totals.fg_pct, None);

    let stored = db
        .load_matchups(Season::new(2020), Week::new(11), None)
        .unwrap();
    assert_eq!(stored.len(), 4);
    let actual_pts: Vec<f64> = stored
        .iter()
        .filter(|r| r.stat_type == StatType::Actual)
        .map(|r| r.totals.pts)
        .collect();
    assert_eq!(actual_pts, vec![105.0, 105.0]);
}

#[tokio::test]
async fn test_failed_download_leaves_database_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = full_config(dir.path());
    let tasks = refresh_tasks(&config);
    let ctx = RefreshContext {
        config,
        nba: NbaClient::with_base_urls(&server.uri(), &server.uri()).unwrap(),
    };

    let mut db = HoopsDatabase::new_in_memory().unwrap();
    let result = run_refresh(&mut db, &ctx, &tasks).await;

    assert!(matches!(result, Err(HoopsError::Http(_))));
    assert!(db.load_rosters().unwrap().is_empty());
    assert!(db
        .load_matchups(Season::new(2020), Week::new(11), None)
        .unwrap()
        .is_empty());
}

use chrono::NaiveDate;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT},
    Client,
};
use std::time::Duration;
use tracing::{debug, info};

use super::types::{ScheduleFeed, StatsFeed};
use crate::{
    cli::types::Season,
    storage::models::{GameLogRow, ScheduleEntry},
    Result,
};


/// Base path of the static schedule documents, one per season start year.
pub const SCHEDULE_BASE_URL: &str = "http://data.nba.com/data/10s/v2015/json/mobile_teams/nba";

/// Base path of the stats API.
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// stats.nba.com drops requests that don't look like they came from its
/// own site.
fn stats_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    h.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36",
        ),
    );
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    h.insert("x-nba-stats-token", HeaderValue::from_static("true"));
    h
}

/// Client for the two NBA feeds the pipeline ingests.
#[derive(Debug, Clone)]
pub struct NbaClient {
    client: Client,
    schedule_base: String,
    stats_base: String,
}

impl NbaClient {
    pub fn new() -> Result<Self> {
        Self::with_base_urls(SCHEDULE_BASE_URL, STATS_BASE_URL)
    }

    /// Point the client somewhere else, e.g. a mock server.
    pub fn with_base_urls(schedule_base: &str, stats_base: &str) -> Result<Self> {
        let client = Client::builder()
            .default_headers(stats_headers())
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            schedule_base: schedule_base.trim_end_matches('/').to_string(),
            stats_base: stats_base.trim_end_matches('/').to_string(),
        })
    }

    /// Full regular-season schedule for the season starting in `season`.
    pub async fn fetch_schedule(&self, season: Season) -> Result<Vec<ScheduleEntry>> {
        let url = format!(
            "{}/{}/league/00_full_schedule.json",
            self.schedule_base,
            season.as_u16()
        );
        debug!(%url, "fetching schedule");

        let feed = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<ScheduleFeed>()
            .await?;

        let entries = feed.into_entries()?;
        info!(season = %season.label(), games = entries.len(), "schedule fetched");
        Ok(entries)
    }

    /// Player game logs for a season, or for a single day when `date` is set.
    pub async fn fetch_game_logs(
        &self,
        season: Season,
        date: Option<NaiveDate>,
    ) -> Result<Vec<GameLogRow>> {
        let url = format!("{}/playergamelogs", self.stats_base);
        let label = season.label();

        let mut params = vec![
            ("Season", label.clone()),
            ("SeasonType", "Regular Season".to_string()),
            ("LeagueID", "00".to_string()),
        ];
        if let Some(date) = date {
            let day = date.format("%m/%d/%Y").to_string();
            params.push(("DateFrom", day.clone()));
            params.push(("DateTo", day));
        }
        debug!(%url, season = %label, ?date, "fetching game logs");

        let feed = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<StatsFeed>()
            .await?;

        let rows = feed.into_game_logs()?;
        info!(season = %label, rows = rows.len(), "game logs fetched");
        Ok(rows)
    }
}

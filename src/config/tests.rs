//! Unit tests for refresh configuration

use super::*;

#[cfg(test)]
mod refresh_config_tests {
    use super::*;

    #[test]
    fn test_new_refreshes_nothing() {
        let config = RefreshConfig::new(Season::new(2020));
        assert!(config.is_empty());
        assert!(!config.needs_network());
    }

    #[test]
    fn test_each_toggle_counts() {
        let base = RefreshConfig::new(Season::new(2020));

        let mut config = base.clone();
        config.matchups = Some(PathBuf::from("scoreboard.json"));
        assert!(config.refresh_matchups());
        assert!(!config.is_empty());
        assert!(!config.needs_network());

        let mut config = base.clone();
        config.rosters = vec![PathBuf::from("t1.json"), PathBuf::from("t2.json")];
        assert!(config.refresh_rosters());
        assert!(!config.is_empty());

        let mut config = base.clone();
        config.schedule = ScheduleSource::File(PathBuf::from("schedule.json"));
        assert!(config.refresh_schedule());
        assert!(!config.needs_network());

        let mut config = base;
        config.game_logs = GameLogSource::FetchDay(NaiveDate::from_ymd_opt(2021, 1, 5).unwrap());
        assert!(config.refresh_game_logs());
        assert!(config.needs_network());
    }

    #[test]
    fn test_fetch_sources_need_network() {
        let mut config = RefreshConfig::new(Season::new(2020));
        config.schedule = ScheduleSource::Fetch;
        assert!(config.needs_network());

        config.schedule = ScheduleSource::Skip;
        config.game_logs = GameLogSource::FetchSeason;
        assert!(config.needs_network());
    }
}

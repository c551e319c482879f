//! Unit tests for CLI types and conversions

use super::*;
use chrono::NaiveDate;
use std::str::FromStr;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[cfg(test)]
mod season_tests {
    use super::*;

    #[test]
    fn test_season_label() {
        assert_eq!(Season::new(2020).label(), "2020-21");
        assert_eq!(Season::new(2009).label(), "2009-10");
        assert_eq!(Season::new(1999).label(), "1999-00");
    }

    #[test]
    fn test_season_from_str_year() {
        let season = Season::from_str("2021").unwrap();
        assert_eq!(season.as_u16(), 2021);
    }

    #[test]
    fn test_season_from_str_label() {
        let season = Season::from_str("2020-21").unwrap();
        assert_eq!(season, Season::new(2020));
    }

    #[test]
    fn test_season_from_label_mismatched_years() {
        assert!(Season::from_label("2020-23").is_err());
        assert!(Season::from_label("2020").is_err());
        assert!(Season::from_str("twenty").is_err());
    }

    #[test]
    fn test_season_containing() {
        assert_eq!(Season::containing(date(2021, 3, 1)), Season::new(2020));
        assert_eq!(Season::containing(date(2020, 12, 22)), Season::new(2020));
        assert_eq!(Season::containing(date(2021, 10, 19)), Season::new(2021));
    }

    #[test]
    fn test_season_serde() {
        let season = Season::new(2020);
        let json = serde_json::to_string(&season).unwrap();
        assert_eq!(json, "2020");
        let back: Season = serde_json::from_str(&json).unwrap();
        assert_eq!(back, season);
    }
}

#[cfg(test)]
mod week_tests {
    use super::*;

    #[test]
    fn test_week_from_str() {
        assert_eq!(Week::from_str("11").unwrap(), Week::new(11));
        assert!(Week::from_str("-1").is_err());
    }

    #[test]
    fn test_week_display() {
        assert_eq!(Week::new(7).to_string(), "7");
    }

    #[test]
    fn test_week_ordering() {
        assert!(Week::new(2) < Week::new(10));
    }
}

#[cfg(test)]
mod period_tests {
    use super::*;

    #[test]
    fn test_period_contains_is_inclusive() {
        let period = ScoringPeriod::new(Week::new(11), date(2021, 3, 1), date(2021, 3, 7));
        assert!(period.contains(date(2021, 3, 1)));
        assert!(period.contains(date(2021, 3, 4)));
        assert!(period.contains(date(2021, 3, 7)));
        assert!(!period.contains(date(2021, 2, 28)));
        assert!(!period.contains(date(2021, 3, 8)));
    }
}

#[test]
fn test_player_id() {
    let id = PlayerId::new(203999);
    assert_eq!(id.as_u64(), 203999);
    assert_eq!(id.to_string(), "203999");
}

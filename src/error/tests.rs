//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod hoops_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = HoopsError::from(json_error);

        match error {
            HoopsError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = HoopsError::from(io_error);

        match error {
            HoopsError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_database_error_conversion() {
        let error = HoopsError::from(rusqlite::Error::QueryReturnedNoRows);
        assert!(matches!(error, HoopsError::Database(_)));
        assert!(error.to_string().starts_with("Database error"));
    }

    #[test]
    fn test_date_error_conversion() {
        let parse_error = chrono::NaiveDate::parse_from_str("2021-13-45", "%Y-%m-%d").unwrap_err();
        let error = HoopsError::from(parse_error);
        assert!(matches!(error, HoopsError::InvalidDate(_)));
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u16>().unwrap_err();
        let error = HoopsError::from(parse_error);
        assert!(matches!(error, HoopsError::InvalidNumber(_)));
    }

    #[test]
    fn test_feed_error_names_source() {
        let error = HoopsError::feed("NBA schedule", "missing lscd");
        let error_string = error.to_string();
        assert!(error_string.contains("NBA schedule"));
        assert!(error_string.contains("missing lscd"));
    }

    #[test]
    fn test_missing_period_error() {
        let error = HoopsError::MissingPeriod {
            season: 2020,
            week: 11,
        };
        assert_eq!(
            error.to_string(),
            "No matchup rows stored for season 2020, week 11"
        );
    }

    #[test]
    fn test_join_mismatch_lists_every_name() {
        let error = HoopsError::JoinMismatch {
            mismatches: vec![
                "team 'LA Clippers' appears in roster but not in schedule".to_string(),
                "fantasy team 'Ghost' has no matchup row this week".to_string(),
            ],
        };
        let error_string = error.to_string();
        assert!(error_string.starts_with("2 name(s)"));
        assert!(error_string.contains("LA Clippers"));
        assert!(error_string.contains("Ghost"));
    }

    #[test]
    fn test_merge_consistency_error() {
        let error = HoopsError::MergeConsistency {
            message: "duplicate projection for matchup 1 team t.1".to_string(),
        };
        assert!(error.to_string().contains("Projected rows rejected"));
    }

    #[test]
    fn test_invalid_position_error() {
        let error = HoopsError::InvalidPosition {
            position: "QB".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Invalid position"));
        assert!(error_string.contains("QB"));
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = HoopsError::from(io_error);

        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_error_debug_formatting() {
        let error = HoopsError::MissingSeason;
        let debug_string = format!("{:?}", error);
        assert_eq!(debug_string, "MissingSeason");
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(HoopsError::MissingSeason)
        }

        match test_function().unwrap_err() {
            HoopsError::MissingSeason => (),
            _ => panic!("Expected MissingSeason error"),
        }
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let anyhow_error = anyhow::anyhow!("Test anyhow error message");
        let error = HoopsError::from(anyhow_error);

        match error {
            HoopsError::Storage { message } => {
                assert!(message.contains("Test anyhow error message"));
            }
            _ => panic!("Expected Storage error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_keeps_wrapped_hoops_error() {
        let anyhow_error = anyhow::Error::new(HoopsError::InconsistentPeriod { week: 3 });
        let error = HoopsError::from(anyhow_error);
        assert!(matches!(error, HoopsError::InconsistentPeriod { week: 3 }));
    }

    #[test]
    fn test_anyhow_error_keeps_database_error() {
        let anyhow_error = anyhow::Error::new(rusqlite::Error::QueryReturnedNoRows);
        let error = HoopsError::from(anyhow_error);
        assert!(matches!(
            error,
            HoopsError::Database(rusqlite::Error::QueryReturnedNoRows)
        ));
    }
}

//! Fantasy basketball position types.

use crate::error::HoopsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Yahoo fantasy basketball roster positions.
///
/// # Position Types
///
/// - **Individual positions**: PG, SG, SF, PF, C
/// - **Flexible positions**: G (PG/SG), F (SF/PF), UTIL (any)
/// - **Roster slots**: BN (bench), IL and IL+ (injured list)
///
/// # Examples
///
/// ```rust
/// use fantasy_hoops::Position;
///
/// let pg: Position = "PG".parse().unwrap();
/// assert_eq!(pg, Position::PG);
/// assert_eq!(Position::ILPlus.to_string(), "IL+");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    PG,
    SG,
    G,
    SF,
    PF,
    F,
    C,
    Util,
    BN,
    IL,
    ILPlus,
}

impl Position {
    /// Whether this is a lineup slot rather than a playing position.
    pub fn is_roster_slot(&self) -> bool {
        matches!(
            self,
            Position::Util | Position::BN | Position::IL | Position::ILPlus
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::PG => "PG",
            Position::SG => "SG",
            Position::G => "G",
            Position::SF => "SF",
            Position::PF => "PF",
            Position::F => "F",
            Position::C => "C",
            Position::Util => "Util",
            Position::BN => "BN",
            Position::IL => "IL",
            Position::ILPlus => "IL+",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = HoopsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PG" => Ok(Position::PG),
            "SG" => Ok(Position::SG),
            "G" => Ok(Position::G),
            "SF" => Ok(Position::SF),
            "PF" => Ok(Position::PF),
            "F" => Ok(Position::F),
            "C" => Ok(Position::C),
            "UTIL" => Ok(Position::Util),
            "BN" | "BENCH" => Ok(Position::BN),
            "IL" => Ok(Position::IL),
            "IL+" | "IL_PLUS" => Ok(Position::ILPlus),
            _ => Err(HoopsError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_string_round_trip() {
        for pos in [
            Position::PG,
            Position::SG,
            Position::G,
            Position::SF,
            Position::PF,
            Position::F,
            Position::C,
            Position::Util,
            Position::BN,
            Position::IL,
            Position::ILPlus,
        ] {
            assert_eq!(pos.to_string().parse::<Position>().unwrap(), pos);
        }
    }

    #[test]
    fn test_position_parse_is_case_insensitive() {
        assert_eq!("util".parse::<Position>().unwrap(), Position::Util);
        assert_eq!(" c ".parse::<Position>().unwrap(), Position::C);
        assert_eq!("IL_plus".parse::<Position>().unwrap(), Position::ILPlus);
    }

    #[test]
    fn test_invalid_position() {
        match "QB".parse::<Position>() {
            Err(HoopsError::InvalidPosition { position }) => assert_eq!(position, "QB"),
            other => panic!("Expected InvalidPosition, got {:?}", other),
        }
    }

    #[test]
    fn test_roster_slots() {
        assert!(Position::BN.is_roster_slot());
        assert!(Position::ILPlus.is_roster_slot());
        assert!(!Position::PG.is_roster_slot());
        assert!(!Position::F.is_roster_slot());
    }
}

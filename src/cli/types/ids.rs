//! ID types for NBA and Yahoo data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for NBA stats player IDs.
///
/// # Examples
///
/// ```rust
/// use fantasy_hoops::PlayerId;
///
/// let id = PlayerId::new(1629029);
/// assert_eq!(id.as_u64(), 1629029);
/// assert_eq!(id.to_string(), "1629029");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

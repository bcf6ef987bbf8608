//! Derived standings models.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Direction in which standings are ranked by win count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StandingsOrder {
    /// Fewest wins first.
    #[default]
    Ascending,
    /// Most wins first.
    Descending,
}

impl std::fmt::Display for StandingsOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StandingsOrder::Ascending => write!(f, "ascending"),
            StandingsOrder::Descending => write!(f, "descending"),
        }
    }
}

/// One player's aggregated record. Recomputed on every query, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches_played: u32,
}

impl StandingRow {
    /// A row for a player with no matches yet.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            wins: 0,
            matches_played: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_row_is_empty() {
        let row = StandingRow::new(PlayerId::new(1), "Alice");
        assert_eq!(row.wins, 0);
        assert_eq!(row.matches_played, 0);
    }

    #[test]
    fn test_order_default_and_display() {
        assert_eq!(StandingsOrder::default(), StandingsOrder::Ascending);
        assert_eq!(StandingsOrder::Descending.to_string(), "descending");
    }

    #[test]
    fn test_order_serde_lowercase() {
        let json = serde_json::to_string(&StandingsOrder::Descending).unwrap();
        assert_eq!(json, "\"descending\"");
    }
}

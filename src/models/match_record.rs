//! Match model — the recorded outcome of one game between two players.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MatchId, PlayerId};

/// A single reported match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Store-assigned identifier
    pub id: MatchId,

    /// First participant
    pub player1: PlayerId,

    /// Second participant
    pub player2: PlayerId,

    /// Winner; always one of the two participants
    pub winner: PlayerId,

    /// When the result was recorded
    pub recorded_at: DateTime<Utc>,
}

impl Match {
    pub fn new(id: MatchId, player1: PlayerId, player2: PlayerId, winner: PlayerId) -> Self {
        Self {
            id,
            player1,
            player2,
            winner,
            recorded_at: Utc::now(),
        }
    }

    /// Whether the given player took part in this match.
    pub fn involves(&self, player: PlayerId) -> bool {
        self.player1 == player || self.player2 == player
    }

    /// Whether the winner is one of the two participants.
    pub fn has_valid_winner(&self) -> bool {
        self.involves(self.winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Match {
        Match::new(
            MatchId::new(1),
            PlayerId::new(1),
            PlayerId::new(2),
            PlayerId::new(1),
        )
    }

    #[test]
    fn test_match_involves() {
        let m = sample();
        assert!(m.involves(PlayerId::new(1)));
        assert!(m.involves(PlayerId::new(2)));
        assert!(!m.involves(PlayerId::new(3)));
    }

    #[test]
    fn test_match_valid_winner() {
        assert!(sample().has_valid_winner());

        let mut bad = sample();
        bad.winner = PlayerId::new(9);
        assert!(!bad.has_valid_winner());
    }

    #[test]
    fn test_match_serialization() {
        let m = sample();
        let json = serde_json::to_string(&m).unwrap();
        let deserialized: Match = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}

//! Pairing model — one proposed match for the next round.

use serde::{Deserialize, Serialize};

use super::{PlayerId, StandingRow};

/// Two players drawn against each other for the next round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub player1_id: PlayerId,
    pub player1_name: String,
    pub player2_id: PlayerId,
    pub player2_name: String,
}

impl Pairing {
    /// Pair two adjacent standings rows.
    pub fn from_rows(first: &StandingRow, second: &StandingRow) -> Self {
        Self {
            player1_id: first.id,
            player1_name: first.name.clone(),
            player2_id: second.id,
            player2_name: second.name.clone(),
        }
    }

    /// Both player ids, in pairing order.
    pub fn ids(&self) -> (PlayerId, PlayerId) {
        (self.player1_id, self.player2_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairing_from_rows() {
        let alice = StandingRow::new(PlayerId::new(1), "Alice");
        let bob = StandingRow::new(PlayerId::new(2), "Bob");

        let pairing = Pairing::from_rows(&alice, &bob);

        assert_eq!(pairing.player1_name, "Alice");
        assert_eq!(pairing.player2_name, "Bob");
        assert_eq!(pairing.ids(), (PlayerId::new(1), PlayerId::new(2)));
    }

    #[test]
    fn test_pairing_serialization() {
        let pairing = Pairing::from_rows(
            &StandingRow::new(PlayerId::new(3), "Carol"),
            &StandingRow::new(PlayerId::new(4), "Dave"),
        );

        let json = serde_json::to_string(&pairing).unwrap();
        let deserialized: Pairing = serde_json::from_str(&json).unwrap();
        assert_eq!(pairing, deserialized);
    }
}

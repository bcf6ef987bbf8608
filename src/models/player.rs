//! Player model — a registered tournament entrant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PlayerId;

/// A registered player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Store-assigned identifier
    pub id: PlayerId,

    /// Full name as registered (need not be unique)
    pub name: String,

    /// When the player was registered
    pub registered_at: DateTime<Utc>,
}

impl Player {
    /// Create a player record for an id handed out by a store.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            registered_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let player = Player::new(PlayerId::new(1), "Alice");
        assert_eq!(player.id, PlayerId::new(1));
        assert_eq!(player.name, "Alice");
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new(PlayerId::new(4), "Dave");
        let json = serde_json::to_string(&player).unwrap();
        assert!(json.contains("\"id\":4"));

        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}

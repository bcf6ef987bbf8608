//! Persistence for players and matches.
//!
//! The tournament logic never talks to files or databases directly; it goes
//! through the [`MatchStore`] trait. Two implementations ship here:
//! - [`memory::InMemoryStore`] for tests and throwaway tournaments
//! - [`jsonl::JsonlStore`] backed by JSONL files in a data directory

pub mod jsonl;
pub mod memory;

pub use jsonl::{EntityType, JsonlReader, JsonlStore, JsonlWriter};
pub use memory::InMemoryStore;

use std::path::PathBuf;
use thiserror::Error;

use crate::models::{Match, MatchId, Player, PlayerId};

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown player id: {0}")]
    UnknownPlayer(PlayerId),

    #[error("Winner {winner} is not a participant of match {player1} vs {player2}")]
    InvalidWinner {
        winner: PlayerId,
        player1: PlayerId,
        player2: PlayerId,
    },

    #[error("Player {0} cannot be recorded against themselves")]
    SelfMatch(PlayerId),

    #[error("Cannot delete players while {0} matches reference them")]
    PlayersReferenced(usize),
}

/// The persistence collaborator for tournament data.
///
/// Ids are handed out like a database serial column: starting at 1,
/// increasing, and never reused after a bulk delete.
pub trait MatchStore {
    /// All registered players, ordered by id.
    fn list_players(&self) -> Result<Vec<Player>, StorageError>;

    /// All recorded matches, ordered by id.
    fn list_matches(&self) -> Result<Vec<Match>, StorageError>;

    /// Register a player and return the assigned id.
    fn insert_player(&mut self, name: &str) -> Result<PlayerId, StorageError>;

    /// Record a match. Both participants must exist, differ from each other,
    /// and the winner must be one of them.
    fn insert_match(
        &mut self,
        player1: PlayerId,
        player2: PlayerId,
        winner: PlayerId,
    ) -> Result<MatchId, StorageError>;

    /// Remove every match. Idempotent.
    fn delete_all_matches(&mut self) -> Result<(), StorageError>;

    /// Remove every player. Idempotent, but refused while matches exist.
    fn delete_all_players(&mut self) -> Result<(), StorageError>;

    fn count_players(&self) -> Result<usize, StorageError>;
}

/// Check a prospective match against the registered players.
pub(crate) fn validate_match(
    players: &[Player],
    player1: PlayerId,
    player2: PlayerId,
    winner: PlayerId,
) -> Result<(), StorageError> {
    for id in [player1, player2] {
        if !players.iter().any(|p| p.id == id) {
            return Err(StorageError::UnknownPlayer(id));
        }
    }

    if player1 == player2 {
        return Err(StorageError::SelfMatch(player1));
    }

    if winner != player1 && winner != player2 {
        return Err(StorageError::InvalidWinner {
            winner,
            player1,
            player2,
        });
    }

    Ok(())
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn tournament_dir(&self) -> PathBuf {
        self.data_dir.join("tournament")
    }

    pub fn state_dir(&self) -> PathBuf {
        self.data_dir.join("state")
    }

    pub fn sequences_path(&self) -> PathBuf {
        self.state_dir().join("sequences.json")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_paths() {
        let config = StorageConfig::new(PathBuf::from("/data"));

        assert_eq!(config.tournament_dir(), PathBuf::from("/data/tournament"));
        assert_eq!(config.state_dir(), PathBuf::from("/data/state"));
        assert_eq!(
            config.sequences_path(),
            PathBuf::from("/data/state/sequences.json")
        );
    }

    #[test]
    fn test_storage_config_default() {
        let config = StorageConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("./data"));
    }

    #[test]
    fn test_validate_match() {
        let players = vec![
            Player::new(PlayerId::new(1), "Alice"),
            Player::new(PlayerId::new(2), "Bob"),
        ];
        let (a, b) = (PlayerId::new(1), PlayerId::new(2));

        assert!(validate_match(&players, a, b, a).is_ok());
        assert!(validate_match(&players, a, b, b).is_ok());
        assert!(matches!(
            validate_match(&players, a, PlayerId::new(3), a),
            Err(StorageError::UnknownPlayer(id)) if id == PlayerId::new(3)
        ));
        assert!(matches!(
            validate_match(&players, a, b, PlayerId::new(3)),
            Err(StorageError::InvalidWinner { .. })
        ));
        assert!(matches!(
            validate_match(&players, a, a, a),
            Err(StorageError::SelfMatch(id)) if id == a
        ));
    }
}

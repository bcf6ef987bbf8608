//! In-memory store.

use tracing::debug;

use super::{validate_match, MatchStore, StorageError};
use crate::models::{Match, MatchId, Player, PlayerId};

/// A `Vec`-backed [`MatchStore`]. Contents live as long as the value.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    players: Vec<Player>,
    matches: Vec<Match>,
    next_player_id: u32,
    next_match_id: u32,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            matches: Vec::new(),
            next_player_id: 1,
            next_match_id: 1,
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchStore for InMemoryStore {
    fn list_players(&self) -> Result<Vec<Player>, StorageError> {
        Ok(self.players.clone())
    }

    fn list_matches(&self) -> Result<Vec<Match>, StorageError> {
        Ok(self.matches.clone())
    }

    fn insert_player(&mut self, name: &str) -> Result<PlayerId, StorageError> {
        let id = PlayerId::new(self.next_player_id);
        self.next_player_id += 1;
        self.players.push(Player::new(id, name));
        debug!("Inserted player {} ({})", id, name);
        Ok(id)
    }

    fn insert_match(
        &mut self,
        player1: PlayerId,
        player2: PlayerId,
        winner: PlayerId,
    ) -> Result<MatchId, StorageError> {
        validate_match(&self.players, player1, player2, winner)?;

        let id = MatchId::new(self.next_match_id);
        self.next_match_id += 1;
        self.matches.push(Match::new(id, player1, player2, winner));
        debug!("Inserted match {}: {} vs {}", id, player1, player2);
        Ok(id)
    }

    fn delete_all_matches(&mut self) -> Result<(), StorageError> {
        self.matches.clear();
        Ok(())
    }

    fn delete_all_players(&mut self) -> Result<(), StorageError> {
        if !self.matches.is_empty() {
            return Err(StorageError::PlayersReferenced(self.matches.len()));
        }
        self.players.clear();
        Ok(())
    }

    fn count_players(&self) -> Result<usize, StorageError> {
        Ok(self.players.len())
    }
}

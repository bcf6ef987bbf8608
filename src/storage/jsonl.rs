//! JSONL (JSON Lines) storage.
//!
//! Players and matches each live in their own `.jsonl` file, one JSON object
//! per line. Inserts append; bulk deletes truncate. The id sequences are kept
//! in a small JSON state file so ids survive resets and restarts.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{validate_match, MatchStore, StorageConfig, StorageError};
use crate::models::{Match, MatchId, Player, PlayerId};

/// Entity types for JSONL storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Player,
    Match,
}

impl EntityType {
    /// Get the filename for this entity type.
    pub fn filename(&self) -> &'static str {
        match self {
            EntityType::Player => "players.jsonl",
            EntityType::Match => "matches.jsonl",
        }
    }
}

/// Get the path for an entity file.
pub fn entity_path(config: &StorageConfig, entity: EntityType) -> PathBuf {
    config.tournament_dir().join(entity.filename())
}

/// JSONL file writer.
pub struct JsonlWriter<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Serialize> JsonlWriter<T> {
    /// Create a new JSONL writer for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    pub fn for_entity(config: &StorageConfig, entity: EntityType) -> Self {
        Self::new(entity_path(config, entity))
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Append a single entity to the file.
    pub fn append(&self, entity: &T) -> Result<(), StorageError> {
        self.ensure_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = BufWriter::new(file);
        let json = serde_json::to_string(entity)?;
        writeln!(writer, "{}", json)?;
        writer.flush()?;

        debug!("Appended entity to {:?}", self.path);
        Ok(())
    }

    /// Write entities, replacing the entire file. An empty slice truncates it.
    pub fn write_all(&self, entities: &[T]) -> Result<usize, StorageError> {
        self.ensure_dir()?;

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);

        for entity in entities {
            let json = serde_json::to_string(entity)?;
            writeln!(writer, "{}", json)?;
        }

        writer.flush()?;
        info!("Wrote {} entities to {:?}", entities.len(), self.path);

        Ok(entities.len())
    }
}

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    /// Create a new JSONL reader for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    pub fn for_entity(config: &StorageConfig, entity: EntityType) -> Self {
        Self::new(entity_path(config, entity))
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read all entities from the file. Lines that fail to parse are logged
    /// and skipped; a missing file reads as empty.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        self.read_entities(false)
    }

    /// Like [`read_all`](Self::read_all), but an unparseable line is an error.
    pub fn read_all_strict(&self) -> Result<Vec<T>, StorageError> {
        self.read_entities(true)
    }

    fn read_entities(&self, strict: bool) -> Result<Vec<T>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut entities = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(entity) => entities.push(entity),
                Err(e) if strict => return Err(StorageError::Json(e)),
                Err(e) => {
                    warn!("Failed to parse line {} in {:?}: {}", idx + 1, self.path, e);
                }
            }
        }

        debug!("Read {} entities from {:?}", entities.len(), self.path);
        Ok(entities)
    }

    /// Count parseable entities in the file.
    pub fn count(&self) -> Result<usize, StorageError> {
        Ok(self.read_all()?.len())
    }
}

/// Next values of the player and match id sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct Sequences {
    next_player_id: u32,
    next_match_id: u32,
}

impl Sequences {
    /// Sequences implied by the highest ids already on disk.
    fn derive(players: &[Player], matches: &[Match]) -> Self {
        let max_player = players.iter().map(|p| p.id.get()).max().unwrap_or(0);
        let max_match = matches.iter().map(|m| m.id.get()).max().unwrap_or(0);
        Self {
            next_player_id: max_player + 1,
            next_match_id: max_match + 1,
        }
    }

    /// Never hand out an id at or below one already in use.
    fn max(self, other: Self) -> Self {
        Self {
            next_player_id: self.next_player_id.max(other.next_player_id),
            next_match_id: self.next_match_id.max(other.next_match_id),
        }
    }
}

/// A [`MatchStore`] persisted as JSONL files under a data directory.
pub struct JsonlStore {
    config: StorageConfig,
    sequences: Sequences,
}

impl JsonlStore {
    /// Open (or lazily create) a store rooted at `config.data_dir`.
    pub fn open(config: StorageConfig) -> Result<Self, StorageError> {
        let players = JsonlReader::for_entity(&config, EntityType::Player).read_all_strict()?;
        let matches = JsonlReader::for_entity(&config, EntityType::Match).read_all_strict()?;
        let mut sequences = Sequences::derive(&players, &matches);

        let path = config.sequences_path();
        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let stored: Sequences = serde_json::from_str(&contents)?;
            let merged = stored.max(sequences);
            if merged != stored {
                warn!("Sequence file {:?} is behind the data on disk, advancing it", path);
            }
            sequences = merged;
        }

        info!(
            "Opened JSONL store at {:?} (next player id {}, next match id {})",
            config.data_dir, sequences.next_player_id, sequences.next_match_id
        );

        Ok(Self { config, sequences })
    }

    fn players(&self) -> JsonlReader<Player> {
        JsonlReader::for_entity(&self.config, EntityType::Player)
    }

    fn matches(&self) -> JsonlReader<Match> {
        JsonlReader::for_entity(&self.config, EntityType::Match)
    }

    fn save_sequences(&self) -> Result<(), StorageError> {
        let path = self.config.sequences_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(&self.sequences)?)?;
        Ok(())
    }
}

impl MatchStore for JsonlStore {
    fn list_players(&self) -> Result<Vec<Player>, StorageError> {
        let mut players = self.players().read_all_strict()?;
        players.sort_by_key(|p| p.id);
        Ok(players)
    }

    fn list_matches(&self) -> Result<Vec<Match>, StorageError> {
        let mut matches = self.matches().read_all_strict()?;
        matches.sort_by_key(|m| m.id);
        Ok(matches)
    }

    fn insert_player(&mut self, name: &str) -> Result<PlayerId, StorageError> {
        let id = PlayerId::new(self.sequences.next_player_id);
        // The sequence advances even if the append below fails, as a
        // database serial would.
        self.sequences.next_player_id += 1;
        self.save_sequences()?;

        JsonlWriter::for_entity(&self.config, EntityType::Player).append(&Player::new(id, name))?;
        Ok(id)
    }

    fn insert_match(
        &mut self,
        player1: PlayerId,
        player2: PlayerId,
        winner: PlayerId,
    ) -> Result<MatchId, StorageError> {
        let players = self.players().read_all_strict()?;
        validate_match(&players, player1, player2, winner)?;

        let id = MatchId::new(self.sequences.next_match_id);
        self.sequences.next_match_id += 1;
        self.save_sequences()?;

        JsonlWriter::for_entity(&self.config, EntityType::Match)
            .append(&Match::new(id, player1, player2, winner))?;
        Ok(id)
    }

    fn delete_all_matches(&mut self) -> Result<(), StorageError> {
        if !self.matches().exists() {
            return Ok(());
        }
        JsonlWriter::<Match>::for_entity(&self.config, EntityType::Match).write_all(&[])?;
        Ok(())
    }

    fn delete_all_players(&mut self) -> Result<(), StorageError> {
        let remaining = self.matches().read_all_strict()?.len();
        if remaining > 0 {
            return Err(StorageError::PlayersReferenced(remaining));
        }
        if !self.players().exists() {
            return Ok(());
        }
        JsonlWriter::<Player>::for_entity(&self.config, EntityType::Player).write_all(&[])?;
        Ok(())
    }

    fn count_players(&self) -> Result<usize, StorageError> {
        Ok(self.players().read_all_strict()?.len())
    }
}

//! Tournament operations over an injected [`MatchStore`].
//!
//! Every function takes the store handle explicitly; there is no global
//! connection or cached state. Standings are recomputed from the store on
//! each call, so a reported match is visible to the next query.

use thiserror::Error;
use tracing::{debug, info};

use crate::calculate::{compute_standings, generate_pairings};
use crate::models::{MatchId, Pairing, PlayerId, StandingRow, StandingsOrder};
use crate::storage::{MatchStore, StorageError};

/// Errors surfaced by tournament operations.
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("Player {0} is not registered")]
    InvalidPlayer(PlayerId),

    #[error("Player {0} cannot play against themselves")]
    SelfMatch(PlayerId),

    #[error("Cannot pair an odd number of players ({count})")]
    OddPlayerCount { count: usize },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Register a new player. The store assigns the id.
pub fn register_player<S>(store: &mut S, name: &str) -> Result<PlayerId, TournamentError>
where
    S: MatchStore + ?Sized,
{
    let id = store.insert_player(name)?;
    info!("Registered player {} as {}", name, id);
    Ok(id)
}

/// Number of currently registered players.
pub fn count_players<S>(store: &S) -> Result<usize, TournamentError>
where
    S: MatchStore + ?Sized,
{
    Ok(store.count_players()?)
}

/// Remove every match record.
pub fn delete_matches<S>(store: &mut S) -> Result<(), TournamentError>
where
    S: MatchStore + ?Sized,
{
    store.delete_all_matches()?;
    info!("Deleted all matches");
    Ok(())
}

/// Remove every player record. Matches must be deleted first.
pub fn delete_players<S>(store: &mut S) -> Result<(), TournamentError>
where
    S: MatchStore + ?Sized,
{
    store.delete_all_players()?;
    info!("Deleted all players");
    Ok(())
}

/// Record the outcome of a single match between two registered players.
pub fn report_match<S>(
    store: &mut S,
    winner: PlayerId,
    loser: PlayerId,
) -> Result<MatchId, TournamentError>
where
    S: MatchStore + ?Sized,
{
    if winner == loser {
        return Err(TournamentError::SelfMatch(winner));
    }

    let players = store.list_players()?;
    for id in [winner, loser] {
        if !players.iter().any(|p| p.id == id) {
            return Err(TournamentError::InvalidPlayer(id));
        }
    }

    let match_id = store.insert_match(winner, loser, winner)?;
    info!("Recorded match {}: {} beat {}", match_id, winner, loser);
    Ok(match_id)
}

/// Current standings of every registered player.
pub fn player_standings<S>(
    store: &S,
    order: StandingsOrder,
) -> Result<Vec<StandingRow>, TournamentError>
where
    S: MatchStore + ?Sized,
{
    let players = store.list_players()?;
    let matches = store.list_matches()?;
    let standings = compute_standings(&players, &matches, order);

    debug!(
        "Computed {} standings from {} matches ({} order)",
        standings.len(),
        matches.len(),
        order
    );
    Ok(standings)
}

/// Pairings for the next round, each player drawn against the adjacent
/// player in the standings.
pub fn swiss_pairings<S>(store: &S, order: StandingsOrder) -> Result<Vec<Pairing>, TournamentError>
where
    S: MatchStore + ?Sized,
{
    let standings = player_standings(store, order)?;
    let pairings = generate_pairings(&standings)?;
    debug!("Generated {} pairings", pairings.len());
    Ok(pairings)
}

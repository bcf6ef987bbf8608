//! Standings and pairing calculation.
//!
//! Both functions are pure: they take already-loaded players and matches and
//! never touch the store.
//! - Standings: group-by-count of wins and appearances per player
//! - Pairings: positional Swiss pairing over the ranked standings

use std::collections::HashMap;

use crate::models::{Match, Pairing, Player, PlayerId, StandingRow, StandingsOrder};
use crate::tournament::TournamentError;

/// Compute the ranked standings for every player.
///
/// Rows are ordered by wins in the requested direction, with ties broken by
/// player id ascending. Matches naming ids outside `players` are ignored.
pub fn compute_standings(
    players: &[Player],
    matches: &[Match],
    order: StandingsOrder,
) -> Vec<StandingRow> {
    let mut rows: Vec<StandingRow> = players
        .iter()
        .map(|p| StandingRow::new(p.id, p.name.clone()))
        .collect();

    let index: HashMap<PlayerId, usize> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| (row.id, i))
        .collect();

    for m in matches {
        for id in [m.player1, m.player2] {
            if let Some(&i) = index.get(&id) {
                rows[i].matches_played += 1;
            }
        }
        if !m.has_valid_winner() {
            continue;
        }
        if let Some(&i) = index.get(&m.winner) {
            rows[i].wins += 1;
        }
    }

    match order {
        StandingsOrder::Ascending => {
            rows.sort_by(|a, b| a.wins.cmp(&b.wins).then(a.id.cmp(&b.id)))
        }
        StandingsOrder::Descending => {
            rows.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.id.cmp(&b.id)))
        }
    }

    rows
}

/// Pair adjacent rows of the standings: (0,1), (2,3), ...
///
/// Requires an even number of rows. Nothing is returned for odd input.
pub fn generate_pairings(standings: &[StandingRow]) -> Result<Vec<Pairing>, TournamentError> {
    if standings.len() % 2 != 0 {
        return Err(TournamentError::OddPlayerCount {
            count: standings.len(),
        });
    }

    Ok(standings
        .chunks_exact(2)
        .map(|pair| Pairing::from_rows(&pair[0], &pair[1]))
        .collect())
}

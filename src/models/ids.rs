//! Store-assigned integer identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a registered player, assigned by the store.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(u32);

/// Identifier of a recorded match, assigned by the store.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(u32);

impl PlayerId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw sequence value.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl MatchId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw sequence value.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlayerId({})", self.0)
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MatchId({})", self.0)
    }
}

impl From<u32> for PlayerId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<u32> for MatchId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

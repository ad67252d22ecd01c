//! Player identities and the unordered pair used to scope a world record.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical player name as reported by the host.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unordered pair of two distinct players.
///
/// Stored sorted so that `{A, B}` and `{B, A}` compare, hash and serialize
/// identically. Serialized as a two-element array.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[PlayerId; 2]", into = "[PlayerId; 2]")]
pub struct PlayerPair {
    low: PlayerId,
    high: PlayerId,
}

impl PlayerPair {
    /// Returns `None` when both ids name the same player.
    pub fn new(a: PlayerId, b: PlayerId) -> Option<Self> {
        match a.cmp(&b) {
            Ordering::Less => Some(Self { low: a, high: b }),
            Ordering::Greater => Some(Self { low: b, high: a }),
            Ordering::Equal => None,
        }
    }

    /// True iff `{a, b}` is exactly this pair, in either order.
    pub fn matches(&self, a: &PlayerId, b: &PlayerId) -> bool {
        (self.low == *a && self.high == *b) || (self.low == *b && self.high == *a)
    }

    /// Both players, in sorted order.
    pub fn players(&self) -> (&PlayerId, &PlayerId) {
        (&self.low, &self.high)
    }
}

impl TryFrom<[PlayerId; 2]> for PlayerPair {
    type Error = String;

    fn try_from([a, b]: [PlayerId; 2]) -> Result<Self, Self::Error> {
        let duplicate = a.to_string();
        Self::new(a, b).ok_or_else(|| {
            format!("player scope must name two distinct players, got '{duplicate}' twice")
        })
    }
}

impl From<PlayerPair> for [PlayerId; 2] {
    fn from(pair: PlayerPair) -> Self {
        [pair.low, pair.high]
    }
}

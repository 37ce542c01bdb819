//! Player identification for two-player games.
//!
//! ## PlayerId
//!
//! Exactly two identities, `P1` and `P2`. Every position has one of them as
//! its mover; applying a move hands the turn to `other()`.

use serde::{Deserialize, Serialize};

/// One of the two players of a zero-sum game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// The first player.
    P1,
    /// The second player.
    P2,
}

impl PlayerId {
    /// Both players, first player first.
    pub const ALL: [PlayerId; 2] = [PlayerId::P1, PlayerId::P2];

    /// The opponent of this player.
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerId::P1 => PlayerId::P2,
            PlayerId::P2 => PlayerId::P1,
        }
    }

    /// The player who moves first, given whether P1 starts.
    #[must_use]
    pub const fn starting(p1_starts: bool) -> Self {
        if p1_starts {
            PlayerId::P1
        } else {
            PlayerId::P2
        }
    }

    /// Single-character mark used when rendering claimed cells.
    #[must_use]
    pub const fn mark(self) -> char {
        match self {
            PlayerId::P1 => '1',
            PlayerId::P2 => '2',
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::P1 => write!(f, "p1"),
            PlayerId::P2 => write!(f, "p2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_involution() {
        for player in PlayerId::ALL {
            assert_ne!(player.other(), player);
            assert_eq!(player.other().other(), player);
        }
    }

    #[test]
    fn test_player_id_basics() {
        assert_eq!(format!("{}", PlayerId::P1), "p1");
        assert_eq!(format!("{}", PlayerId::P2), "p2");
        assert_eq!(PlayerId::P2.mark(), '2');
    }

    #[test]
    fn test_starting_player() {
        assert_eq!(PlayerId::starting(true), PlayerId::P1);
        assert_eq!(PlayerId::starting(false), PlayerId::P2);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&PlayerId::P2).unwrap();
        let deserialized: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, PlayerId::P2);
    }
}

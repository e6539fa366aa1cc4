//! Player symbols and display names.
//!
//! This module contains:
//! - The two player symbols and their strict alternation
//! - The roster of display names shown by the presentation layer

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two players, identified by the mark they place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Places "X" and always moves first
    First,
    /// Places "O"
    Second,
}

impl Player {
    /// Both players in turn order
    pub const ALL: [Player; 2] = [Player::First, Player::Second];

    /// The mark this player writes on the board
    pub fn mark(&self) -> &'static str {
        match self {
            Player::First => "X",
            Player::Second => "O",
        }
    }

    /// The player who moves after this one
    pub fn opponent(&self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mark())
    }
}

/// Display names for the two players.
///
/// Names default to non-empty placeholders so a session is renderable
/// before anyone has entered a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Name shown for the first player
    pub player1: String,
    /// Name shown for the second player
    pub player2: String,
}

impl Roster {
    /// Create a roster with the given names
    pub fn new(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
        }
    }

    /// The display name for a player
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::First => &self.player1,
            Player::Second => &self.player2,
        }
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new("Alpha", "Gamma")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks() {
        assert_eq!(Player::First.mark(), "X");
        assert_eq!(Player::Second.mark(), "O");
        assert_eq!(Player::First.to_string(), "X");
    }

    #[test]
    fn test_opponent_alternates() {
        for player in Player::ALL {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_default_roster_names_non_empty() {
        let roster = Roster::default();
        assert!(!roster.player1.is_empty());
        assert!(!roster.player2.is_empty());
    }

    #[test]
    fn test_name_of() {
        let roster = Roster::new("Ada", "Grace");
        assert_eq!(roster.name_of(Player::First), "Ada");
        assert_eq!(roster.name_of(Player::Second), "Grace");
    }
}

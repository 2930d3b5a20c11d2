//! Display names for the two players.

use crate::Player;
use serde::{Deserialize, Serialize};

/// The fixed pair of players in a session, with their display names.
///
/// Names are for display only; turn order and win checks use [`Player`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    x: String,
    o: String,
}

impl Players {
    /// Creates a roster from the names of X and O.
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
        }
    }

    /// Display name of `player`.
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }
}

impl Default for Players {
    fn default() -> Self {
        Self::new("player1", "player2")
    }
}

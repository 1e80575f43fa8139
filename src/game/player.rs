#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Row delta of a forward step. First starts at the top and moves toward
    /// row 0; Second moves toward the last row.
    pub fn forward(self) -> isize {
        match self {
            Player::First => -1,
            Player::Second => 1,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::First => "Red",
            Player::Second => "White",
        }
    }
}

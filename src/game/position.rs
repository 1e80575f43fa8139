use std::collections::BTreeSet;
use std::fmt;

use super::board::BOARD_SIZE;

/// Set of destination cells a selected piece may move to.
pub type MoveSet = BTreeSet<Position>;

/// A cell on the board. Row 0 is the top edge, column 0 the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Check if both coordinates lie on the board
    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Dark squares are the only cells that may ever hold a piece
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Step by a signed delta, returning `None` if the result leaves the board
    pub fn offset(self, drow: isize, dcol: isize) -> Option<Position> {
        let row = self.row.checked_add_signed(drow)?;
        let col = self.col.checked_add_signed(dcol)?;
        let target = Position { row, col };
        target.in_bounds().then_some(target)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        assert!(Position::new(0, 0).in_bounds());
        assert!(Position::new(7, 7).in_bounds());
        assert!(!Position::new(8, 0).in_bounds());
        assert!(!Position::new(0, 8).in_bounds());
    }

    #[test]
    fn test_dark_squares() {
        assert!(Position::new(0, 1).is_dark());
        assert!(Position::new(2, 1).is_dark());
        assert!(!Position::new(0, 0).is_dark());
        assert!(!Position::new(3, 3).is_dark());
    }

    #[test]
    fn test_offset_stays_on_board() {
        let pos = Position::new(2, 1);
        assert_eq!(pos.offset(-1, -1), Some(Position::new(1, 0)));
        assert_eq!(pos.offset(1, 1), Some(Position::new(3, 2)));
    }

    #[test]
    fn test_offset_off_board() {
        assert_eq!(Position::new(0, 3).offset(-1, 1), None);
        assert_eq!(Position::new(4, 0).offset(1, -1), None);
        assert_eq!(Position::new(7, 6).offset(1, 1), None);
        assert_eq!(Position::new(3, 7).offset(-1, 1), None);
    }

    #[test]
    fn test_move_set_is_ordered() {
        let moves: MoveSet = [Position::new(1, 2), Position::new(1, 0)].into_iter().collect();
        let ordered: Vec<_> = moves.into_iter().collect();
        assert_eq!(ordered, vec![Position::new(1, 0), Position::new(1, 2)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 4).to_string(), "(3, 4)");
    }
}

use super::{Player, Position};

/// A playing token. Position and king status are only changed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    color: Player,
    position: Position,
    king: bool,
}

impl Piece {
    pub(crate) fn new(color: Player, position: Position) -> Self {
        Piece {
            color,
            position,
            king: false,
        }
    }

    pub fn color(&self) -> Player {
        self.color
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_king(&self) -> bool {
        self.king
    }

    /// The two forward diagonals. Kings step the same way as plain pieces.
    pub fn step_directions(&self) -> [(isize, isize); 2] {
        let forward = self.color.forward();
        [(forward, -1), (forward, 1)]
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Promotion is permanent; there is no way back.
    pub(crate) fn make_king(&mut self) {
        self.king = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_piece_is_not_king() {
        let piece = Piece::new(Player::First, Position::new(2, 1));
        assert!(!piece.is_king());
        assert_eq!(piece.color(), Player::First);
        assert_eq!(piece.position(), Position::new(2, 1));
    }

    #[test]
    fn test_step_directions_by_color() {
        let red = Piece::new(Player::First, Position::new(2, 1));
        let white = Piece::new(Player::Second, Position::new(5, 0));
        assert_eq!(red.step_directions(), [(-1, -1), (-1, 1)]);
        assert_eq!(white.step_directions(), [(1, -1), (1, 1)]);
    }

    #[test]
    fn test_king_keeps_directions() {
        let mut piece = Piece::new(Player::Second, Position::new(7, 0));
        piece.make_king();
        piece.make_king();
        assert!(piece.is_king());
        assert_eq!(piece.step_directions(), [(1, -1), (1, 1)]);
    }
}

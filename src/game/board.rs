use std::fmt;

use super::{Piece, Player, Position};

pub const BOARD_SIZE: usize = 8;
/// Rows each side fills at the start of a game
pub const STARTING_ROWS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell {0} is outside the board")]
    OutOfBounds(Position),

    #[error("cell {0} is a light square")]
    LightSquare(Position),

    #[error("cell {0} is already occupied")]
    Occupied(Position),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Board with both sides set up: First on the dark squares of the top
    /// three rows, Second on the dark squares of the bottom three.
    pub fn starting() -> Self {
        let mut board = Board::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Position::new(row, col);
                if !pos.is_dark() {
                    continue;
                }
                let color = if row < STARTING_ROWS {
                    Player::First
                } else if row >= BOARD_SIZE - STARTING_ROWS {
                    Player::Second
                } else {
                    continue;
                };
                board.cells[row][col] = Some(Piece::new(color, pos));
            }
        }
        board
    }

    /// Get the piece at a position, `None` for empty or off-board cells
    pub fn get(&self, pos: Position) -> Option<&Piece> {
        if !pos.in_bounds() {
            return None;
        }
        self.cells[pos.row][pos.col].as_ref()
    }

    /// True for an on-board cell with no piece
    pub fn is_empty(&self, pos: Position) -> bool {
        pos.in_bounds() && self.cells[pos.row][pos.col].is_none()
    }

    /// Put a fresh piece on the board. Used to build custom positions.
    pub fn place(&mut self, color: Player, pos: Position) -> Result<&Piece, BoardError> {
        if !pos.in_bounds() {
            return Err(BoardError::OutOfBounds(pos));
        }
        if !pos.is_dark() {
            return Err(BoardError::LightSquare(pos));
        }
        let cell = &mut self.cells[pos.row][pos.col];
        if cell.is_some() {
            return Err(BoardError::Occupied(pos));
        }
        Ok(&*cell.insert(Piece::new(color, pos)))
    }

    /// Move the piece at `from` onto the empty cell `to`, keeping its stored
    /// position in sync. Callers have already checked legality.
    pub(crate) fn relocate(&mut self, from: Position, to: Position) -> Option<&mut Piece> {
        if !self.is_empty(to) {
            return None;
        }
        let mut piece = self.cells.get_mut(from.row)?.get_mut(from.col)?.take()?;
        piece.set_position(to);
        Some(self.cells[to.row][to.col].insert(piece))
    }

    /// All pieces in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.cells.iter().flatten().flatten()
    }

    /// Number of pieces of one color still on the board
    pub fn count(&self, color: Player) -> usize {
        self.pieces().filter(|p| p.color() == color).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// ASCII diagram: `r`/`R` for First (plain/king), `w`/`W` for Second,
/// `.` for empty dark squares, space for light squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Position::new(row, col);
                let symbol = match self.get(pos) {
                    Some(p) => match (p.color(), p.is_king()) {
                        (Player::First, false) => 'r',
                        (Player::First, true) => 'R',
                        (Player::Second, false) => 'w',
                        (Player::Second, true) => 'W',
                    },
                    None if pos.is_dark() => '.',
                    None => ' ',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

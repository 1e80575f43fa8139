use tracing::{debug, info};

use super::{Board, MoveSet, Piece, Player, Position, BOARD_SIZE};

/// Why a selection attempt changed nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("no piece at {0}")]
    EmptySquare(Position),

    #[error("piece at {at} belongs to {}", .owner.name())]
    NotYourPiece { at: Position, owner: Player },
}

/// Why a move attempt changed nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no piece selected")]
    NoSelection,

    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cannot move to {0}")]
    IllegalDestination(Position),
}

/// Result of a completed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Position,
    pub to: Position,
    pub promoted: bool,
}

/// Board, turn and selection. All mutation goes through `select_piece` and
/// `move_piece`; renderers only read.
///
/// Invariants: a selected piece is on the board and belongs to `turn`;
/// `valid_moves` is empty whenever nothing is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Player,
    selected: Option<Position>,
    valid_moves: MoveSet,
}

impl GameState {
    /// Create a new game: starting layout, First to move, nothing selected
    pub fn new() -> Self {
        info!("new game");
        Self::from_board(Board::starting(), Player::First)
    }

    /// Start from an arbitrary position
    pub fn from_board(board: Board, turn: Player) -> Self {
        GameState {
            board,
            turn,
            selected: None,
            valid_moves: MoveSet::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player allowed to select and move
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn selected_piece(&self) -> Option<&Piece> {
        self.selected.and_then(|pos| self.board.get(pos))
    }

    /// Destinations for the selected piece; empty when nothing is selected
    pub fn valid_moves(&self) -> &MoveSet {
        &self.valid_moves
    }

    /// Select the piece at (row, col). Returns false, leaving state untouched,
    /// unless the cell holds a piece of the player to move.
    pub fn select_piece(&mut self, row: usize, col: usize) -> bool {
        self.try_select_piece(row, col).is_ok()
    }

    /// Like `select_piece`, reporting why nothing was selected.
    /// Replaces any previous selection on success.
    pub fn try_select_piece(&mut self, row: usize, col: usize) -> Result<&MoveSet, SelectError> {
        let pos = Position::new(row, col);
        if !pos.in_bounds() {
            return Err(SelectError::OutOfBounds { row, col });
        }
        let piece = self.board.get(pos).ok_or(SelectError::EmptySquare(pos))?;
        if piece.color() != self.turn {
            return Err(SelectError::NotYourPiece {
                at: pos,
                owner: piece.color(),
            });
        }

        let moves = self.compute_valid_moves(piece);
        debug!(%pos, moves = moves.len(), "piece selected");
        self.selected = Some(pos);
        self.valid_moves = moves;
        Ok(&self.valid_moves)
    }

    /// Empty, on-board cells one diagonal step forward from `piece`.
    /// An occupied neighbour blocks that direction; nothing is ever jumped.
    pub fn compute_valid_moves(&self, piece: &Piece) -> MoveSet {
        let from = piece.position();
        piece
            .step_directions()
            .into_iter()
            .filter_map(|(drow, dcol)| from.offset(drow, dcol))
            .filter(|&to| self.board.is_empty(to))
            .collect()
    }

    /// Move the selected piece to (row, col). Returns false, leaving state
    /// untouched, when nothing is selected or the cell is not a valid move.
    pub fn move_piece(&mut self, row: usize, col: usize) -> bool {
        self.try_move_piece(row, col).is_ok()
    }

    /// Like `move_piece`, reporting what happened.
    ///
    /// On success the piece is relocated, crowned if it landed on either end
    /// row, the turn passes and the selection is cleared.
    pub fn try_move_piece(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        let from = self.selected.ok_or(MoveError::NoSelection)?;
        let to = Position::new(row, col);
        if !to.in_bounds() {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if !self.valid_moves.contains(&to) {
            return Err(MoveError::IllegalDestination(to));
        }

        let piece = self
            .board
            .relocate(from, to)
            .ok_or(MoveError::IllegalDestination(to))?;

        let promoted = (to.row == 0 || to.row == BOARD_SIZE - 1) && !piece.is_king();
        if promoted {
            piece.make_king();
            info!(%to, color = piece.color().name(), "piece crowned");
        }
        debug!(%from, %to, "piece moved");

        self.change_turn();
        self.clear_selection();

        Ok(MoveOutcome { from, to, promoted })
    }

    /// Drop the current selection, if any
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.valid_moves.clear();
    }

    fn change_turn(&mut self) {
        self.turn = self.turn.other();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

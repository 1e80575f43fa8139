use crate::game::{GameState, Player, Position, BOARD_SIZE};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Terminal columns per board cell
pub const CELL_WIDTH: u16 = 3;

/// Outer size of the bordered board
pub const BOARD_WIDTH: u16 = BOARD_SIZE as u16 * CELL_WIDTH + 2;
pub const BOARD_HEIGHT: u16 = BOARD_SIZE as u16 + 2;

const LIGHT_SQUARE: Color = Color::Gray;
const DARK_SQUARE: Color = Color::Black;
const SELECTED_SQUARE: Color = Color::Yellow;
const MOVE_HINT: Color = Color::DarkGray;

/// Place the board in the middle of `area`, clipped to fit.
pub fn board_rect(area: Rect) -> Rect {
    let width = BOARD_WIDTH.min(area.width);
    let height = BOARD_HEIGHT.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Map a terminal cell inside a board drawn at `board` to a board position.
/// Borders and anything outside the grid map to `None`.
pub fn cell_at(board: Rect, column: u16, row: u16) -> Option<Position> {
    let left = board.x + 1;
    let top = board.y + 1;
    if column < left || row < top {
        return None;
    }
    let pos = Position::new(
        usize::from(row - top),
        usize::from((column - left) / CELL_WIDTH),
    );
    pos.in_bounds().then_some(pos)
}

fn piece_color(player: Player) -> Color {
    match player {
        Player::First => Color::Red,
        Player::Second => Color::White,
    }
}

/// Render the board with pieces, selection, move hints and cursor.
pub fn render_board(
    frame: &mut Frame,
    state: &GameState,
    cursor: Option<Position>,
    show_valid_moves: bool,
    area: Rect,
) {
    let board = state.board();
    let selected = state.selected_piece().map(|p| p.position());
    let mut lines = Vec::with_capacity(BOARD_SIZE);

    for row in 0..BOARD_SIZE {
        let mut spans = Vec::with_capacity(BOARD_SIZE);
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            let background = if selected == Some(pos) {
                SELECTED_SQUARE
            } else if pos.is_dark() {
                DARK_SQUARE
            } else {
                LIGHT_SQUARE
            };
            let mut style = Style::default().bg(background);

            let symbol = match board.get(pos) {
                Some(piece) => {
                    style = style.fg(piece_color(piece.color())).add_modifier(Modifier::BOLD);
                    if piece.is_king() {
                        " \u{25c9} "
                    } else {
                        " \u{25cf} "
                    }
                }
                None if show_valid_moves && state.valid_moves().contains(&pos) => {
                    style = style.fg(MOVE_HINT);
                    " \u{2022} "
                }
                None => "   ",
            };

            if cursor == Some(pos) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(symbol, style));
        }
        lines.push(Line::from(spans));
    }

    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

use crate::game::{GameState, Player, Position};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget;

/// Draw the whole screen and return where the board landed, so mouse clicks
/// can be mapped back to cells.
pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    cursor: Position,
    show_valid_moves: bool,
    message: &Option<String>,
) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(board_widget::BOARD_HEIGHT), // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    let board_area = board_widget::board_rect(chunks[1]);
    board_widget::render_board(frame, game_state, Some(cursor), show_valid_moves, board_area);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
    board_area
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let turn = game_state.turn();
    let color = match turn {
        Player::First => Color::Red,
        Player::Second => Color::White,
    };

    let status = match game_state.selected_piece() {
        Some(piece) => format!(
            "Current Player: {}  |  Selected {}",
            turn.name(),
            piece.position()
        ),
        None => format!("Current Player: {}", turn.name()),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Checkers"));

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("Arrows: Cursor  |  Enter/Click: Select or Move  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

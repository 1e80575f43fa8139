use crate::config::UiConfig;
use crate::game::{GameState, Position, BOARD_SIZE};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;
use std::time::Duration;
use tracing::debug;

use super::board_widget;

pub struct App {
    game_state: GameState,
    cursor: Position,
    should_quit: bool,
    message: Option<String>,
    board_area: Rect,
    config: UiConfig,
}

impl App {
    pub fn new(config: UiConfig) -> Self {
        App {
            game_state: GameState::new(),
            cursor: Position::new(2, 1),
            should_quit: false,
            message: None,
            board_area: Rect::default(),
            config,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            let mut board_area = self.board_area;
            terminal
                .draw(|f| board_area = self.render(f))
                .map_err(|e| -> io::Error { e.into() })?;
            self.board_area = board_area;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and mouse events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(self.config.tick_rate_ms))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) if self.config.mouse => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.click(self.cursor);
            }
            KeyCode::Char('r') => {
                self.game_state = GameState::new();
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(pos) = board_widget::cell_at(self.board_area, mouse.column, mouse.row) {
            self.cursor = pos;
            self.click(pos);
        }
    }

    /// Cursor stays on the board, so clicks never carry out-of-range cells.
    fn move_cursor(&mut self, drow: isize, dcol: isize) {
        let clamp = |v: usize, d: isize| v.saturating_add_signed(d).min(BOARD_SIZE - 1);
        self.cursor = Position::new(clamp(self.cursor.row, drow), clamp(self.cursor.col, dcol));
    }

    /// A click on a board cell: with a piece selected try to move there and
    /// drop the selection if that fails; otherwise try to select.
    pub fn click(&mut self, pos: Position) {
        debug!(%pos, "click");
        if self.game_state.selected_piece().is_some() {
            match self.game_state.try_move_piece(pos.row, pos.col) {
                Ok(outcome) => {
                    self.message = Some(if outcome.promoted {
                        format!("{} -> {}, crowned!", outcome.from, outcome.to)
                    } else {
                        format!("{} -> {}", outcome.from, outcome.to)
                    });
                }
                Err(err) => {
                    self.game_state.clear_selection();
                    self.message = Some(err.to_string());
                }
            }
        } else {
            self.message = Some(match self.game_state.try_select_piece(pos.row, pos.col) {
                Ok(moves) if moves.is_empty() => format!("Piece at {pos} has no moves"),
                Ok(_) => format!("Selected {pos}"),
                Err(err) => err.to_string(),
            });
        }
    }

    /// Render the UI, returning the board area
    fn render(&self, frame: &mut ratatui::Frame) -> Rect {
        super::game_view::render(
            frame,
            &self.game_state,
            self.cursor,
            self.config.show_valid_moves,
            &self.message,
        )
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_click_selects_own_piece() {
        let mut app = App::default();
        app.click(Position::new(2, 1));
        assert_eq!(
            app.game_state().selected_piece().map(|p| p.position()),
            Some(Position::new(2, 1))
        );
    }

    #[test]
    fn test_click_on_empty_does_not_select() {
        let mut app = App::default();
        app.click(Position::new(3, 0));
        assert!(app.game_state().selected_piece().is_none());
        assert_eq!(app.message.as_deref(), Some("no piece at (3, 0)"));
    }

    #[test]
    fn test_failed_move_clears_selection() {
        let mut app = App::default();
        app.click(Position::new(2, 1));
        app.click(Position::new(3, 2));
        assert!(app.game_state().selected_piece().is_none());
        assert!(app.game_state().valid_moves().is_empty());
        assert_eq!(app.game_state().turn(), Player::First);
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut app = App::default();
        for _ in 0..10 {
            press(&mut app, KeyCode::Up);
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.cursor, Position::new(0, 0));
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.cursor, Position::new(7, 7));
    }

    #[test]
    fn test_enter_clicks_cursor() {
        let mut app = App::default();
        press(&mut app, KeyCode::Enter);
        assert!(app.game_state().selected_piece().is_some());
    }

    #[test]
    fn test_restart_resets_game() {
        let mut app = App::default();
        app.click(Position::new(2, 1));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game_state(), &GameState::new());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_mouse_click_maps_to_cell() {
        let mut app = App::default();
        app.board_area = Rect::new(0, 0, board_widget::BOARD_WIDTH, board_widget::BOARD_HEIGHT);
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 1 + board_widget::CELL_WIDTH,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.cursor, Position::new(2, 1));
        assert!(app.game_state().selected_piece().is_some());
    }
}

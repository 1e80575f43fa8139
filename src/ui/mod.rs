//! Terminal UI: draws the board from engine state and turns key presses and
//! mouse clicks into select/move commands.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;

//! # Checkers
//!
//! A two-player checkers board in the terminal. The rule set is deliberately
//! small: pieces step one square diagonally forward onto empty dark squares,
//! and reaching either end row crowns a piece. There are no captures.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, pieces, players, select/move state machine
//! - [`ui`] — Terminal UI built with Ratatui: board rendering and input handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;

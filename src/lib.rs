//! # Wide Connect Four
//!
//! Connect Four on a 6x12 board against a depth-limited alpha-beta opponent.
//! Play it on the console or in a terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] - Core game logic: board, players, terminal classification
//! - [`ai`] - Agent trait, alpha-beta search, alignment heuristic, random baseline
//! - [`session`] - Console turn loop with timing of the computer's moves
//! - [`ui`] - Console board rendering and the terminal UI
//! - [`config`] - TOML configuration loading and validation
//! - [`error`] - Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod ui;

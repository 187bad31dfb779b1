//! Front-ends: plain-text board rendering for the console session and a
//! terminal UI for playing against the computer.

mod app;
pub mod console;
mod game_view;

pub use app::{App, Status};

//! Console game loop: a human and the computer take turns on one board.

use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use log::info;

use crate::ai::Agent;
use crate::error::SessionError;
use crate::game::{Board, Player};
use crate::ui::console::render_board;

/// Side the computer plays. Cross is the side the search maximizes for.
pub const COMPUTER: Player = Player::Cross;

/// Session settings, loadable from the `[session]` table of the config file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Whether the computer moves first. Asked on the console when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_first: Option<bool>,
    /// Print the average computer move time when the game ends.
    pub show_timing: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            ai_first: None,
            show_timing: true,
        }
    }
}

/// How a finished session went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// `None` when the board filled up without a winner.
    pub winner: Option<Player>,
    pub moves: usize,
    pub computer_moves: usize,
    pub computer_time: Duration,
}

impl SessionSummary {
    pub fn average_computer_time(&self) -> Option<Duration> {
        if self.computer_moves == 0 {
            return None;
        }
        Some(self.computer_time / self.computer_moves as u32)
    }
}

/// Interactive game between a human on `input`/`output` and `agent`.
pub struct Session<'a, R, W> {
    agent: &'a mut dyn Agent,
    config: SessionConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(agent: &'a mut dyn Agent, config: SessionConfig, input: R, output: W) -> Self {
        Session {
            agent,
            config,
            input,
            output,
        }
    }

    /// Play one game to a win or a full board.
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        let computer_first = match self.config.ai_first {
            Some(first) => first,
            None => self.ask_computer_first()?,
        };
        info!(
            "starting game, computer plays {} and moves {}",
            COMPUTER.name(),
            if computer_first { "first" } else { "second" }
        );

        let mut board = Board::new();
        let mut to_move = if computer_first { COMPUTER } else { COMPUTER.other() };
        let mut summary = SessionSummary {
            winner: None,
            moves: 0,
            computer_moves: 0,
            computer_time: Duration::ZERO,
        };

        write!(self.output, "{}", render_board(&board))?;

        while !board.is_full() {
            let col = if to_move == COMPUTER {
                let started = Instant::now();
                let col = self.agent.select_move(&board, to_move)?;
                let elapsed = started.elapsed();
                summary.computer_time += elapsed;
                summary.computer_moves += 1;

                if !board.is_playable(col) {
                    return Err(SessionError::IllegalMove {
                        agent: self.agent.name().to_string(),
                        column: col,
                        legal: board.available_moves(),
                    });
                }
                info!("{} chose column {} in {:?}", self.agent.name(), col, elapsed);
                writeln!(self.output, "Computer plays column {col}")?;
                col
            } else {
                self.ask_column(&board, to_move)?
            };

            board.drop_piece(col, to_move);
            summary.moves += 1;
            write!(self.output, "{}", render_board(&board))?;

            if board.has_won(to_move) {
                summary.winner = Some(to_move);
                break;
            }
            to_move = to_move.other();
        }

        match summary.winner {
            Some(player) if player == COMPUTER => writeln!(self.output, "Computer ({}) wins!", player.name())?,
            Some(player) => writeln!(self.output, "You ({}) win!", player.name())?,
            None => writeln!(self.output, "The board is full: it's a draw!")?,
        }

        if self.config.show_timing {
            if let Some(average) = summary.average_computer_time() {
                writeln!(
                    self.output,
                    "Average computer move time: {:.3}s",
                    average.as_secs_f64()
                )?;
            }
        }

        info!(
            "game over after {} moves, winner: {}",
            summary.moves,
            summary.winner.map_or("none", Player::name)
        );
        Ok(summary)
    }

    fn read_line(&mut self) -> Result<String, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn ask_computer_first(&mut self) -> Result<bool, SessionError> {
        loop {
            write!(self.output, "Does the computer play first? 1 (yes) 0 (no): ")?;
            self.output.flush()?;
            match parse_yes_no(&self.read_line()?) {
                Some(answer) => return Ok(answer),
                None => writeln!(self.output, "Please answer 1 or 0.")?,
            }
        }
    }

    fn ask_column(&mut self, board: &Board, player: Player) -> Result<usize, SessionError> {
        loop {
            writeln!(self.output, "Available moves: {:?}", board.available_moves())?;
            write!(self.output, "{}, enter a column number: ", player.name())?;
            self.output.flush()?;

            let line = self.read_line()?;
            match line.parse::<usize>() {
                Ok(col) if board.is_playable(col) => return Ok(col),
                Ok(col) => writeln!(self.output, "Column {col} is not playable.")?,
                Err(_) => writeln!(self.output, "'{line}' is not a column number.")?,
            }
        }
    }
}

/// Accepts the source prompt's 1/0 as well as the usual words.
fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.to_ascii_lowercase().as_str() {
        "1" | "y" | "yes" | "true" => Some(true),
        "0" | "n" | "no" | "false" => Some(false),
        _ => None,
    }
}

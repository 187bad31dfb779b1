use crate::ai::Agent;
use crate::game::{Board, Player, COLS};
use crate::session::COMPUTER;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use log::{error, info};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// How the current game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won(Player),
    Draw,
}

pub struct App {
    board: Board,
    agent: Box<dyn Agent>,
    computer_first: bool,
    status: Status,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(agent: Box<dyn Agent>, computer_first: bool) -> Self {
        let mut app = App {
            board: Board::new(),
            agent,
            computer_first,
            status: Status::InProgress,
            selected_column: COLS / 2,
            should_quit: false,
            message: None,
        };
        app.reset();
        app
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn agent_name(&self) -> &str {
        self.agent.name()
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play_selected();
            }
            KeyCode::Char('r') => {
                self.reset();
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Start a fresh game, letting the computer open if it moves first.
    fn reset(&mut self) {
        self.board = Board::new();
        self.status = Status::InProgress;
        self.selected_column = COLS / 2;
        if self.computer_first {
            self.computer_turn();
        }
    }

    /// Drop the human piece in the selected column, then let the computer reply.
    fn play_selected(&mut self) {
        if self.status != Status::InProgress {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        if !self.board.is_playable(self.selected_column) {
            self.message = Some("Column is full!".to_string());
            return;
        }

        self.board.drop_piece(self.selected_column, COMPUTER.other());
        self.update_status(COMPUTER.other());

        if self.status == Status::InProgress {
            self.computer_turn();
        }
    }

    fn computer_turn(&mut self) {
        match self.agent.select_move(&self.board, COMPUTER) {
            Ok(col) if self.board.is_playable(col) => {
                info!("{} plays column {}", self.agent.name(), col);
                self.board.drop_piece(col, COMPUTER);
                self.update_status(COMPUTER);
            }
            Ok(col) => {
                error!("{} picked unplayable column {}", self.agent.name(), col);
                self.message = Some(format!("Computer picked unplayable column {col}"));
            }
            Err(err) => {
                error!("{} failed to move: {}", self.agent.name(), err);
                self.message = Some(err.to_string());
            }
        }
    }

    fn update_status(&mut self, last_mover: Player) {
        if self.board.has_won(last_mover) {
            self.status = Status::Won(last_mover);
            self.message = Some(if last_mover == COMPUTER {
                format!("Computer ({}) wins!", last_mover.name())
            } else {
                format!("You ({}) win!", last_mover.name())
            });
        } else if self.board.is_full() {
            self.status = Status::Draw;
            self.message = Some("It's a draw!".to_string());
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, self, self.selected_column, &self.message);
    }
}

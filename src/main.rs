use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use wide_connect_four::ai::{AlignmentHeuristic, AlphaBetaAgent};
use wide_connect_four::config::AppConfig;
use wide_connect_four::session::Session;
use wide_connect_four::ui::App;

/// Play Connect Four on a 6x12 board against an alpha-beta search.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play 6x12 Connect Four against the computer")]
struct Cli {
    /// Whether the computer moves first (asked interactively when omitted)
    #[arg(long)]
    ai_first: Option<bool>,

    /// Play in the terminal UI instead of the line-based console
    #[arg(long)]
    tui: bool,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override the search depth in plies
    #[arg(long)]
    depth: Option<usize>,

    /// Disable alpha-beta cutoffs (same moves, more work)
    #[arg(long)]
    no_pruning: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        app_config.search.depth = depth;
    }
    if cli.no_pruning {
        app_config.search.pruning = false;
    }
    if cli.ai_first.is_some() {
        app_config.session.ai_first = cli.ai_first;
    }
    app_config.validate().context("invalid settings")?;

    let mut agent = AlphaBetaAgent::with_heuristic(
        app_config.search,
        Box::new(AlignmentHeuristic::new(app_config.heuristic)),
    );

    if cli.tui {
        // The terminal UI has no prompt, so default to the human opening
        let computer_first = app_config.session.ai_first.unwrap_or(false);
        run_tui(App::new(Box::new(agent), computer_first)).context("terminal UI failed")?;
        return Ok(());
    }

    let stdin = io::stdin();
    let mut session = Session::new(&mut agent, app_config.session, stdin.lock(), io::stdout());
    session.run().context("game session failed")?;
    Ok(())
}

fn run_tui(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}

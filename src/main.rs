use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use connect_four::ai::Difficulty;
use connect_four::config::AppConfig;
use connect_four::console::ConsoleGame;
use connect_four::ui::App;

/// Play Connect Four against the computer.
#[derive(Parser)]
#[command(name = "connect_four", about = "Play Connect Four against the computer")]
struct Cli {
    /// Opponent strength
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Search depth in plies for the hard opponent
    #[arg(long)]
    depth: Option<u32>,

    /// Let the computer make the first move
    #[arg(long)]
    computer_first: bool,

    /// Piece symbols for the human and the computer, e.g. `--symbols x o`
    #[arg(long, num_args = 2, value_names = ["HUMAN", "COMPUTER"])]
    symbols: Option<Vec<char>>,

    /// Seed for the randomized opponents
    #[arg(long)]
    seed: Option<u64>,

    /// Play in plain text on stdin/stdout instead of the terminal UI
    #[arg(long)]
    headless: bool,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(difficulty) = self.difficulty {
            config.game.difficulty = difficulty;
        }
        if let Some(depth) = self.depth {
            config.engine.depth = depth;
        }
        if self.computer_first {
            config.game.human_first = false;
        }
        if let Some(symbols) = &self.symbols {
            if let [human, computer] = symbols.as_slice() {
                config.game.human_symbol = *human;
                config.game.computer_symbol = *computer;
            }
        }
        if self.seed.is_some() {
            config.engine.seed = self.seed;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    if cli.headless {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(io::stderr)
            .init();
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    cli.apply_overrides(&mut config);
    config.validate().context("invalid command-line settings")?;

    if cli.headless {
        let stdin = io::stdin();
        let mut game = ConsoleGame::new(stdin.lock(), io::stdout(), config);
        game.run().context("console game failed")?;
        Ok(())
    } else {
        run_tui(config).context("terminal UI failed")
    }
}

fn run_tui(config: AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal even if the app failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
